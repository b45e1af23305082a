//! Operator warnings with de-duplication.
//!
//! Inspector components report recoverable problems (a rebuild that had to be
//! abandoned, a zoom value outside the supported range) through here. Each
//! distinct message is logged once per session so a content tree that fails
//! on every keystroke does not flood the log.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a recoverable failure (logged once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("layers", "rebuild abandoned: node NodeId(7) is detached");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_log = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_log {
        log::warn!(target: "trellis", "[{component}] {message}");
    }
}

/// Whether `warn_once` has already emitted this message.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Forget the warnings recorded for one component so they can fire again.
/// Other components' warnings are kept.
pub fn clear_component_warnings(component: &str) {
    let prefix = format!("[{component}] ");
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.retain(|key| !key.starts_with(&prefix));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_message() {
        warn_once("test-record", "first");
        assert!(was_warned("test-record", "first"));
        assert!(!was_warned("test-record", "second"));
    }

    #[test]
    fn test_same_message_different_component() {
        warn_once("test-a", "shared");
        assert!(was_warned("test-a", "shared"));
        assert!(!was_warned("test-b", "shared"));
    }

    #[test]
    fn test_clear_is_scoped_to_component() {
        warn_once("test-scope", "rebuild failed");
        warn_once("test-scope-other", "zoom clamped");
        warn_once("test-scoped", "prefix lookalike");

        clear_component_warnings("test-scope");

        assert!(!was_warned("test-scope", "rebuild failed"));
        assert!(was_warned("test-scope-other", "zoom clamped"));
        assert!(was_warned("test-scoped", "prefix lookalike"));
    }
}
