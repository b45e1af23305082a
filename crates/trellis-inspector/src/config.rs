//! Inspector configuration.

use std::time::Duration;

/// Tunables for the inspector. Hosts usually start from `Default` and
/// override individual fields from their own settings.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorConfig {
    /// Quiet period after a content change before the layer tree is rebuilt.
    /// Further changes inside the window restart it.
    pub rebuild_debounce: Duration,
    /// Horizontal indentation per nesting level in the layers panel.
    pub indent_px: f32,
    /// Maximum characters of text preview in a layer label.
    pub preview_chars: usize,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            rebuild_debounce: Duration::from_millis(100),
            indent_px: 12.0,
            preview_chars: 20,
        }
    }
}
