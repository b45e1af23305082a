//! Rebuild coalescing.
//!
//! A burst of content changes (typing in the editor, quickly flipping between
//! files) should produce one layer rebuild, not one per change. The debouncer
//! is a plain state machine: callers pass in the current time and poll it
//! from their event loop.

use std::time::{Duration, Instant};

/// Trailing-edge debouncer.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create an idle debouncer with the given quiet period.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record a triggering change at `now`. A pending deadline is pushed back.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a trigger is waiting to fire.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the pending trigger will fire.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` exactly once per burst, the first time it is polled at
    /// or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
