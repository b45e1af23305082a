//! Common utilities for the Trellis inspector.
//!
//! This crate provides shared infrastructure used by all inspector components:
//! - **Warning System** - de-duplicated operator warnings routed through `log`

pub mod warning;
