//! Layer inspector for the Trellis design canvas.
//!
//! # Scope
//!
//! This crate provides:
//! - **Tree Builder** - turns a content tree into a [`LayerNode`] tree
//! - **Highlight Mapper** - places the selection overlay in canvas space
//! - **Layers Panel** - visible rows with expand/collapse state
//! - **Viewport** - device presets and clamped zoom
//! - **Inspector** - the state object tying them together, with debounced
//!   rebuilds and fail-soft error handling
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use trellis_dom::samples::sample_document;
//! use trellis_inspector::{Inspector, RebuildOutcome};
//!
//! let (dom, root) = sample_document("modal.swift").unwrap();
//! let mut inspector = Inspector::default();
//!
//! let start = Instant::now();
//! assert!(inspector.set_content("modal.swift", start));
//! let outcome = inspector.tick(start + Duration::from_millis(100), &dom, root);
//! assert_eq!(outcome, RebuildOutcome::Rebuilt);
//! assert!(!inspector.rows().is_empty());
//! ```

pub mod builder;
pub mod config;
pub mod debounce;
pub mod error;
pub mod highlight;
pub mod inspector;
pub mod layer;
pub mod panel;
pub mod properties;
pub mod viewport;

pub use builder::build_tree;
pub use config::InspectorConfig;
pub use debounce::Debouncer;
pub use error::InspectorError;
pub use highlight::{HighlightBox, compute_highlight};
pub use inspector::{Inspector, RebuildOutcome};
pub use layer::{LayerId, LayerNode, LayerType, parse_layer_path};
pub use panel::{LayerRow, display_name, set_expanded, toggle_expanded, visible_rows};
pub use properties::{CanvasProperties, PropertyField};
pub use viewport::{CanvasSize, DevicePreset, Viewport};
