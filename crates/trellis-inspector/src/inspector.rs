//! Inspector state for one design view.
//!
//! [`Inspector`] owns everything the design view's inspector shows: the layer
//! tree, the selection, the viewport, the grid toggle and the properties
//! panel. Hosts feed it content changes and clicks and read back rows and the
//! selection overlay.
//!
//! Processing order for a content change:
//!
//! ```text
//! set_content / content_changed   (debounce armed)
//!         │
//!         ▼
//! tick(now, dom, root)            (rebuild once the burst is over)
//!         │
//!         ▼
//! selection cleared               (old ids are meaningless)
//!         │
//!         ▼
//! highlight(geometry) / rows()    (derived from current state)
//! ```

use std::time::Instant;

use trellis_common::warning::{clear_component_warnings, warn_once};
use trellis_dom::{DomTree, GeometrySource, NodeId};

use crate::builder::build_tree;
use crate::config::InspectorConfig;
use crate::debounce::Debouncer;
use crate::error::InspectorError;
use crate::highlight::{HighlightBox, compute_highlight};
use crate::layer::{LayerId, LayerNode, parse_layer_path};
use crate::panel::{LayerRow, set_expanded, toggle_expanded, visible_rows};
use crate::properties::CanvasProperties;
use crate::viewport::Viewport;

/// What happened on a [`Inspector::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebuildOutcome {
    /// The debounce window has not elapsed (or nothing is pending).
    Idle,
    /// The layer tree was replaced.
    Rebuilt,
    /// The rebuild failed; the previous tree is still current.
    Failed(InspectorError),
}

/// Layer inspector state.
#[derive(Debug, Clone)]
pub struct Inspector {
    config: InspectorConfig,
    content_key: Option<String>,
    tree: Option<LayerNode>,
    selected: Option<LayerId>,
    viewport: Viewport,
    show_grid: bool,
    properties: CanvasProperties,
    rebuild: Debouncer,
    generation: u64,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new(InspectorConfig::default())
    }
}

impl Inspector {
    /// Create an inspector with no content.
    #[must_use]
    pub fn new(config: InspectorConfig) -> Self {
        let rebuild = Debouncer::new(config.rebuild_debounce);
        Self {
            config,
            content_key: None,
            tree: None,
            selected: None,
            viewport: Viewport::default(),
            show_grid: true,
            properties: CanvasProperties::default(),
            rebuild,
            generation: 0,
        }
    }

    /// The configuration this inspector was created with.
    #[must_use]
    pub const fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Key of the content currently shown (usually the active file name).
    #[must_use]
    pub fn content_key(&self) -> Option<&str> {
        self.content_key.as_deref()
    }

    /// The current layer tree, if a build has succeeded.
    #[must_use]
    pub const fn tree(&self) -> Option<&LayerNode> {
        self.tree.as_ref()
    }

    /// Number of successful builds so far.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The selected layer id. It may be stale; see [`Inspector::highlight`].
    #[must_use]
    pub const fn selected(&self) -> Option<LayerId> {
        self.selected
    }

    /// The selected layer, if the selection is in the current tree.
    #[must_use]
    pub fn selected_layer(&self) -> Option<&LayerNode> {
        self.tree.as_ref()?.find(self.selected?)
    }

    /// Device and zoom.
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable device and zoom.
    pub const fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Whether the canvas grid overlay is drawn.
    #[must_use]
    pub const fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Flip the grid overlay.
    pub const fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    /// Properties panel values.
    #[must_use]
    pub const fn properties(&self) -> &CanvasProperties {
        &self.properties
    }

    /// Mutable properties panel values.
    pub const fn properties_mut(&mut self) -> &mut CanvasProperties {
        &mut self.properties
    }

    /// Whether a rebuild is waiting for its debounce window.
    #[must_use]
    pub const fn rebuild_pending(&self) -> bool {
        self.rebuild.is_pending()
    }

    /// The host switched to different content. Arms a rebuild if the key
    /// actually changed and returns whether it did.
    ///
    /// The selection is dropped at once: until the rebuild runs, the old
    /// tree's elements are not part of the new content.
    pub fn set_content(&mut self, key: &str, now: Instant) -> bool {
        if self.content_key.as_deref() == Some(key) {
            return false;
        }
        log::debug!("content switched to '{key}'");
        self.content_key = Some(key.to_string());
        self.selected = None;
        self.rebuild.trigger(now);
        true
    }

    /// The current content was edited in place. Arms (or re-arms) a rebuild.
    pub fn content_changed(&mut self, now: Instant) {
        self.rebuild.trigger(now);
    }

    /// Run the debounced rebuild if its window has elapsed.
    pub fn tick(&mut self, now: Instant, dom: &DomTree, root: NodeId) -> RebuildOutcome {
        if !self.rebuild.poll(now) {
            return RebuildOutcome::Idle;
        }
        match self.rebuild_now(dom, root) {
            Ok(()) => RebuildOutcome::Rebuilt,
            Err(err) => RebuildOutcome::Failed(err),
        }
    }

    /// Rebuild immediately, bypassing the debounce.
    ///
    /// On success the old tree, its expansion state and the selection are
    /// discarded. On failure nothing changes and the error is logged.
    ///
    /// # Errors
    /// Returns the [`build_tree`] error.
    pub fn rebuild_now(&mut self, dom: &DomTree, root: NodeId) -> Result<(), InspectorError> {
        self.rebuild.cancel();
        match build_tree(dom, root) {
            Ok(tree) => {
                clear_component_warnings("layers");
                self.tree = Some(tree);
                self.selected = None;
                self.generation += 1;
                Ok(())
            }
            Err(err) => {
                warn_once("layers", &format!("rebuild abandoned, keeping previous tree: {err}"));
                Err(err)
            }
        }
    }

    /// Select a layer (a click on its row), or clear the selection.
    pub const fn select(&mut self, id: Option<LayerId>) {
        self.selected = id;
    }

    /// Select the layer at a dot-separated child-index path (`""` = root).
    ///
    /// # Errors
    /// Returns [`InspectorError::UnknownLayerPath`] if the path is malformed
    /// or does not exist in the current tree. The selection is unchanged.
    pub fn select_path(&mut self, path: &str) -> Result<LayerId, InspectorError> {
        let id = self.resolve_path(path)?;
        self.selected = Some(id);
        Ok(id)
    }

    /// Find the id of the layer at `path`.
    ///
    /// # Errors
    /// Returns [`InspectorError::UnknownLayerPath`] if there is no such layer.
    pub fn resolve_path(&self, path: &str) -> Result<LayerId, InspectorError> {
        let indices = parse_layer_path(path)?;
        self.tree
            .as_ref()
            .and_then(|tree| tree.at_path(&indices))
            .map(|layer| layer.id)
            .ok_or_else(|| InspectorError::UnknownLayerPath(path.to_string()))
    }

    /// Flip one layer's disclosure state. Returns `false` for unknown ids.
    pub fn toggle_expanded(&mut self, id: LayerId) -> bool {
        self.tree
            .as_mut()
            .is_some_and(|tree| toggle_expanded(tree, id))
    }

    /// Set one layer's disclosure state. Returns `false` for unknown ids.
    pub fn set_expanded(&mut self, id: LayerId, expanded: bool) -> bool {
        self.tree
            .as_mut()
            .is_some_and(|tree| set_expanded(tree, id, expanded))
    }

    /// Rows of the layers panel.
    #[must_use]
    pub fn rows(&self) -> Vec<LayerRow> {
        self.tree
            .as_ref()
            .map(|tree| visible_rows(tree, self.selected, &self.config))
            .unwrap_or_default()
    }

    /// The selection overlay, computed from the current selection, tree and
    /// zoom against `geometry`.
    #[must_use]
    pub fn highlight<G>(&self, geometry: &G) -> Option<HighlightBox>
    where
        G: GeometrySource + ?Sized,
    {
        compute_highlight(self.selected, self.tree.as_ref(), &self.viewport, geometry)
    }

    /// Return to the state of a freshly opened design view.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }
}
