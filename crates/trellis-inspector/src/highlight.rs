//! Selection overlay geometry.
//!
//! The canvas is drawn with a `scale(zoom / 100)` transform, and the selection
//! overlay lives inside that transformed canvas. Bounding rectangles come back
//! in screen pixels, so they are divided by the scale to land in the canvas's
//! pre-transform space. The overlay then inherits the same transform and stays
//! aligned with the element at any zoom.

use serde::Serialize;
use trellis_dom::GeometrySource;

use crate::layer::{LayerId, LayerNode};
use crate::viewport::Viewport;

/// Overlay rectangle in logical (100% zoom) canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HighlightBox {
    /// Distance from the canvas's top edge.
    pub top: f32,
    /// Distance from the canvas's left edge.
    pub left: f32,
    /// Overlay width.
    pub width: f32,
    /// Overlay height.
    pub height: f32,
}

impl HighlightBox {
    /// The dimension label drawn under the overlay, e.g. `120 × 36`.
    /// Values are rounded to whole pixels for display only.
    #[must_use]
    pub fn dimension_label(&self) -> String {
        format!("{} \u{00d7} {}", self.width.round(), self.height.round())
    }
}

/// Compute the overlay for the selected layer.
///
/// Returns `None` when nothing is selected, when there is no tree, or when the
/// selected id is not in `tree` (for example after a rebuild). Zero-sized
/// element rectangles are returned as they are.
#[must_use]
pub fn compute_highlight<G>(
    selected: Option<LayerId>,
    tree: Option<&LayerNode>,
    viewport: &Viewport,
    geometry: &G,
) -> Option<HighlightBox>
where
    G: GeometrySource + ?Sized,
{
    let layer = tree?.find(selected?)?;

    let element = geometry.element_rect(layer.element);
    let container = geometry.container_rect();
    let scale = viewport.scale();

    Some(HighlightBox {
        top: (element.top() - container.top()) / scale,
        left: (element.left() - container.left()) / scale,
        width: element.width / scale,
        height: element.height / scale,
    })
}
