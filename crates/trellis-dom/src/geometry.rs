//! Canvas geometry.
//!
//! [CSSOM View § 6 Extensions to the Element Interface](https://drafts.csswg.org/cssom-view/#extension-to-the-element-interface)
//!
//! The inspector never measures anything itself. It asks a [`GeometrySource`]
//! the same two questions a browser overlay asks `getBoundingClientRect()`:
//! where is this element on screen, and where is the canvas container.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::NodeId;

/// A rectangle positioned in 2D space.
///
/// [CSSOM View § DOMRect](https://drafts.fxtf.org/geometry/#DOMRect)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// "The top attribute must return min(y coordinate, y coordinate + height dimension)"
    #[must_use]
    pub fn top(&self) -> f32 {
        self.y.min(self.y + self.height)
    }

    /// "The left attribute must return min(x coordinate, x coordinate + width dimension)"
    #[must_use]
    pub fn left(&self) -> f32 {
        self.x.min(self.x + self.width)
    }

    /// Whether the rectangle encloses no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Multiply position and size by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.width * factor,
            self.height * factor,
        )
    }

    /// Move the rectangle by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Answers bounding-rectangle queries for nodes of a content tree.
///
/// Both rectangles are in the same (screen) coordinate space. A node that has
/// not been laid out reports a zero-sized rectangle, as
/// `getBoundingClientRect()` does for `display: none`.
pub trait GeometrySource {
    /// On-screen bounding rectangle of `node`.
    fn element_rect(&self, node: NodeId) -> Rect;

    /// On-screen bounding rectangle of the canvas container.
    fn container_rect(&self) -> Rect;
}

/// Logical (100% zoom) border boxes for the nodes of one content tree.
///
/// The canvas rectangle is always anchored at the origin; node rectangles are
/// relative to it.
#[derive(Debug, Clone, Default)]
pub struct LayoutSnapshot {
    canvas: Rect,
    rects: HashMap<NodeId, Rect>,
}

impl LayoutSnapshot {
    /// Create an empty snapshot for a canvas of the given logical size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            canvas: Rect::new(0.0, 0.0, width, height),
            rects: HashMap::new(),
        }
    }

    /// Record the border box of `node`, replacing any previous one.
    pub fn insert(&mut self, node: NodeId, rect: Rect) {
        let _ = self.rects.insert(node, rect);
    }

    /// The recorded rectangle for `node`.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<Rect> {
        self.rects.get(&node).copied()
    }

    /// Number of nodes with a recorded rectangle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether no node has a recorded rectangle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// View this snapshot as it appears on screen under a zoom transform.
    #[must_use]
    pub const fn project(&self, origin_x: f32, origin_y: f32, scale: f32) -> ScreenProjection<'_> {
        ScreenProjection {
            layout: self,
            origin_x,
            origin_y,
            scale,
        }
    }
}

impl GeometrySource for LayoutSnapshot {
    fn element_rect(&self, node: NodeId) -> Rect {
        self.get(node).unwrap_or_default()
    }

    fn container_rect(&self) -> Rect {
        self.canvas
    }
}

/// A layout snapshot seen through the canvas's `scale()` transform.
///
/// [CSS Transforms § 13.1 2D Transform Functions](https://www.w3.org/TR/css-transforms-1/#funcdef-transform-scale)
///
/// The canvas is drawn at `origin` and every logical length is multiplied by
/// `scale`, so screen = origin + logical * scale.
#[derive(Debug, Clone, Copy)]
pub struct ScreenProjection<'a> {
    layout: &'a LayoutSnapshot,
    origin_x: f32,
    origin_y: f32,
    scale: f32,
}

impl GeometrySource for ScreenProjection<'_> {
    fn element_rect(&self, node: NodeId) -> Rect {
        self.layout
            .element_rect(node)
            .scaled(self.scale)
            .translated(self.origin_x, self.origin_y)
    }

    fn container_rect(&self) -> Rect {
        self.layout
            .container_rect()
            .scaled(self.scale)
            .translated(self.origin_x, self.origin_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_with_negative_size() {
        let rect = Rect::new(10.0, 10.0, -4.0, -6.0);
        assert!((rect.left() - 6.0).abs() < f32::EPSILON);
        assert!((rect.top() - 4.0).abs() < f32::EPSILON);
        assert!(rect.is_empty());
    }

    #[test]
    fn test_missing_node_reports_zero_rect() {
        let layout = LayoutSnapshot::new(375.0, 667.0);
        assert_eq!(layout.element_rect(NodeId(42)), Rect::default());
    }

    #[test]
    fn test_projection_scales_then_translates() {
        let mut layout = LayoutSnapshot::new(100.0, 100.0);
        layout.insert(NodeId(1), Rect::new(10.0, 20.0, 30.0, 40.0));

        let screen = layout.project(5.0, 7.0, 2.0);
        assert_eq!(screen.element_rect(NodeId(1)), Rect::new(25.0, 47.0, 60.0, 80.0));
        assert_eq!(screen.container_rect(), Rect::new(5.0, 7.0, 200.0, 200.0));
    }
}
