//! Approximate block-flow layout.
//!
//! [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
//!
//! "In a block formatting context, boxes are laid out one after the other,
//! vertically, beginning at the top of a containing block."
//!
//! Scenes loaded without measured geometry still need rectangles for the
//! selection overlay. This is a small subset of CSS 2.1 block
//! layout: every element is a block, widths fill the containing block, text
//! wraps at a fixed advance, and replaced elements get fixed intrinsic heights.
//! No styles are consulted.

use crate::geometry::{LayoutSnapshot, Rect};
use crate::{DomTree, IMAGE_TAGS, NodeId, NodeType, TEXT_ENTRY_TAGS};

/// Tunables for [`BlockLayout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockLayout {
    /// Padding applied on every side of every element.
    pub padding: f32,
    /// Height of one line of text.
    pub line_height: f32,
    /// Horizontal advance of one character.
    pub char_width: f32,
    /// Intrinsic height of image-like elements.
    pub image_height: f32,
    /// Intrinsic height of text-entry elements.
    pub input_height: f32,
}

impl Default for BlockLayout {
    fn default() -> Self {
        Self {
            padding: 8.0,
            line_height: 20.0,
            char_width: 8.0,
            image_height: 80.0,
            input_height: 40.0,
        }
    }
}

impl BlockLayout {
    /// Lay out every element under `root` on a canvas of the given logical
    /// size. `root` itself is stretched to the full canvas width.
    #[must_use]
    pub fn layout(&self, tree: &DomTree, root: NodeId, width: f32, height: f32) -> LayoutSnapshot {
        let mut snapshot = LayoutSnapshot::new(width, height);
        match tree.get(root).map(|n| &n.node_type) {
            Some(NodeType::Element(_)) => {
                let _ = self.layout_element(tree, root, 0.0, 0.0, width, &mut snapshot);
            }
            Some(NodeType::Document) => {
                let mut cursor_y = 0.0;
                for &child in tree.children(root) {
                    if tree.as_element(child).is_some() {
                        cursor_y +=
                            self.layout_element(tree, child, 0.0, cursor_y, width, &mut snapshot);
                    }
                }
            }
            _ => {}
        }
        snapshot
    }

    /// Lay out one element at `(x, y)` with the given border-box width and
    /// return its border-box height.
    fn layout_element(
        &self,
        tree: &DomTree,
        id: NodeId,
        x: f32,
        y: f32,
        width: f32,
        snapshot: &mut LayoutSnapshot,
    ) -> f32 {
        let Some(element) = tree.as_element(id) else {
            return 0.0;
        };

        // [§ 10.3.3](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
        // Auto width: the border box fills the containing block.
        let content_x = x + self.padding;
        let content_y = y + self.padding;
        let content_width = (width - 2.0 * self.padding).max(0.0);

        let content_height = if element.is_any(IMAGE_TAGS) {
            self.image_height
        } else if element.is_any(TEXT_ENTRY_TAGS) {
            self.input_height
        } else {
            let mut cursor_y = content_y;
            for &child in tree.children(id) {
                match tree.get(child).map(|n| &n.node_type) {
                    Some(NodeType::Element(_)) => {
                        cursor_y += self.layout_element(
                            tree,
                            child,
                            content_x,
                            cursor_y,
                            content_width,
                            snapshot,
                        );
                    }
                    Some(NodeType::Text(text)) => {
                        cursor_y += self.text_height(text, content_width);
                    }
                    _ => {}
                }
            }
            cursor_y - content_y
        };

        let height = content_height + 2.0 * self.padding;
        snapshot.insert(id, Rect::new(x, y, width, height));
        height
    }

    /// Height of a run of text wrapped at `width`. Whitespace-only runs
    /// collapse to nothing.
    #[allow(clippy::cast_precision_loss)]
    fn text_height(&self, text: &str, width: f32) -> f32 {
        let chars = text.split_whitespace().map(|w| w.chars().count() + 1).sum::<usize>();
        if chars == 0 {
            return 0.0;
        }
        let advance = (chars - 1) as f32 * self.char_width;
        let lines = if width > 0.0 {
            (advance / width).ceil().max(1.0)
        } else {
            1.0
        };
        lines * self.line_height
    }
}
