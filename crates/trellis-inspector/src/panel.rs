//! The layers panel.
//!
//! The panel is a flat list of rows produced from the layer tree. A collapsed
//! layer still gets a row but its subtree is skipped; the subtree keeps its
//! own `expanded` flags, so expanding again restores what was open before.

use serde::Serialize;

use crate::config::InspectorConfig;
use crate::layer::{LayerId, LayerNode, LayerType};

/// One visible row of the layers panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerRow {
    /// The layer this row shows. Clicking the row selects it.
    pub id: LayerId,
    /// Nesting depth.
    pub level: usize,
    /// Left indentation in pixels.
    pub indent_px: f32,
    /// Display name: tag, primary class and text preview.
    pub label: String,
    /// Element classification, for the row icon.
    pub layer_type: LayerType,
    /// Whether a disclosure triangle is shown.
    pub has_children: bool,
    /// Whether the disclosure triangle is open.
    pub expanded: bool,
    /// Whether this row is the current selection.
    pub selected: bool,
}

/// Compose a layer's display name: `tag`, then `.class` for the first class,
/// then the text preview in quotes, truncated to `preview_chars` characters
/// with a trailing `...`.
#[must_use]
pub fn display_name(layer: &LayerNode, preview_chars: usize) -> String {
    let mut name = layer.tag.clone();
    if let Some(class) = layer.primary_class() {
        name.push('.');
        name.push_str(class);
    }
    if let Some(text) = &layer.text_content {
        name.push_str(" \"");
        name.push_str(&truncate(text, preview_chars));
        name.push('"');
    }
    name
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Flatten the visible part of `tree` into rows, in panel order.
#[must_use]
pub fn visible_rows(
    tree: &LayerNode,
    selected: Option<LayerId>,
    config: &InspectorConfig,
) -> Vec<LayerRow> {
    let mut rows = Vec::new();
    push_rows(tree, selected, config, &mut rows);
    rows
}

fn push_rows(
    layer: &LayerNode,
    selected: Option<LayerId>,
    config: &InspectorConfig,
    rows: &mut Vec<LayerRow>,
) {
    #[allow(clippy::cast_precision_loss)]
    let indent_px = layer.level as f32 * config.indent_px;

    rows.push(LayerRow {
        id: layer.id,
        level: layer.level,
        indent_px,
        label: display_name(layer, config.preview_chars),
        layer_type: layer.layer_type,
        has_children: layer.has_children(),
        expanded: layer.expanded,
        selected: selected == Some(layer.id),
    });

    if layer.expanded {
        for child in &layer.children {
            push_rows(child, selected, config, rows);
        }
    }
}

/// Flip one layer's `expanded` flag. No other layer is touched.
///
/// Returns `false` if `id` is not in `tree`.
pub fn toggle_expanded(tree: &mut LayerNode, id: LayerId) -> bool {
    let Some(layer) = tree.find_mut(id) else {
        return false;
    };
    layer.expanded = !layer.expanded;
    true
}

/// Set one layer's `expanded` flag. Returns `false` if `id` is not in `tree`.
pub fn set_expanded(tree: &mut LayerNode, id: LayerId, expanded: bool) -> bool {
    let Some(layer) = tree.find_mut(id) else {
        return false;
    };
    layer.expanded = expanded;
    true
}
