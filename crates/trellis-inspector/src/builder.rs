//! Layer tree construction.
//!
//! [§ 4.2 Tree order](https://dom.spec.whatwg.org/#concept-tree-order)
//!
//! The builder walks the content tree in tree order ("preorder, depth-first")
//! and emits one layer per element. Text and comment nodes never become
//! layers; a sole text child is summarized into the parent's `text_content`.

use trellis_dom::{DomTree, NodeId, NodeType};

use crate::error::InspectorError;
use crate::layer::{LayerId, LayerNode, LayerType};

/// Build a fresh layer tree rooted at `root`.
///
/// Every call allocates new [`LayerId`]s, so two builds of the same content
/// have the same shape but share no ids. The content tree is not modified.
///
/// # Errors
/// Fails if `root` is not in `dom`, has been detached from its document, or
/// is a text/comment node. Callers keep their previous tree in that case.
pub fn build_tree(dom: &DomTree, root: NodeId) -> Result<LayerNode, InspectorError> {
    let node = dom.get(root).ok_or(InspectorError::MissingNode(root))?;
    match node.node_type {
        NodeType::Document | NodeType::Element(_) => {}
        NodeType::Text(_) => return Err(InspectorError::NotRenderable(root, "text")),
        NodeType::Comment(_) => return Err(InspectorError::NotRenderable(root, "comment")),
    }
    if !dom.is_connected(root) {
        return Err(InspectorError::DetachedRoot(root));
    }

    let tree = build_layer(dom, root, 0);
    log::debug!(
        "built layer tree from {root:?}: {} layers",
        tree.node_count()
    );
    Ok(tree)
}

fn build_layer(dom: &DomTree, id: NodeId, level: usize) -> LayerNode {
    // Ids are handed out before recursing so they increase in tree order.
    let layer_id = LayerId::fresh();

    let (tag, class_name) = dom.as_element(id).map_or_else(
        || ("#document".to_string(), None),
        |element| {
            (
                element.tag_name.to_ascii_lowercase(),
                element.class_attr().map(str::to_string),
            )
        },
    );
    let text_content = sole_text(dom, id);
    let layer_type = LayerType::classify(&tag, text_content.is_some());

    let children = dom
        .children(id)
        .iter()
        .copied()
        .filter(|&child| dom.as_element(child).is_some())
        .map(|child| build_layer(dom, child, level + 1))
        .collect();

    LayerNode {
        id: layer_id,
        tag,
        class_name,
        children,
        expanded: true,
        level,
        text_content,
        layer_type,
        element: id,
    }
}

/// [§ 4.4 textContent](https://dom.spec.whatwg.org/#dom-node-textcontent),
/// restricted to the case of exactly one child node that is a Text node.
/// Whitespace-only text counts as no text.
fn sole_text(dom: &DomTree, id: NodeId) -> Option<String> {
    let [only] = dom.children(id) else {
        return None;
    };
    let trimmed = dom.as_text(*only)?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
