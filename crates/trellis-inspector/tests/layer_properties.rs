//! Property tests over randomly shaped content trees.

use std::collections::HashSet;

use quickcheck_macros::quickcheck;
use trellis_dom::{DomTree, NodeId};
use trellis_inspector::{InspectorConfig, LayerNode, build_tree, toggle_expanded, visible_rows};

const TAGS: &[&str] = &["div", "span", "button", "img", "input", "p", "section"];

/// Grow a tree from `shape`: byte `i` picks the parent of element `i + 1`
/// among the elements created so far and the tag of the new element. Odd
/// bytes also give the new element a text child.
fn grow(shape: &[u8]) -> (DomTree, NodeId, usize) {
    let mut dom = DomTree::new();
    let root = dom.create_element("div", Some("root"));
    dom.append_child(NodeId::ROOT, root);
    let mut elements = vec![root];

    for &byte in shape.iter().take(64) {
        let parent = elements[usize::from(byte) % elements.len()];
        let tag = TAGS[usize::from(byte) % TAGS.len()];
        let id = dom.create_element(tag, None);
        dom.append_child(parent, id);
        elements.push(id);
        if byte % 2 == 1 {
            let text = dom.create_text("label");
            dom.append_child(id, text);
        }
    }

    let count = elements.len();
    (dom, root, count)
}

fn levels_are_consistent(layer: &LayerNode) -> bool {
    layer
        .children
        .iter()
        .all(|child| child.level == layer.level + 1 && levels_are_consistent(child))
}

#[quickcheck]
fn prop_one_layer_per_element(shape: Vec<u8>) -> bool {
    let (dom, root, count) = grow(&shape);
    build_tree(&dom, root).is_ok_and(|tree| tree.node_count() == count)
}

#[quickcheck]
fn prop_levels_follow_depth(shape: Vec<u8>) -> bool {
    let (dom, root, _) = grow(&shape);
    build_tree(&dom, root).is_ok_and(|tree| tree.level == 0 && levels_are_consistent(&tree))
}

#[quickcheck]
fn prop_ids_are_unique(shape: Vec<u8>) -> bool {
    let (dom, root, count) = grow(&shape);
    let Ok(tree) = build_tree(&dom, root) else {
        return false;
    };
    let ids: HashSet<_> = tree.iter().map(|layer| layer.id).collect();
    ids.len() == count
}

#[quickcheck]
fn prop_toggle_is_local(shape: Vec<u8>, pick: usize) -> bool {
    let (dom, root, count) = grow(&shape);
    let Ok(mut tree) = build_tree(&dom, root) else {
        return false;
    };
    let Some(target) = tree.iter().nth(pick % count).map(|layer| layer.id) else {
        return false;
    };
    let before: Vec<bool> = tree.iter().map(|layer| layer.expanded).collect();

    if !toggle_expanded(&mut tree, target) {
        return false;
    }

    tree.iter()
        .zip(before)
        .all(|(layer, was)| (layer.id == target) != (layer.expanded == was))
}

#[quickcheck]
fn prop_collapsed_subtrees_are_hidden(shape: Vec<u8>, pick: usize) -> bool {
    let (dom, root, count) = grow(&shape);
    let Ok(mut tree) = build_tree(&dom, root) else {
        return false;
    };
    let Some((target, hidden)) = tree
        .iter()
        .nth(pick % count)
        .map(|layer| (layer.id, layer.node_count() - 1))
    else {
        return false;
    };

    if !toggle_expanded(&mut tree, target) {
        return false;
    }

    visible_rows(&tree, None, &InspectorConfig::default()).len() == count - hidden
}
