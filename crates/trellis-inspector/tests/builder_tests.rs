//! Tests for building layer trees from content trees.

use trellis_dom::samples::{SAMPLE_FILES, sample_document};
use trellis_dom::{DomTree, NodeId, NodeType};
use trellis_inspector::{InspectorError, LayerNode, LayerType, build_tree};

/// Helper: append an element with an optional class and return its NodeId.
fn element(tree: &mut DomTree, parent: NodeId, tag: &str, class: Option<&str>) -> NodeId {
    let id = tree.create_element(tag, class);
    tree.append_child(parent, id);
    id
}

/// Helper: append a text node.
fn text(tree: &mut DomTree, parent: NodeId, data: &str) {
    let id = tree.create_text(data);
    tree.append_child(parent, id);
}

/// Helper: shape of a layer tree without ids.
fn shape(layer: &LayerNode) -> String {
    let children: Vec<String> = layer.children.iter().map(shape).collect();
    format!(
        "{}|{:?}|{:?}|{}|{}[{}]",
        layer.tag,
        layer.class_name,
        layer.text_content,
        layer.layer_type,
        layer.level,
        children.join(",")
    )
}

// ========== classification scenarios ==========

#[test]
fn test_button_with_text_is_button() {
    let mut dom = DomTree::new();
    let root = element(&mut dom, NodeId::ROOT, "div", None);
    let button = element(&mut dom, root, "button", None);
    text(&mut dom, button, "Get Started");

    let tree = build_tree(&dom, root).unwrap();

    assert_eq!(tree.children.len(), 1);
    let layer = &tree.children[0];
    assert_eq!(layer.layer_type, LayerType::Button);
    assert_eq!(layer.text_content.as_deref(), Some("Get Started"));
}

#[test]
fn test_two_element_children_is_container() {
    let mut dom = DomTree::new();
    let root = element(&mut dom, NodeId::ROOT, "div", None);
    let a = element(&mut dom, root, "span", None);
    text(&mut dom, a, "one");
    let b = element(&mut dom, root, "span", None);
    text(&mut dom, b, "two");

    let tree = build_tree(&dom, root).unwrap();

    assert_eq!(tree.text_content, None);
    assert_eq!(tree.layer_type, LayerType::Container);
    assert_eq!(tree.children[0].layer_type, LayerType::Text);
}

#[test]
fn test_text_is_trimmed() {
    let mut dom = DomTree::new();
    let root = element(&mut dom, NodeId::ROOT, "h1", None);
    text(&mut dom, root, "\n    LET'S LEARN  \n");

    let tree = build_tree(&dom, root).unwrap();
    assert_eq!(tree.text_content.as_deref(), Some("LET'S LEARN"));
    assert_eq!(tree.layer_type, LayerType::Text);
}

#[test]
fn test_tag_is_lowercased_and_class_kept_verbatim() {
    let mut dom = DomTree::new();
    let root = element(&mut dom, NodeId::ROOT, "SECTION", Some("hero  dark"));

    let tree = build_tree(&dom, root).unwrap();
    assert_eq!(tree.tag, "section");
    assert_eq!(tree.class_name.as_deref(), Some("hero  dark"));
    assert_eq!(tree.primary_class(), Some("hero"));
}

#[test]
fn test_element_without_class_has_no_class_name() {
    let mut dom = DomTree::new();
    let root = element(&mut dom, NodeId::ROOT, "div", None);

    let tree = build_tree(&dom, root).unwrap();
    assert_eq!(tree.class_name, None);
    assert_eq!(tree.primary_class(), None);
}

// ========== structure ==========

#[test]
fn test_levels_and_order() {
    let mut dom = DomTree::new();
    let root = element(&mut dom, NodeId::ROOT, "div", None);
    let header = element(&mut dom, root, "header", None);
    let _nav = element(&mut dom, header, "nav", None);
    text(&mut dom, root, "stray text");
    let _main = element(&mut dom, root, "main", None);

    let tree = build_tree(&dom, root).unwrap();

    let tags: Vec<(&str, usize)> = tree.iter().map(|l| (l.tag.as_str(), l.level)).collect();
    assert_eq!(tags, vec![("div", 0), ("header", 1), ("nav", 2), ("main", 1)]);
}

#[test]
fn test_layers_point_back_at_their_elements() {
    let mut dom = DomTree::new();
    let root = element(&mut dom, NodeId::ROOT, "div", None);
    let img = element(&mut dom, root, "img", None);

    let tree = build_tree(&dom, root).unwrap();
    assert_eq!(tree.element, root);
    assert_eq!(tree.children[0].element, img);
    assert_eq!(tree.children[0].layer_type, LayerType::Image);
}

#[test]
fn test_all_layers_start_expanded() {
    let (dom, root) = sample_document("navbar.swift").unwrap();
    let tree = build_tree(&dom, root).unwrap();
    assert!(tree.iter().all(|layer| layer.expanded));
}

#[test]
fn test_build_does_not_touch_content() {
    let (dom, root) = sample_document("modal.swift").unwrap();
    let before: Vec<NodeId> = dom.iter_all().collect();

    let _tree = build_tree(&dom, root).unwrap();

    let after: Vec<NodeId> = dom.iter_all().collect();
    assert_eq!(before, after);
}

// ========== rebuilds ==========

#[test]
fn test_rebuild_has_same_shape_and_new_ids() {
    let (dom, root) = sample_document("modal.swift").unwrap();

    let first = build_tree(&dom, root).unwrap();
    let second = build_tree(&dom, root).unwrap();

    assert_eq!(shape(&first), shape(&second));
    for (a, b) in first.iter().zip(second.iter()) {
        assert_ne!(a.id, b.id);
        assert!(second.find(a.id).is_none());
    }
}

// ========== samples ==========

#[test]
fn test_modal_sample() {
    let (dom, root) = sample_document("modal.swift").unwrap();
    let tree = build_tree(&dom, root).unwrap();

    let dialog = tree.at_path(&[0, 0]).unwrap();
    assert_eq!(dialog.primary_class(), Some("bg-white"));

    let close = tree.at_path(&[0, 0, 2, 0]).unwrap();
    assert_eq!(close.layer_type, LayerType::Button);
    assert_eq!(close.text_content.as_deref(), Some("Close"));
}

#[test]
fn test_input_sample() {
    let (dom, root) = sample_document("inputField.swift").unwrap();
    let tree = build_tree(&dom, root).unwrap();

    let input = tree.at_path(&[0, 0, 0]).unwrap();
    assert_eq!(input.layer_type, LayerType::Input);
}

#[test]
fn test_every_sample_builds() {
    for file in SAMPLE_FILES {
        let (dom, root) = sample_document(file).unwrap();
        let tree = build_tree(&dom, root).unwrap();
        assert_eq!(tree.level, 0, "{file}");
    }
}

// ========== failures ==========

#[test]
fn test_missing_root_fails() {
    let dom = DomTree::new();
    assert_eq!(
        build_tree(&dom, NodeId(12)),
        Err(InspectorError::MissingNode(NodeId(12)))
    );
}

#[test]
fn test_detached_root_fails() {
    let mut dom = DomTree::new();
    let parent = element(&mut dom, NodeId::ROOT, "div", None);
    let child = element(&mut dom, parent, "section", None);
    dom.remove_child(parent, child);

    assert_eq!(build_tree(&dom, child), Err(InspectorError::DetachedRoot(child)));
}

#[test]
fn test_text_root_fails() {
    let mut dom = DomTree::new();
    let id = dom.alloc(NodeType::Text("loose".to_string()));
    dom.append_child(NodeId::ROOT, id);

    assert_eq!(
        build_tree(&dom, id),
        Err(InspectorError::NotRenderable(id, "text"))
    );
}
