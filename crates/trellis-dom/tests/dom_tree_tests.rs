//! Tests for content tree construction, mutation, traversal and scene loading.

use trellis_dom::{DomTree, NodeId, Rect, Scene, SceneError};

/// Helper to create an element node, append it, and return its NodeId.
fn append_element(tree: &mut DomTree, parent: NodeId, tag: &str) -> NodeId {
    let id = tree.create_element(tag, None);
    tree.append_child(parent, id);
    id
}

// ========== remove_child ==========

#[test]
fn test_remove_child_first_of_three() {
    let mut tree = DomTree::new();
    let parent = append_element(&mut tree, NodeId::ROOT, "div");
    let a = append_element(&mut tree, parent, "a");
    let b = append_element(&mut tree, parent, "b");
    let c = append_element(&mut tree, parent, "c");

    tree.remove_child(parent, a);

    assert_eq!(tree.children(parent), &[b, c]);
    assert_eq!(tree.parent(a), None);
    assert_eq!(tree.parent(b), Some(parent));
}

#[test]
fn test_remove_child_middle_of_three() {
    let mut tree = DomTree::new();
    let parent = append_element(&mut tree, NodeId::ROOT, "div");
    let a = append_element(&mut tree, parent, "a");
    let b = append_element(&mut tree, parent, "b");
    let c = append_element(&mut tree, parent, "c");

    tree.remove_child(parent, b);

    assert_eq!(tree.children(parent), &[a, c]);
    assert_eq!(tree.parent(b), None);

    // A removed node can be appended again, at the end.
    tree.append_child(parent, b);
    assert_eq!(tree.children(parent), &[a, c, b]);
    assert_eq!(tree.parent(b), Some(parent));
}

// ========== connectedness ==========

#[test]
fn test_removed_subtree_is_detached() {
    let mut tree = DomTree::new();
    let parent = append_element(&mut tree, NodeId::ROOT, "div");
    let child = append_element(&mut tree, parent, "section");
    let grandchild = append_element(&mut tree, child, "p");

    assert!(tree.is_connected(grandchild));
    tree.remove_child(parent, child);

    assert!(!tree.is_connected(child));
    assert!(!tree.is_connected(grandchild));
    // The removed subtree keeps its own structure.
    assert_eq!(tree.children(child), &[grandchild]);
}

#[test]
fn test_unallocated_node_is_not_connected() {
    let tree = DomTree::new();
    assert!(tree.is_connected(NodeId::ROOT));
    assert!(!tree.is_connected(NodeId(99)));
}

// ========== traversal ==========

#[test]
fn test_subtree_is_tree_order() {
    let mut tree = DomTree::new();
    let root = append_element(&mut tree, NodeId::ROOT, "div");
    let a = append_element(&mut tree, root, "a");
    let a1 = append_element(&mut tree, a, "a1");
    let b = append_element(&mut tree, root, "b");

    let order: Vec<NodeId> = tree.subtree(root).collect();
    assert_eq!(order, vec![root, a, a1, b]);

    let all: Vec<NodeId> = tree.iter_all().collect();
    assert_eq!(all, vec![NodeId::ROOT, root, a, a1, b]);
}

#[test]
fn test_classes_keep_attribute_order() {
    let mut tree = DomTree::new();
    let id = tree.create_element("div", Some("  card  shadow\tp-4 "));
    let element = tree.as_element(id).unwrap();

    assert_eq!(element.classes().collect::<Vec<_>>(), vec!["card", "shadow", "p-4"]);
    assert_eq!(element.class_attr(), Some("  card  shadow\tp-4 "));
}

#[test]
fn test_blank_class_attribute_is_absent() {
    let mut tree = DomTree::new();
    let id = tree.create_element("div", Some("   "));
    let element = tree.as_element(id).unwrap();

    assert_eq!(element.class_attr(), None);
    assert_eq!(element.classes().count(), 0);
}

// ========== scenes ==========

#[test]
fn test_scene_load_builds_tree_and_layout() {
    let scene = Scene::from_json(
        r#"{ "root": { "tag": "div", "class": "card", "children": [
                { "tag": "button", "children": [ { "text": "Get Started" } ] },
                { "comment": "spacer" },
                { "tag": "img", "attrs": { "src": "logo.png" },
                  "rect": { "x": 4, "y": 5, "width": 6, "height": 7 } }
            ] } }"#,
    )
    .unwrap();

    let loaded = scene.load(375.0, 667.0).unwrap();
    assert_eq!(loaded.dom.children(NodeId::ROOT), &[loaded.root]);

    let children = loaded.dom.children(loaded.root).to_vec();
    assert_eq!(children.len(), 3);

    let button = loaded.dom.as_element(children[0]).unwrap();
    assert!(button.is("button"));
    let img = loaded.dom.as_element(children[2]).unwrap();
    assert_eq!(img.attrs.get("src").map(String::as_str), Some("logo.png"));

    // Measured geometry overrides the block layout.
    assert_eq!(loaded.layout.get(children[2]), Some(Rect::new(4.0, 5.0, 6.0, 7.0)));
    // Unmeasured elements still get a rect; the comment does not.
    assert!(loaded.layout.get(children[0]).is_some());
    assert!(loaded.layout.get(children[1]).is_none());
}

#[test]
fn test_scene_root_must_be_element() {
    let scene = Scene::from_json(r#"{ "root": { "text": "orphan" } }"#).unwrap();
    let err = scene.load(100.0, 100.0).unwrap_err();
    assert!(matches!(err, SceneError::RootNotElement("text")));
}

#[test]
fn test_scene_rejects_element_with_text_key() {
    let err = Scene::from_json(
        r#"{ "root": { "tag": "div", "children": [
                { "tag": "p", "class": "lead", "text": "hi",
                  "children": [ { "tag": "span" } ] }
            ] } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, SceneError::Json(_)));
}

#[test]
fn test_scene_rejects_ambiguous_leaf() {
    let err = Scene::from_json(
        r#"{ "root": { "tag": "div", "children": [
                { "text": "x", "comment": "y" }
            ] } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, SceneError::Json(_)));
}

#[test]
fn test_scene_rejects_unknown_element_key() {
    let err = Scene::from_json(r#"{ "root": { "tag": "div", "style": "color: red" } }"#)
        .unwrap_err();
    assert!(matches!(err, SceneError::Json(_)));
}

#[test]
fn test_scene_rejects_malformed_json() {
    let err = Scene::from_json(r#"{ "root": 7 }"#).unwrap_err();
    assert!(matches!(err, SceneError::Json(_)));
}
