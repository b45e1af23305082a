//! Content tree for the Trellis inspector.
//!
//! This crate provides the arena-based tree that the design canvas renders
//! and the inspector walks. Node relationships follow the
//! [DOM Living Standard](https://dom.spec.whatwg.org/) closely enough that
//! "parent", "children" and "connected" mean what a browser means by them.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues. Anything
//! that needs to point back into the tree (layer nodes, layout snapshots) holds
//! a `NodeId` handle rather than a reference, so the inspector never borrows
//! the content it describes.

pub mod geometry;
pub mod layout;
pub mod samples;
pub mod scene;

pub use geometry::{GeometrySource, LayoutSnapshot, Rect, ScreenProjection};
pub use layout::BlockLayout;
pub use scene::{LoadedScene, Scene, SceneError, SceneNode};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// Elements that paint an image instead of flowing child content.
///
/// [§ 4.8 Embedded content](https://html.spec.whatwg.org/multipage/embedded-content.html)
pub const IMAGE_TAGS: &[&str] = &["img", "picture", "svg", "canvas", "video"];

/// Elements that accept typed text.
///
/// [§ 4.10 Forms](https://html.spec.whatwg.org/multipage/forms.html)
pub const TEXT_ENTRY_TAGS: &[&str] = &["input", "textarea"];

/// A type-safe index into the content tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// `NodeId` is a plain handle: it stays valid for the lifetime of the tree
/// that allocated it and carries no borrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Node is an abstract interface that is used by all nodes in a tree."
#[derive(Debug, Clone)]
pub struct Node {
    /// "Each node has an associated node type"
    pub node_type: NodeType,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// "An object that participates in a tree has a parent, which is either
    /// null or an object."
    pub parent: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-child)
    /// "A node has an associated list of children"
    pub children: Vec<NodeId>,
}

impl Node {
    const fn detached(node_type: NodeType) -> Self {
        Self {
            node_type,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Each node has an associated node type"
#[derive(Debug, Clone)]
pub enum NodeType {
    /// The tree's document node. Always [`NodeId::ROOT`].
    Document,
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    Text(String),
    /// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    Comment(String),
}

/// Element-specific data.
///
/// NOTE: Only the local name and the attribute list are stored. Namespaces
/// and custom element state are irrelevant to the canvas.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// "An element's local name"
    pub tag_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data with the given tag and optional class attribute.
    #[must_use]
    pub fn new(tag_name: &str, class: Option<&str>) -> Self {
        let mut attrs = AttributesMap::new();
        if let Some(class) = class {
            let _ = attrs.insert("class".to_string(), class.to_string());
        }
        Self {
            tag_name: tag_name.to_string(),
            attrs,
        }
    }

    /// Whether the local name matches `tag`, ignoring ASCII case.
    #[must_use]
    pub fn is(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }

    /// Whether the local name is one of `tags`, ignoring ASCII case.
    #[must_use]
    pub fn is_any(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.is(tag))
    }

    /// The raw class attribute, if present and not blank.
    #[must_use]
    pub fn class_attr(&self) -> Option<&str> {
        self.attrs
            .get("class")
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Returns the class names in attribute order.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The class attribute, if specified, must have a value that is a set of
    /// space-separated tokens representing the various classes that the element belongs to."
    #[must_use]
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_attr().into_iter().flat_map(str::split_whitespace)
    }
}

/// Arena-based content tree with O(1) node access and traversal.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
///
/// All nodes live in one vector and refer to each other by index. The
/// Document node is always at index 0 ([`NodeId::ROOT`]).
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree with just the Document node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::detached(NodeType::Document)],
        }
    }

    /// Get the root document node ID.
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Get the number of nodes in the tree, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (should always have at least the Document).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::detached(node_type));
        id
    }

    /// Allocate an element with an optional class attribute.
    pub fn create_element(&mut self, tag: &str, class: Option<&str>) -> NodeId {
        self.alloc(NodeType::Element(ElementData::new(tag, class)))
    }

    /// Allocate a text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.alloc(NodeType::Text(text.to_string()))
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// Appends `child` as the last child of `parent`.
    ///
    /// # Panics
    /// Panics if either id was not allocated by this tree.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// [§ 4.2.3 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
    ///
    /// Detaches `child` from `parent`. The child keeps its own subtree, so a
    /// removed element can still be inspected as a detached root.
    ///
    /// # Panics
    /// Panics if either id was not allocated by this tree.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.retain(|&id| id != child);
        self.nodes[child.0].parent = None;
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Iterate over all ancestors of a node, from parent to root.
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// [§ 4.2.1 Connected](https://dom.spec.whatwg.org/#connected)
    ///
    /// Whether the node's root is the document. A node that was never appended,
    /// or whose ancestor was removed, is detached.
    #[must_use]
    pub fn is_connected(&self, id: NodeId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        id == NodeId::ROOT || self.ancestors(id).any(|ancestor| ancestor == NodeId::ROOT)
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Walk the subtree rooted at `id` in tree order (pre-order, depth-first).
    ///
    /// [§ 4.2 Tree order](https://dom.spec.whatwg.org/#concept-tree-order)
    #[must_use]
    pub fn subtree(&self, id: NodeId) -> SubtreeIterator<'_> {
        let stack = if self.get(id).is_some() { vec![id] } else { Vec::new() };
        SubtreeIterator { tree: self, stack }
    }

    /// Walk every node reachable from the document, in tree order.
    #[must_use]
    pub fn iter_all(&self) -> SubtreeIterator<'_> {
        self.subtree(NodeId::ROOT)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Pre-order iterator over a subtree.
pub struct SubtreeIterator<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl Iterator for SubtreeIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
