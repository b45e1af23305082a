//! Scene files: content trees described as JSON.
//!
//! A scene is the serialized form of what the design canvas renders:
//!
//! ```json
//! { "root": { "tag": "div", "class": "card", "children": [
//!     { "tag": "button", "children": [ { "text": "Get Started" } ] }
//! ] } }
//! ```
//!
//! Elements may carry a measured `rect`; elements without one are placed by
//! [`BlockLayout`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::geometry::{LayoutSnapshot, Rect};
use crate::layout::BlockLayout;
use crate::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

/// Errors produced while loading a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene file could not be read.
    #[error("failed to read scene '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The scene text is not valid scene JSON.
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The root of a scene must be an element.
    #[error("scene root must be an element, found {0}")]
    RootNotElement(&'static str),
}

/// One node of a scene description.
///
/// The variant is picked by its keys; a node whose keys match none of the
/// variants exactly (for example an element that also carries `text`) is
/// rejected rather than read as the first variant it overlaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SceneNode {
    /// A text leaf.
    Text {
        /// The character data.
        text: String,
    },
    /// A comment leaf.
    Comment {
        /// The comment data.
        comment: String,
    },
    /// An element with optional class, attributes, geometry and children.
    Element {
        /// Local name.
        tag: String,
        /// Raw class attribute.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
        /// Other attributes.
        #[serde(default, skip_serializing_if = "AttributesMap::is_empty")]
        attrs: AttributesMap,
        /// Measured border box in logical canvas pixels.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rect: Option<Rect>,
        /// Child nodes in document order.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<SceneNode>,
    },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TextRepr {
    text: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CommentRepr {
    comment: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementRepr {
    tag: String,
    #[serde(default)]
    class: Option<String>,
    #[serde(default)]
    attrs: AttributesMap,
    #[serde(default)]
    rect: Option<Rect>,
    #[serde(default)]
    children: Vec<SceneNode>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SceneNodeRepr {
    Text(TextRepr),
    Comment(CommentRepr),
    Element(ElementRepr),
}

impl<'de> Deserialize<'de> for SceneNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match SceneNodeRepr::deserialize(deserializer)? {
            SceneNodeRepr::Text(TextRepr { text }) => Self::Text { text },
            SceneNodeRepr::Comment(CommentRepr { comment }) => Self::Comment { comment },
            SceneNodeRepr::Element(ElementRepr {
                tag,
                class,
                attrs,
                rect,
                children,
            }) => Self::Element {
                tag,
                class,
                attrs,
                rect,
                children,
            },
        })
    }
}

impl SceneNode {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Comment { .. } => "comment",
            Self::Element { .. } => "element",
        }
    }
}

/// A parsed scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// The content root placed on the canvas.
    pub root: SceneNode,
}

/// A scene materialized into a content tree plus its logical geometry.
#[derive(Debug, Clone)]
pub struct LoadedScene {
    /// The content tree; the scene root is the document element.
    pub dom: DomTree,
    /// Handle of the scene root inside `dom`.
    pub root: NodeId,
    /// Logical border boxes for every element.
    pub layout: LayoutSnapshot,
}

impl Scene {
    /// Parse a scene from JSON text.
    ///
    /// # Errors
    /// Returns [`SceneError::Json`] if the text is not a valid scene.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a scene file.
    ///
    /// # Errors
    /// Returns [`SceneError::Io`] if the file cannot be read and
    /// [`SceneError::Json`] if its contents are not a valid scene.
    pub fn from_path(path: &Path) -> Result<Self, SceneError> {
        let text = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Build the content tree and lay it out on a canvas of the given
    /// logical size. Explicit `rect`s win over the block layout.
    ///
    /// # Errors
    /// Returns [`SceneError::RootNotElement`] if the scene root is a text or
    /// comment node.
    pub fn load(&self, width: f32, height: f32) -> Result<LoadedScene, SceneError> {
        if !matches!(self.root, SceneNode::Element { .. }) {
            return Err(SceneError::RootNotElement(self.root.kind()));
        }

        let mut dom = DomTree::new();
        let mut measured = Vec::new();
        let root = materialize(&mut dom, &self.root, &mut measured);
        dom.append_child(NodeId::ROOT, root);

        let mut layout = BlockLayout::default().layout(&dom, root, width, height);
        for (id, rect) in measured {
            layout.insert(id, rect);
        }

        Ok(LoadedScene { dom, root, layout })
    }
}

fn materialize(
    dom: &mut DomTree,
    node: &SceneNode,
    measured: &mut Vec<(NodeId, Rect)>,
) -> NodeId {
    match node {
        SceneNode::Text { text } => dom.alloc(NodeType::Text(text.clone())),
        SceneNode::Comment { comment } => dom.alloc(NodeType::Comment(comment.clone())),
        SceneNode::Element {
            tag,
            class,
            attrs,
            rect,
            children,
        } => {
            let mut data = ElementData::new(tag, class.as_deref());
            data.attrs
                .extend(attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
            let id = dom.alloc(NodeType::Element(data));
            if let Some(rect) = rect {
                measured.push((id, *rect));
            }
            for child in children {
                let child_id = materialize(dom, child, measured);
                dom.append_child(id, child_id);
            }
            id
        }
    }
}
