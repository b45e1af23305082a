//! The layer tree shown in the design view's layers panel.
//!
//! A [`LayerNode`] tree is a snapshot of the element structure of a content
//! tree. It owns no content: each layer holds a [`NodeId`] handle that is only
//! ever used to ask a geometry source where the element is.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};
use trellis_dom::{IMAGE_TAGS, NodeId, TEXT_ENTRY_TAGS};

use crate::error::InspectorError;

/// Source of layer ids. Ids are never reused within a process, so an id
/// from a previous build can never alias a layer of the current one.
static NEXT_LAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier of one layer within one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LayerId(pub(crate) u64);

impl LayerId {
    pub(crate) fn fresh() -> Self {
        Self(NEXT_LAYER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}

/// What kind of visual element a layer is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LayerType {
    /// Anything that is not one of the other kinds.
    Container,
    /// An element whose only child is text.
    Text,
    /// An image-producing element.
    Image,
    /// A text-entry element.
    Input,
    /// A button.
    Button,
}

impl LayerType {
    /// Classify a layer. The first matching rule wins: image, input and
    /// button tags first, then "has text", then container.
    #[must_use]
    pub fn classify(tag: &str, has_text: bool) -> Self {
        let is = |tags: &[&str]| tags.iter().any(|t| tag.eq_ignore_ascii_case(t));
        if is(IMAGE_TAGS) {
            Self::Image
        } else if is(TEXT_ENTRY_TAGS) {
            Self::Input
        } else if tag.eq_ignore_ascii_case("button") {
            Self::Button
        } else if has_text {
            Self::Text
        } else {
            Self::Container
        }
    }
}

/// One row of the layers panel, and the subtree beneath it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerNode {
    /// Identifier, unique within the build that produced it.
    pub id: LayerId,
    /// Lowercase tag name (`#document` for a document root).
    pub tag: String,
    /// The element's class attribute as written, if it has any classes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Element children, in document order.
    pub children: Vec<LayerNode>,
    /// Whether the panel shows this layer's children.
    pub expanded: bool,
    /// Depth from the root layer (root = 0).
    pub level: usize,
    /// Trimmed text of a sole text child.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    /// Element classification.
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    /// Handle of the element in the content tree.
    pub element: NodeId,
}

impl LayerNode {
    /// The first class name, used for display.
    #[must_use]
    pub fn primary_class(&self) -> Option<&str> {
        self.class_name
            .as_deref()
            .and_then(|c| c.split_whitespace().next())
    }

    /// Whether this layer has child layers.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Walk this layer and its descendants in pre-order.
    #[must_use]
    pub fn iter(&self) -> LayerIter<'_> {
        LayerIter { stack: vec![self] }
    }

    /// Number of layers in this subtree, including this one.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Pre-order, find-first lookup by id.
    #[must_use]
    pub fn find(&self, id: LayerId) -> Option<&Self> {
        self.iter().find(|layer| layer.id == id)
    }

    /// Mutable lookup by id.
    pub fn find_mut(&mut self, id: LayerId) -> Option<&mut Self> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Follow a path of child indices from this layer.
    #[must_use]
    pub fn at_path(&self, path: &[usize]) -> Option<&Self> {
        path.iter()
            .try_fold(self, |layer, &index| layer.children.get(index))
    }
}

/// Pre-order iterator over a layer subtree.
pub struct LayerIter<'a> {
    stack: Vec<&'a LayerNode>,
}

impl<'a> Iterator for LayerIter<'a> {
    type Item = &'a LayerNode;

    fn next(&mut self) -> Option<Self::Item> {
        let layer = self.stack.pop()?;
        self.stack.extend(layer.children.iter().rev());
        Some(layer)
    }
}

/// Parse a dot-separated layer path such as `0.2.1`. The empty string is
/// the root.
///
/// # Errors
/// Returns [`InspectorError::UnknownLayerPath`] if a segment is not an index.
pub fn parse_layer_path(path: &str) -> Result<Vec<usize>, InspectorError> {
    let path = path.trim();
    if path.is_empty() {
        return Ok(Vec::new());
    }
    path.split('.')
        .map(|segment| {
            segment
                .trim()
                .parse()
                .map_err(|_| InspectorError::UnknownLayerPath(path.to_string()))
        })
        .collect()
}
