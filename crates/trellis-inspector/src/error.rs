//! Error types for the inspector.

use thiserror::Error;
use trellis_dom::NodeId;

use crate::properties::PropertyField;

/// Errors reported by inspector operations.
///
/// None of these are fatal to the host: a failed rebuild leaves the previous
/// layer tree in place, and a rejected property edit leaves the old value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectorError {
    /// The build root is not a node of the content tree.
    #[error("node {0:?} does not exist in the content tree")]
    MissingNode(NodeId),
    /// The build root has been removed from its document.
    #[error("node {0:?} is detached from its document")]
    DetachedRoot(NodeId),
    /// The build root is a text or comment node.
    #[error("node {0:?} is a {1} node, not a document or element")]
    NotRenderable(NodeId, &'static str),
    /// A layer path did not resolve against the current tree.
    #[error("no layer at path '{0}'")]
    UnknownLayerPath(String),
    /// A property name did not match any panel field.
    #[error("unknown property '{0}'")]
    UnknownProperty(String),
    /// A property value was rejected.
    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidProperty {
        /// The field being edited.
        field: PropertyField,
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}
