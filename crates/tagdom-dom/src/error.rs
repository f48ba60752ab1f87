//! DOM errors
//!
//! The failures a host DOM raises from node creation, append and attribute
//! assignment. Nothing catches or translates these; callers propagate them.

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Tag or attribute name is not a valid XML name
    #[error("Invalid character in name: {0:?}")]
    InvalidCharacter(String),

    /// Prefix and namespace do not agree
    #[error("Namespace error: {0}")]
    Namespace(String),

    /// Append would produce an impossible tree shape
    #[error("Hierarchy request error: {0}")]
    HierarchyRequest(&'static str),

    /// Operation needs an element but got another node type
    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    /// Node id does not belong to this tree
    #[error("Node {0} not found")]
    NotFound(NodeId),

    /// The tree is borrowed elsewhere, e.g. by the caller's own closure
    #[error("DOM tree is already in use")]
    TreeInUse,
}
