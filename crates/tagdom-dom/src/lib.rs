//! tagdom DOM - Document Object Model
//!
//! Arena-based DOM tree with the node creation, append and attribute
//! primitives an element builder needs. Names are validated the way a
//! browser DOM validates them, and failures surface as [`DomError`].

mod attributes;
mod error;
mod interner;
mod names;
mod node;
mod serialize;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use error::{DomError, DomResult};
pub use interner::{InternedString, StringInterner};
pub use names::{is_valid_name, validate_and_extract, validate_name};
pub use node::{ElementData, Node, NodeData};
pub use tree::{Children, DomTree};

use std::fmt;

/// Well-known namespace URIs
pub mod ns {
    pub const HTML: &str = "http://www.w3.org/1999/xhtml";
    pub const SVG: &str = "http://www.w3.org/2000/svg";
    pub const MATHML: &str = "http://www.w3.org/1998/Math/MathML";
    pub const XLINK: &str = "http://www.w3.org/1999/xlink";
    pub const XML: &str = "http://www.w3.org/XML/1998/namespace";
    pub const XMLNS: &str = "http://www.w3.org/2000/xmlns/";
}

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#none")
        }
    }
}
