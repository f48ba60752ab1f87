//! tagdom
//!
//! Build DOM elements from a tag name and a list of arguments: text,
//! existing nodes, nested lists, and attribute maps.
//!
//! # Example
//! ```
//! use tagdom::{attrs, Attrs, Html};
//!
//! let h = Html::default();
//! let items = ["a", "b"].map(|s| h.li(s));
//! let page = h.div((
//!     attrs! { "id" => "main", "_" => "box" },
//!     h.h1("Title")?,
//!     h.ul(items.into_iter().collect::<Result<Vec<_>, _>>()?)?,
//!     None::<&str>,
//!     Attrs::opaque(3.5),
//! ))?;
//!
//! assert_eq!(
//!     h.to_html(page),
//!     r#"<div id="main" class="box"><h1>Title</h1><ul><li>a</li><li>b</li></ul>3.5</div>"#
//! );
//! # Ok::<(), tagdom::DomError>(())
//! ```
//!
//! Attribute keys of the form `prefix:name` are set in the namespace the
//! prefix maps to in [`NamespaceTable`]; `_`, `_class` and `klass` set
//! `class`. A mapping with no keys is appended as text.

mod argument;
mod attrs;
mod builder;
mod config;
mod namespace;
pub mod tags;

pub use argument::Argument;
pub use attrs::{Attrs, OPAQUE_OBJECT};
pub use builder::Html;
pub use config::{BuilderConfig, ConfigError};
pub use namespace::NamespaceTable;
pub use tags::{is_registered, TAGS};

pub use tagdom_dom::{ns, DomError, DomResult, DomTree, NodeId};

// Re-export the DOM crate for advanced usage
pub use tagdom_dom as dom;
