//! Element Builder
//!
//! [`Html::build`] creates one element and appends each argument to it.
//! The per-tag constructors in [`crate::tags`] all land here.

use std::cell::RefCell;

use tagdom_dom::{DomError, DomResult, DomTree, NodeId};

use crate::{Argument, Attrs, BuilderConfig};

/// Attribute keys that stand in for `class`
const CLASS_ALIASES: &[&str] = &["_", "_class", "klass"];

/// Element builder over an owned [`DomTree`].
///
/// The tree sits in a `RefCell` and is only borrowed while a single call
/// runs, so constructors nest freely:
///
/// ```
/// use tagdom::{attrs, Html};
///
/// let h = Html::default();
/// let list = h.ul((attrs! { "_" => "menu" }, h.li("one")?, h.li("two")?))?;
/// assert_eq!(
///     h.to_html(list),
///     r#"<ul class="menu"><li>one</li><li>two</li></ul>"#
/// );
/// # Ok::<(), tagdom::DomError>(())
/// ```
#[derive(Debug)]
pub struct Html {
    tree: RefCell<DomTree>,
    config: BuilderConfig,
}

impl Html {
    /// Builder over a fresh tree
    pub fn new(config: BuilderConfig) -> Self {
        Self::from_tree(DomTree::new(), config)
    }

    /// Builder over an existing tree
    pub fn from_tree(tree: DomTree, config: BuilderConfig) -> Self {
        Self {
            tree: RefCell::new(tree),
            config,
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Run `f` against the tree. The borrow ends when `f` returns, so the
    /// result can feed straight into another constructor:
    ///
    /// ```
    /// # let h = tagdom::Html::default();
    /// let src = h.div((h.b("a")?, h.i("b")?))?;
    /// let kids: Vec<_> = h.with_tree(|tree| tree.children(src).map(|(id, _)| id).collect());
    /// let dst = h.section(kids)?;
    /// assert_eq!(h.to_html(dst), "<section><b>a</b><i>b</i></section>");
    /// # Ok::<(), tagdom::DomError>(())
    /// ```
    pub fn with_tree<R>(&self, f: impl FnOnce(&DomTree) -> R) -> R {
        f(&self.tree.borrow())
    }

    /// Run `f` against the tree mutably, e.g. to attach a built element
    pub fn with_tree_mut<R>(&self, f: impl FnOnce(&mut DomTree) -> R) -> R {
        f(&mut self.tree.borrow_mut())
    }

    pub fn into_tree(self) -> DomTree {
        self.tree.into_inner()
    }

    /// Serialize a built element
    pub fn to_html(&self, id: NodeId) -> String {
        self.with_tree(|tree| tree.outer_html(id))
    }

    /// Create a `tag_name` element and append `args` to it, in order.
    ///
    /// The element is left detached. DOM errors abort the call and leave
    /// the element as populated so far. Building from inside a
    /// [`with_tree`](Self::with_tree) closure fails with
    /// [`DomError::TreeInUse`].
    pub fn build(&self, tag_name: &str, args: impl Into<Argument>) -> DomResult<NodeId> {
        let args = args.into();
        let mut tree = self
            .tree
            .try_borrow_mut()
            .map_err(|_| DomError::TreeInUse)?;

        let node = match self.config.element_namespace() {
            Some(namespace) => tree.create_element_ns(Some(namespace), tag_name)?,
            None => tree.create_element(tag_name)?,
        };
        tracing::debug!("Building <{}> as {}", tag_name, node);

        self.append(&mut tree, node, args)?;

        tracing::debug!("Built <{}>: {} children", tag_name, tree.child_count(node));
        Ok(node)
    }

    /// Append one argument to `node`
    fn append(&self, tree: &mut DomTree, node: NodeId, value: Argument) -> DomResult<()> {
        match value {
            Argument::Empty => {}
            Argument::Text(text) => {
                tracing::trace!("Appending text {:?} to {}", text, node);
                let text = tree.create_text(&text);
                tree.append_child(node, text)?;
            }
            Argument::List(items) => {
                tracing::trace!("Appending list of {} to {}", items.len(), node);
                for item in items {
                    self.append(tree, node, item)?;
                }
            }
            Argument::Node(child) => {
                tracing::trace!("Appending node {} to {}", child, node);
                tree.append_child(node, child)?;
            }
            Argument::Attrs(attrs) => self.set_attributes(tree, node, &attrs)?,
        }
        Ok(())
    }

    fn set_attributes(&self, tree: &mut DomTree, node: NodeId, attrs: &Attrs) -> DomResult<()> {
        // Keyless mappings are not attribute bags; they read as text.
        if attrs.is_empty() {
            let text = tree.create_text(attrs.repr());
            tree.append_child(node, text)?;
            return Ok(());
        }

        for (key, value) in attrs.iter() {
            let (prefix, local) = split_key(key);
            let local = unalias(local);
            let namespace = prefix
                .map(|prefix| self.resolve_prefix(prefix))
                .filter(|uri| !uri.is_empty());

            tracing::trace!("Setting {:?} on {} (namespace {:?})", local, node, namespace);
            match namespace {
                Some(uri) => tree.set_attribute_ns(node, Some(uri), local, value)?,
                None => tree.set_attribute(node, local, value)?,
            }
        }
        Ok(())
    }

    fn resolve_prefix<'a>(&'a self, prefix: &'a str) -> &'a str {
        let table = &self.config.namespaces;
        if table.get(prefix).is_none() && !prefix.is_empty() {
            tracing::debug!("Namespace prefix {:?} is not in the table, using it as the URI", prefix);
        }
        table.resolve(prefix)
    }
}

impl Default for Html {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

/// Split an attribute key at its last `:` into prefix and local name
fn split_key(key: &str) -> (Option<&str>, &str) {
    match key.rfind(':') {
        Some(idx) => (Some(&key[..idx]), &key[idx + 1..]),
        None => (None, key),
    }
}

fn unalias(local: &str) -> &str {
    if CLASS_ALIASES.contains(&local) {
        "class"
    } else {
        local
    }
}
