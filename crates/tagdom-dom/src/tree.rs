//! DOM Tree (arena-based allocation)
//!
//! Every node lives in one `Vec`, addressed by `NodeId`. Index 0 is the
//! document node. Nodes created through the tree start detached and stay
//! that way until appended somewhere.

use std::borrow::Cow;

use crate::names;
use crate::{
    ns, Attr, DomError, DomResult, ElementData, InternedString, NamedNodeMap, Node, NodeData,
    NodeId, StringInterner,
};

/// Arena-based DOM tree for memory efficiency
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            interner: StringInterner::new(),
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree, document included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the document node exists
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Resolve an interned string
    #[inline]
    pub fn resolve(&self, id: InternedString) -> &str {
        self.interner.get(id)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    // ------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------

    /// Create an HTML element. The name is lowercased the way an HTML
    /// document lowercases `createElement` names.
    pub fn create_element(&mut self, name: &str) -> DomResult<NodeId> {
        names::validate_name(name)?;
        let local = self.interner.intern(&name.to_ascii_lowercase());
        let html = self.interner.intern(ns::HTML);
        Ok(self.push(Node::element(ElementData::new(Some(html), None, local))))
    }

    /// Create an element in `namespace` (`None` or `""` for no namespace).
    /// The name keeps its case.
    pub fn create_element_ns(
        &mut self,
        namespace: Option<&str>,
        qualified_name: &str,
    ) -> DomResult<NodeId> {
        let (namespace, prefix, local) = names::validate_and_extract(namespace, qualified_name)?;
        let namespace = namespace.map(|uri| self.interner.intern(uri));
        let prefix = prefix.map(|p| self.interner.intern(p));
        let local = self.interner.intern(local);
        Ok(self.push(Node::element(ElementData::new(namespace, prefix, local))))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content.to_string()))
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Append `child` as the last child of `parent`, removing it from its
    /// current parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.check_append(parent, child)?;

        let old_parent = self.nodes[child.index()].parent;
        if old_parent.is_valid() {
            tracing::trace!("Re-parenting {} from {} to {}", child, old_parent, parent);
            self.detach(child)?;
        }

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;

        Ok(child)
    }

    fn check_append(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        let parent_node = self.node(parent)?;
        let child_node = self.node(child)?;

        if parent_node.is_text() {
            return Err(DomError::HierarchyRequest("text nodes cannot have children"));
        }
        if matches!(child_node.data, NodeData::Document) {
            return Err(DomError::HierarchyRequest("the document cannot be appended"));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest("a node cannot contain itself"));
        }
        if matches!(parent_node.data, NodeData::Document) {
            if child_node.is_text() {
                return Err(DomError::HierarchyRequest("text cannot be a child of the document"));
            }
            if self.children(parent).any(|(id, n)| n.is_element() && id != child) {
                return Err(DomError::HierarchyRequest("the document already has an element"));
            }
        }
        Ok(())
    }

    /// True when `ancestor` is `node` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while let Some(n) = self.get(current) {
            if current == ancestor {
                return true;
            }
            current = n.parent;
        }
        false
    }

    /// Remove a node from its parent. Detached nodes are left alone.
    pub fn detach(&mut self, id: NodeId) -> DomResult<()> {
        let (parent, prev, next) = {
            let node = self.node(id)?;
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return Ok(());
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
        Ok(())
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Iterate over the children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Number of children of a node
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.nodes
            .get_mut(id.index())
            .ok_or(DomError::NotFound(id))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    /// Element data of a node, if it is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    /// `setAttribute`: plain attribute, name lowercased on HTML elements
    pub fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) -> DomResult<()> {
        names::validate_name(name)?;
        let html = self.interner.lookup(ns::HTML);
        let elem = self.element_mut(element)?;

        let name = if elem.namespace.is_some() && elem.namespace == html {
            Cow::Owned(name.to_ascii_lowercase())
        } else {
            Cow::Borrowed(name)
        };
        elem.attrs.set_attribute(&name, value);
        Ok(())
    }

    /// `setAttributeNS`: attribute identified by namespace and local name
    pub fn set_attribute_ns(
        &mut self,
        element: NodeId,
        namespace: Option<&str>,
        qualified_name: &str,
        value: &str,
    ) -> DomResult<()> {
        let (namespace, prefix, local) = names::validate_and_extract(namespace, qualified_name)?;
        let elem = self.element_mut(element)?;
        elem.attrs
            .set_named_item_ns(Attr::with_namespace(namespace, prefix, local, value));
        Ok(())
    }

    /// Attribute value by qualified name
    pub fn get_attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        self.element(element)?.attrs.get_attribute(name)
    }

    /// Attribute value by namespace and local name
    pub fn get_attribute_ns(
        &self,
        element: NodeId,
        namespace: Option<&str>,
        local_name: &str,
    ) -> Option<&str> {
        self.element(element)?.attrs.get_attribute_ns(namespace, local_name)
    }

    /// All attributes of an element
    pub fn attributes(&self, element: NodeId) -> Option<&NamedNodeMap> {
        self.element(element).map(|e| &e.attrs)
    }

    /// Local name of an element
    pub fn local_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| self.resolve(e.local))
    }

    /// Namespace URI of an element
    pub fn namespace_uri(&self, id: NodeId) -> Option<&str> {
        self.element(id)?.namespace.map(|uri| self.resolve(uri))
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}
