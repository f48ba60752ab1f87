//! Element Attributes
//!
//! Attributes are identified by `(namespace, local name)`. Plain attributes
//! have no namespace and no prefix. Order is insertion order; setting an
//! existing attribute replaces its value in place.

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub namespace: Option<String>,
    pub prefix: Option<String>,
    pub local_name: String,
    pub value: String,
}

impl Attr {
    /// Create an attribute with no namespace
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            namespace: None,
            prefix: None,
            local_name: name.into(),
            value: value.into(),
        }
    }

    /// Create a namespaced attribute
    pub fn with_namespace(
        namespace: Option<&str>,
        prefix: Option<&str>,
        local_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            prefix: prefix.map(str::to_string),
            local_name: local_name.into(),
            value: value.into(),
        }
    }

    /// Qualified name: `prefix:local` or just `local`
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.local_name),
            None => self.local_name.clone(),
        }
    }

    fn matches_qualified(&self, name: &str) -> bool {
        match &self.prefix {
            Some(prefix) => name
                .split_once(':')
                .is_some_and(|(p, l)| p == prefix && l == self.local_name),
            None => self.local_name == name,
        }
    }
}

/// Named node map (attribute collection)
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get attribute by index
    pub fn item(&self, index: usize) -> Option<&Attr> {
        self.attributes.get(index)
    }

    /// First attribute whose qualified name equals `name`
    pub fn get_named_item(&self, name: &str) -> Option<&Attr> {
        self.attributes.iter().find(|a| a.matches_qualified(name))
    }

    /// Attribute by namespace and local name
    pub fn get_named_item_ns(&self, namespace: Option<&str>, local_name: &str) -> Option<&Attr> {
        self.attributes
            .iter()
            .find(|a| a.namespace.as_deref() == namespace && a.local_name == local_name)
    }

    /// Get attribute value by qualified name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.get_named_item(name).map(|a| a.value.as_str())
    }

    /// Get attribute value by namespace and local name
    pub fn get_attribute_ns(&self, namespace: Option<&str>, local_name: &str) -> Option<&str> {
        self.get_named_item_ns(namespace, local_name).map(|a| a.value.as_str())
    }

    /// Set by qualified name. Replaces the first match, otherwise appends
    /// a plain attribute. Returns the previous value.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Option<String> {
        if let Some(attr) = self.attributes.iter_mut().find(|a| a.matches_qualified(name)) {
            return Some(std::mem::replace(&mut attr.value, value.to_string()));
        }
        self.attributes.push(Attr::new(name, value));
        None
    }

    /// Set by `(namespace, local name)`. An existing attribute keeps its
    /// prefix and position. Returns the previous value.
    pub fn set_named_item_ns(&mut self, attr: Attr) -> Option<String> {
        if let Some(existing) = self
            .attributes
            .iter_mut()
            .find(|a| a.namespace == attr.namespace && a.local_name == attr.local_name)
        {
            return Some(std::mem::replace(&mut existing.value, attr.value));
        }
        self.attributes.push(attr);
        None
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_named_item(name).is_some()
    }

    /// Get attribute qualified names in order
    pub fn get_attribute_names(&self) -> Vec<String> {
        self.attributes.iter().map(Attr::qualified_name).collect()
    }

    /// Iterate over attributes
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}
