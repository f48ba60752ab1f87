//! Namespace prefix table
//!
//! Maps the prefix of a `prefix:name` attribute key to a namespace URI.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tagdom_dom::ns;

/// Prefix to namespace URI mapping.
///
/// Starts with `svg`, `html` and `xlink`. Deserializing merges the given
/// entries over those defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, String>", into = "BTreeMap<String, String>")]
pub struct NamespaceTable {
    entries: HashMap<String, String>,
}

impl NamespaceTable {
    /// Table with the default prefixes
    pub fn new() -> Self {
        let entries = [("svg", ns::SVG), ("html", ns::HTML), ("xlink", ns::XLINK)]
            .into_iter()
            .map(|(prefix, uri)| (prefix.to_string(), uri.to_string()))
            .collect();
        Self { entries }
    }

    /// Table with no prefixes at all
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or override a prefix. Returns the previous URI.
    pub fn insert(&mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Option<String> {
        self.entries.insert(prefix.into(), uri.into())
    }

    /// URI bound to `prefix`
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(String::as_str)
    }

    /// URI bound to `prefix`, or `prefix` itself when unbound
    pub fn resolve<'a>(&'a self, prefix: &'a str) -> &'a str {
        self.get(prefix).unwrap_or(prefix)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for NamespaceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for NamespaceTable {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (prefix, uri) in iter {
            self.insert(prefix, uri);
        }
    }
}

impl From<HashMap<String, String>> for NamespaceTable {
    fn from(overrides: HashMap<String, String>) -> Self {
        let mut table = Self::new();
        table.extend(overrides);
        table
    }
}

impl From<NamespaceTable> for BTreeMap<String, String> {
    fn from(table: NamespaceTable) -> Self {
        table.entries.into_iter().collect()
    }
}
