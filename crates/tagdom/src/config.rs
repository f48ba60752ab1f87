//! Builder Configuration

use serde::{Deserialize, Serialize};

use crate::NamespaceTable;

/// Builder configuration options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Create elements in this namespace instead of as HTML elements.
    /// A table prefix (`"svg"`) or a URI; `""` creates namespace-less
    /// elements.
    pub namespace: Option<String>,

    /// Prefixes for `prefix:name` attribute keys
    pub namespaces: NamespaceTable,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid builder config: {0}")]
    Json(#[from] serde_json::Error),
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Add or override an attribute prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        self.namespaces.insert(prefix, uri);
        self
    }

    /// Parse from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Namespace URI new elements are created in, `None` for HTML
    pub fn element_namespace(&self) -> Option<&str> {
        self.namespace
            .as_deref()
            .map(|namespace| self.namespaces.resolve(namespace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagdom_dom::ns;

    #[test]
    fn test_default_is_html() {
        let config = BuilderConfig::default();
        assert_eq!(config.element_namespace(), None);
        assert_eq!(config.namespaces, NamespaceTable::new());
    }

    #[test]
    fn test_element_namespace_resolves_prefix() {
        let config = BuilderConfig::new().with_namespace("svg");
        assert_eq!(config.element_namespace(), Some(ns::SVG));

        let config = BuilderConfig::new().with_namespace("urn:x");
        assert_eq!(config.element_namespace(), Some("urn:x"));
    }

    #[test]
    fn test_from_json_merges_namespaces() {
        let config = BuilderConfig::from_json(
            r#"{ "namespace": "svg", "namespaces": { "svg": "urn:override", "ev": "urn:events" } }"#,
        )
        .unwrap();

        assert_eq!(config.element_namespace(), Some("urn:override"));
        assert_eq!(config.namespaces.get("ev"), Some("urn:events"));
        assert_eq!(config.namespaces.get("xlink"), Some(ns::XLINK));
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = BuilderConfig::from_json("{}").unwrap();
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            BuilderConfig::from_json("{ namespace"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = BuilderConfig::new().with_prefix("ev", "urn:events");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(BuilderConfig::from_json(&json).unwrap(), config);
    }
}
