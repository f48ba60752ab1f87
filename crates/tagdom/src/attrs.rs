//! Attribute mappings
//!
//! An [`Attrs`] is the attribute-bearing argument of a tag call. Keys are
//! unique; inserting an existing key replaces its value in place, so
//! iteration follows first-insertion order.

use std::fmt;

/// Text appended for a mapping with no keys and no display form of its own
pub const OPAQUE_OBJECT: &str = "[object Object]";

/// Ordered, unique-key attribute mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: Vec<(String, String)>,
    repr: Option<String>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// A keyless mapping that stands for `value`. Appending it adds
    /// `value`'s display form as text.
    pub fn opaque(value: impl fmt::Display) -> Self {
        Self {
            entries: Vec::new(),
            repr: Some(value.to_string()),
        }
    }

    /// Chainable [`insert`](Self::insert)
    pub fn set(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a key. Returns the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) -> Option<String> {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key/value pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The display form used when this mapping has no keys
    pub fn repr(&self) -> &str {
        self.repr.as_deref().unwrap_or(OPAQUE_OBJECT)
    }
}

impl fmt::Display for Attrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.repr())
    }
}

impl<K: Into<String>, V: fmt::Display> Extend<(K, V)> for Attrs {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        attrs.extend(iter);
        attrs
    }
}

/// Build an [`Attrs`] from `key => value` pairs.
///
/// ```
/// let a = tagdom::attrs! { "id" => "main", "_" => "box", "width" => 10 };
/// assert_eq!(a.get("width"), Some("10"));
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attrs::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::Attrs::new();
        $( attrs.insert($key, $value); )+
        attrs
    }};
}
