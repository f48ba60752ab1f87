//! String Interner - Deduplicate strings to save memory
//!
//! Tag names and namespace URIs repeat across every element of a tree,
//! so elements store a 4-byte ID instead of an owned string.

use std::collections::HashMap;

/// Interned string ID - just 4 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct InternedString(pub u32);

impl InternedString {
    /// Empty string
    pub const EMPTY: InternedString = InternedString(0);
}

/// String interner for deduplicating strings
#[derive(Debug)]
pub struct StringInterner {
    /// Map from string content to index
    map: HashMap<Box<str>, u32>,
    /// Strings by index
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create a new string interner with common names pre-interned
    pub fn new() -> Self {
        let mut interner = Self {
            map: HashMap::with_capacity(128),
            strings: Vec::with_capacity(128),
        };

        // Empty string lives at index 0
        interner.intern("");

        const COMMON_TAGS: &[&str] = &[
            "html", "head", "body", "div", "span", "p", "a", "img",
            "ul", "ol", "li", "table", "tr", "td", "th", "thead", "tbody",
            "form", "input", "button", "select", "option", "textarea",
            "h1", "h2", "h3", "h4", "h5", "h6",
            "header", "footer", "nav", "section", "article", "aside",
            "script", "style", "link", "meta", "title",
            "br", "hr", "strong", "em", "b", "i", "u", "svg",
        ];

        const COMMON_NAMESPACES: &[&str] = &[
            crate::ns::HTML,
            crate::ns::SVG,
            crate::ns::XLINK,
        ];

        for tag in COMMON_TAGS {
            interner.intern(tag);
        }
        for uri in COMMON_NAMESPACES {
            interner.intern(uri);
        }

        interner
    }

    /// Intern a string, returning its ID.
    /// If the string is already interned, returns the existing ID.
    pub fn intern(&mut self, s: &str) -> InternedString {
        if let Some(&idx) = self.map.get(s) {
            return InternedString(idx);
        }

        let idx = self.strings.len() as u32;
        self.strings.push(s.into());
        self.map.insert(s.into(), idx);
        InternedString(idx)
    }

    /// Look up a string without interning it
    pub fn lookup(&self, s: &str) -> Option<InternedString> {
        self.map.get(s).map(|&idx| InternedString(idx))
    }

    /// Get the string for an interned ID
    #[inline]
    pub fn get(&self, id: InternedString) -> &str {
        self.strings.get(id.0 as usize).map(|s| &**s).unwrap_or("")
    }

    /// Number of interned strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
