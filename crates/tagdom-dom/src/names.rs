//! Name validation
//!
//! XML `Name` / `QName` checks applied by element creation and attribute
//! assignment, plus the "validate and extract" step for namespaced names.

use crate::{ns, DomError, DomResult};

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9'
            | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}

/// Check a string against the XML `Name` production
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start_char(first) => chars.all(is_name_char),
        _ => false,
    }
}

/// Validate a tag or attribute name
pub fn validate_name(name: &str) -> DomResult<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(DomError::InvalidCharacter(name.to_string()))
    }
}

/// Validate a qualified name and split it into `(namespace, prefix, local)`.
///
/// An empty namespace is treated as no namespace. The prefix rules for
/// `xml` and `xmlns` follow the DOM's namespace checks.
pub fn validate_and_extract<'a, 'n>(
    namespace: Option<&'n str>,
    qualified_name: &'a str,
) -> DomResult<(Option<&'n str>, Option<&'a str>, &'a str)> {
    let namespace = namespace.filter(|uri| !uri.is_empty());

    validate_name(qualified_name)?;

    let (prefix, local) = match qualified_name.split_once(':') {
        Some((prefix, local)) => {
            if prefix.is_empty() || local.is_empty() || local.contains(':') {
                return Err(DomError::InvalidCharacter(qualified_name.to_string()));
            }
            validate_name(local)?;
            (Some(prefix), local)
        }
        None => (None, qualified_name),
    };

    if prefix.is_some() && namespace.is_none() {
        return Err(DomError::Namespace(format!(
            "prefix {:?} requires a namespace",
            qualified_name
        )));
    }
    if prefix == Some("xml") && namespace != Some(ns::XML) {
        return Err(DomError::Namespace(
            "the xml prefix is bound to the XML namespace".to_string(),
        ));
    }
    let is_xmlns = qualified_name == "xmlns" || prefix == Some("xmlns");
    if is_xmlns != (namespace == Some(ns::XMLNS)) {
        return Err(DomError::Namespace(
            "xmlns names and the XMLNS namespace go together".to_string(),
        ));
    }

    Ok((namespace, prefix, local))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["div", "my-element", "x.y", "_private", "h1", "data-x", "ñ", "svg:rect"] {
            assert!(is_valid_name(name), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "1div", "-x", "a b", "a<b", "a\"b", ".x"] {
            assert!(!is_valid_name(name), "{name:?} should be invalid");
        }
    }

    #[test]
    fn test_extract_plain() {
        let (namespace, prefix, local) = validate_and_extract(Some(ns::XLINK), "href").unwrap();
        assert_eq!(namespace, Some(ns::XLINK));
        assert_eq!(prefix, None);
        assert_eq!(local, "href");
    }

    #[test]
    fn test_extract_prefixed() {
        let (_, prefix, local) = validate_and_extract(Some(ns::XLINK), "xlink:href").unwrap();
        assert_eq!(prefix, Some("xlink"));
        assert_eq!(local, "href");
    }

    #[test]
    fn test_empty_namespace_is_none() {
        let (namespace, _, _) = validate_and_extract(Some(""), "rect").unwrap();
        assert_eq!(namespace, None);
    }

    #[test]
    fn test_prefix_without_namespace() {
        assert!(matches!(
            validate_and_extract(None, "foo:bar"),
            Err(DomError::Namespace(_))
        ));
    }

    #[test]
    fn test_xml_prefix_rules() {
        assert!(validate_and_extract(Some(ns::XML), "xml:lang").is_ok());
        assert!(validate_and_extract(Some("urn:other"), "xml:lang").is_err());
        assert!(validate_and_extract(Some(ns::XMLNS), "xmlns:x").is_ok());
        assert!(validate_and_extract(Some(ns::XMLNS), "href").is_err());
        assert!(validate_and_extract(Some("urn:other"), "xmlns").is_err());
    }

    #[test]
    fn test_malformed_qualified_names() {
        assert!(matches!(
            validate_and_extract(Some(ns::SVG), "a:b:c"),
            Err(DomError::InvalidCharacter(_))
        ));
        assert!(validate_and_extract(Some(ns::SVG), ":a").is_err());
        assert!(validate_and_extract(Some(ns::SVG), "a:").is_err());
    }
}
