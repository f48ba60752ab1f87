//! HTML serialization
//!
//! `outerHTML` / `innerHTML` style output for subtrees.

use crate::{ns, Attr, DomTree, NodeData, NodeId};

/// Elements without an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img",
    "input", "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text children are written unescaped
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

impl DomTree {
    /// Serialize a node and its subtree. Unknown ids give an empty string.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    /// Serialize the children of a node
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_children(id, &mut out);
        out
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.get(id).map(|n| &n.data) {
            Some(NodeData::Text(text)) => out.push_str(text),
            Some(_) => {
                for (child, _) in self.children(id) {
                    self.collect_text(child, out);
                }
            }
            None => {}
        }
    }

    fn write_children(&self, id: NodeId, out: &mut String) {
        for (child, _) in self.children(id) {
            self.write_node(child, out);
        }
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };

        match &node.data {
            NodeData::Document => self.write_children(id, out),
            NodeData::Text(text) => {
                let raw = self
                    .parent(id)
                    .and_then(|p| self.element(p))
                    .is_some_and(|parent| {
                        parent.namespace == self.interner().lookup(ns::HTML)
                            && RAW_TEXT_ELEMENTS.contains(&self.resolve(parent.local))
                    });
                if raw {
                    out.push_str(text);
                } else {
                    escape_text(text, out);
                }
            }
            NodeData::Element(elem) => {
                let mut name = String::new();
                if let Some(prefix) = elem.prefix {
                    name.push_str(self.resolve(prefix));
                    name.push(':');
                }
                name.push_str(self.resolve(elem.local));

                out.push('<');
                out.push_str(&name);
                for attr in elem.attrs.iter() {
                    out.push(' ');
                    out.push_str(&serialized_attr_name(attr));
                    out.push_str("=\"");
                    escape_attr(&attr.value, out);
                    out.push('"');
                }
                out.push('>');

                let is_html = elem.namespace == self.interner().lookup(ns::HTML);
                if is_html && VOID_ELEMENTS.contains(&name.as_str()) {
                    return;
                }

                self.write_children(id, out);
                out.push_str("</");
                out.push_str(&name);
                out.push('>');
            }
        }
    }
}

fn serialized_attr_name(attr: &Attr) -> String {
    let prefix = match attr.namespace.as_deref() {
        None => None,
        Some(ns::XML) => Some("xml"),
        Some(ns::XLINK) => Some("xlink"),
        Some(ns::XMLNS) if attr.local_name == "xmlns" => None,
        Some(ns::XMLNS) => Some("xmlns"),
        Some(_) => attr.prefix.as_deref(),
    };
    match prefix {
        Some(prefix) => format!("{}:{}", prefix, attr.local_name),
        None => attr.local_name.clone(),
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{A0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{A0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_html_nested() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div").unwrap();
        let span = tree.create_element("span").unwrap();
        let text = tree.create_text("hi");
        tree.append_child(span, text).unwrap();
        tree.append_child(div, span).unwrap();
        tree.set_attribute(div, "class", "box").unwrap();

        assert_eq!(tree.outer_html(div), r#"<div class="box"><span>hi</span></div>"#);
        assert_eq!(tree.inner_html(div), "<span>hi</span>");
        assert_eq!(tree.text_content(div), "hi");
    }

    #[test]
    fn test_void_elements() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p").unwrap();
        let br = tree.create_element("br").unwrap();
        tree.append_child(p, br).unwrap();
        assert_eq!(tree.outer_html(p), "<p><br></p>");
    }

    #[test]
    fn test_escaping() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p").unwrap();
        let text = tree.create_text("a < b & c");
        tree.append_child(p, text).unwrap();
        tree.set_attribute(p, "title", "\"q\" & more").unwrap();

        assert_eq!(
            tree.outer_html(p),
            r#"<p title="&quot;q&quot; &amp; more">a &lt; b &amp; c</p>"#
        );
    }

    #[test]
    fn test_raw_text_in_script() {
        let mut tree = DomTree::new();
        let script = tree.create_element("script").unwrap();
        let text = tree.create_text("if (a < b) {}");
        tree.append_child(script, text).unwrap();
        assert_eq!(tree.outer_html(script), "<script>if (a < b) {}</script>");
    }

    #[test]
    fn test_xlink_attribute_prefix() {
        let mut tree = DomTree::new();
        let el = tree.create_element_ns(Some(ns::SVG), "use").unwrap();
        tree.set_attribute_ns(el, Some(ns::XLINK), "href", "#icon").unwrap();
        assert_eq!(tree.outer_html(el), r##"<use xlink:href="#icon"></use>"##);
    }

    #[test]
    fn test_unknown_id_is_empty() {
        let tree = DomTree::new();
        assert_eq!(tree.outer_html(NodeId(42)), "");
    }
}
