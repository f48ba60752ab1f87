//! Edge case tests for tagdom
//!
//! Failures surfaced from the DOM and unusual argument shapes.

use tagdom::{attrs, Attrs, BuilderConfig, DomError, Html};

// ============================================================================
// DOM ERRORS PROPAGATE
// ============================================================================

#[test]
fn test_invalid_tag_names() {
    let h = Html::default();
    for name in ["", "1div", "a b", "<p>"] {
        assert!(
            matches!(h.build(name, ()), Err(DomError::InvalidCharacter(_))),
            "{name:?} should be rejected"
        );
    }
}

#[test]
fn test_invalid_attribute_name() {
    let h = Html::default();
    let result = h.div(attrs! { "bad name" => "x" });
    assert!(matches!(result, Err(DomError::InvalidCharacter(_))));
}

#[test]
fn test_failure_leaves_partial_element() {
    let h = Html::default();
    let child = h.span("kept").unwrap();
    let before = h.with_tree(|tree| tree.len());

    let result = h.div((child, attrs! { "ok" => "1", "no good" => "2" }));
    assert!(result.is_err());

    // the div was created and populated up to the failing attribute
    h.with_tree(|tree| {
        assert_eq!(tree.len(), before + 1);
        let parent = tree.parent(child).unwrap();
        assert_eq!(tree.local_name(parent), Some("div"));
        assert_eq!(tree.get_attribute(parent, "ok"), Some("1"));
    });
}

#[test]
fn test_appending_ancestor_fails() {
    let h = Html::default();
    let inner = h.span(()).unwrap();
    let outer = h.div(inner).unwrap();

    // Appending the outer div into its own descendant
    let result = h.with_tree_mut(|tree| tree.append_child(inner, outer));
    assert!(matches!(result, Err(DomError::HierarchyRequest(_))));
}

#[test]
fn test_appending_document_fails() {
    let h = Html::default();
    let root = h.with_tree(|tree| tree.root());
    assert!(matches!(h.div(root), Err(DomError::HierarchyRequest(_))));
}

#[test]
fn test_xmlns_local_in_foreign_namespace_fails() {
    let h = Html::default();
    let result = h.div(attrs! { "foo:xmlns" => "x" });
    assert!(matches!(result, Err(DomError::Namespace(_))));
}

// ============================================================================
// KEY SPLITTING
// ============================================================================

#[test]
fn test_split_at_last_colon() {
    let h = Html::default();
    let div = h.div(attrs! { "a:b:c" => "v" }).unwrap();
    h.with_tree(|tree| assert_eq!(tree.get_attribute_ns(div, Some("a:b"), "c"), Some("v")));
}

#[test]
fn test_alias_applies_after_prefix() {
    let h = Html::default();
    let g = h.div(attrs! { "svg:_" => "shape" }).unwrap();
    h.with_tree(|tree| {
        assert_eq!(tree.get_attribute_ns(g, Some(tagdom::ns::SVG), "class"), Some("shape"));
    });
}

#[test]
fn test_prefix_mapped_to_empty_uri_is_plain() {
    let h = Html::new(BuilderConfig::new().with_prefix("local", ""));
    let div = h.div(attrs! { "local:role" => "nav" }).unwrap();
    h.with_tree(|tree| assert_eq!(tree.get_attribute_ns(div, None, "role"), Some("nav")));
}

#[test]
fn test_uppercase_keys_on_html_elements() {
    let h = Html::default();
    let div = h.div(attrs! { "dataFoo" => "1" }).unwrap();
    h.with_tree(|tree| assert_eq!(tree.get_attribute(div, "datafoo"), Some("1")));
}

// ============================================================================
// UNUSUAL ARGUMENTS
// ============================================================================

#[test]
fn test_empty_attrs_alongside_attributes() {
    let h = Html::default();
    let div = h.div((attrs! { "id" => "a" }, Attrs::new())).unwrap();
    assert_eq!(h.to_html(div), r#"<div id="a">[object Object]</div>"#);
}

#[test]
fn test_many_children() {
    let h = Html::default();
    let items: Vec<_> = (0..500).map(|i| h.li(i).unwrap()).collect();
    let ul = h.ul(items).unwrap();
    assert_eq!(h.with_tree(|tree| tree.child_count(ul)), 500);
}

#[test]
fn test_deep_nesting() {
    let h = Html::default();
    let mut node = h.span("leaf").unwrap();
    for _ in 0..200 {
        node = h.div(node).unwrap();
    }
    let html = h.to_html(node);
    assert!(html.starts_with("<div><div>"));
    assert!(html.contains("<span>leaf</span>"));
}

#[test]
fn test_same_node_twice_in_one_call() {
    let h = Html::default();
    let a = h.b("a").unwrap();
    let c = h.i("c").unwrap();
    let p = h.p((a, c, a)).unwrap();
    assert_eq!(h.to_html(p), "<p><i>c</i><b>a</b></p>");
}

#[test]
fn test_children_collected_inline_move() {
    let h = Html::default();
    let src = h.div((h.b("a").unwrap(), "t", h.i("b").unwrap())).unwrap();

    let dst = h
        .div(h.with_tree(|tree| tree.children(src).map(|(id, _)| id).collect::<Vec<_>>()))
        .unwrap();

    assert_eq!(h.with_tree(|tree| tree.child_count(src)), 0);
    assert_eq!(h.to_html(dst), "<div><b>a</b>t<i>b</i></div>");
}

#[test]
fn test_building_while_tree_borrowed_is_an_error() {
    let h = Html::default();
    let src = h.div(h.b("a").unwrap()).unwrap();

    let result = h.with_tree(|tree| {
        let kids: Vec<_> = tree.children(src).map(|(id, _)| id).collect();
        h.div(kids)
    });
    assert_eq!(result, Err(DomError::TreeInUse));

    // nothing moved
    assert_eq!(h.to_html(src), "<div><b>a</b></div>");
}
