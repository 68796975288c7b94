//! Shared XML conventions: namespace resolution and null-safe lookups.

use roxmltree::Node;

/// The TDX standard schema namespace, used when a document root carries no
/// namespace of its own.
pub(crate) const TDX_NS: &str = "https://ptx.transportdata.tw/standard/schema/";

/// Namespace bound for all lookups in a document: the root element's own
/// namespace, or [`TDX_NS`] for an unnamespaced root.
pub(crate) fn feed_namespace<'a>(root: Node<'a, 'a>) -> &'a str {
    root.tag_name().namespace().unwrap_or(TDX_NS)
}

/// Direct element children named `name` in namespace `ns`.
pub(crate) fn children<'a>(
    parent: Node<'a, 'a>,
    ns: &'a str,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'a>> + 'a {
    parent.children().filter(move |c| {
        c.is_element() && c.tag_name().name() == name && c.tag_name().namespace() == Some(ns)
    })
}

/// First element child named `name`, if any.
pub(crate) fn child<'a>(parent: Node<'a, 'a>, ns: &str, name: &str) -> Option<Node<'a, 'a>> {
    parent.children().find(|c| {
        c.is_element() && c.tag_name().name() == name && c.tag_name().namespace() == Some(ns)
    })
}

/// Null-safe text lookup along a nested element path. A path that does not
/// resolve, or an element without text, yields `None`.
pub(crate) fn text_at(parent: Node, ns: &str, path: &[&str]) -> Option<String> {
    let mut node = parent;
    for segment in path {
        node = child(node, ns, segment)?;
    }
    node.text().map(str::to_string)
}

/// Lenient integer coercion: absent, empty, or unparseable input is `None`,
/// never an error.
pub(crate) fn as_int(value: Option<&str>) -> Option<i32> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

/// Tri-state boolean: case-insensitive `"true"`/`"false"`, anything else
/// (including absence) is `None`.
pub(crate) fn as_tristate(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn namespace_comes_from_root() {
        let doc = Document::parse(r#"<Root xmlns="urn:example"/>"#).unwrap();
        assert_eq!(feed_namespace(doc.root_element()), "urn:example");

        let doc = Document::parse("<Root/>").unwrap();
        assert_eq!(feed_namespace(doc.root_element()), TDX_NS);
    }

    #[test]
    fn text_at_walks_nested_paths() {
        let doc = Document::parse(
            r#"<Root xmlns="urn:x"><RouteName><Zh_tw>紅30</Zh_tw></RouteName></Root>"#,
        )
        .unwrap();
        let root = doc.root_element();
        assert_eq!(
            text_at(root, "urn:x", &["RouteName", "Zh_tw"]),
            Some("紅30".to_string())
        );
        assert_eq!(text_at(root, "urn:x", &["RouteName", "En"]), None);
        assert_eq!(text_at(root, "urn:x", &["Missing"]), None);
    }

    #[test]
    fn int_coercion_is_lenient() {
        assert_eq!(as_int(Some("3")), Some(3));
        assert_eq!(as_int(Some(" 12 ")), Some(12));
        assert_eq!(as_int(Some("")), None);
        assert_eq!(as_int(Some("abc")), None);
        assert_eq!(as_int(None), None);
    }

    #[test]
    fn tristate_is_case_insensitive() {
        assert_eq!(as_tristate(Some("true")), Some(true));
        assert_eq!(as_tristate(Some("False")), Some(false));
        assert_eq!(as_tristate(Some("yes")), None);
        assert_eq!(as_tristate(None), None);
    }
}
