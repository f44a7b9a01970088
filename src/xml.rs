//! Namespace-qualified helpers for navigating FNUX DOM trees.
//!
//! Every lookup matches `(namespace URI, local name)` exactly. Elements
//! without a namespace, or under a foreign namespace, never match: FNUX
//! exports occasionally embed third-party vocabularies that must be
//! skipped rather than misread.

use roxmltree::Node;

/// Check whether a node is an element with the given qualified name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use fnux_extractor::xml::has_qname;
///
/// let xml = r#"<root xmlns="urn:a"><child/></root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let child = doc.root_element().first_element_child().unwrap();
/// assert!(has_qname(child, "urn:a", "child"));
/// assert!(!has_qname(child, "urn:b", "child"));
/// ```
pub fn has_qname(node: Node<'_, '_>, ns: &str, local: &str) -> bool {
    node.is_element()
        && node.tag_name().namespace() == Some(ns)
        && node.tag_name().name() == local
}

/// Find the first descendant element with the given qualified name.
///
/// Document-order search under (and including) `node`, equivalent to an
/// `.//ns:local` first match.
pub fn find_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    ns: &str,
    local: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants().find(|n| has_qname(*n, ns, local))
}

/// Find all descendant elements with the given qualified name, in
/// document order.
pub fn find_descendants<'a, 'input>(
    node: Node<'a, 'input>,
    ns: &'a str,
    local: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants().filter(move |n| has_qname(*n, ns, local))
}

/// Find all direct children with the given qualified name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use fnux_extractor::xml::find_children;
///
/// let xml = r#"<root xmlns="urn:a"><item>1</item><other/><item>2</item></root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let items: Vec<_> = find_children(doc.root_element(), "urn:a", "item").collect();
/// assert_eq!(items.len(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    ns: &'a str,
    local: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| has_qname(*child, ns, local))
}

/// Get all element children of a node in document order.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Get the text content of a node, trimmed.
///
/// Returns an empty string for elements without a text value.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
