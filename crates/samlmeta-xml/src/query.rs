#![forbid(unsafe_code)]

//! Namespace-aware element lookups.
//!
//! These replace path expressions such as
//! `//md:EntityDescriptor[@entityID="..."]/md:IDPSSODescriptor`: every step
//! is a plain tree walk comparing the namespace URI and local name, and
//! attribute predicates are ordinary string comparisons. A caller-supplied
//! value is never interpreted as query syntax.

/// Check that `node` is an element named `local_name` in namespace `ns`.
///
/// Matching is on the resolved namespace URI, so the prefix the document
/// chose (`md:`, `saml:`, a default namespace, ...) does not matter.
pub fn is_element(node: roxmltree::Node<'_, '_>, ns: &str, local_name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == local_name
        && node.tag_name().namespace().unwrap_or("") == ns
}

/// All descendant elements of the document named `local_name` in `ns`, in
/// document order.
pub fn descendants<'a, 'input: 'a>(
    doc: &'a roxmltree::Document<'input>,
    ns: &'a str,
    local_name: &'a str,
) -> impl Iterator<Item = roxmltree::Node<'a, 'input>> + 'a {
    doc.descendants()
        .filter(move |n| is_element(*n, ns, local_name))
}

/// Direct child elements of `parent` named `local_name` in `ns`, in
/// document order.
pub fn child_elements<'a, 'input: 'a>(
    parent: roxmltree::Node<'a, 'input>,
    ns: &'a str,
    local_name: &'a str,
) -> impl Iterator<Item = roxmltree::Node<'a, 'input>> + 'a {
    parent
        .children()
        .filter(move |n| is_element(*n, ns, local_name))
}

/// First direct child element of `parent` named `local_name` in `ns`.
pub fn find_child_element<'a, 'input: 'a>(
    parent: roxmltree::Node<'a, 'input>,
    ns: &str,
    local_name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    parent.children().find(|n| is_element(*n, ns, local_name))
}

/// Follow a chain of child steps, taking the first match at each level.
///
/// `descend(kd, &[(DSIG, "KeyInfo"), (DSIG, "X509Data")])` returns the first
/// `X509Data` child of the first `KeyInfo` child of `kd`.
pub fn descend<'a, 'input: 'a>(
    start: roxmltree::Node<'a, 'input>,
    path: &[(&str, &str)],
) -> Option<roxmltree::Node<'a, 'input>> {
    path.iter()
        .try_fold(start, |node, (ns, local)| find_child_element(node, ns, local))
}

/// Concatenated text of the direct text children of `node`.
///
/// Child elements and their content are not included. Returns an empty
/// string for an element with no text.
pub fn direct_text(node: roxmltree::Node<'_, '_>) -> String {
    node.children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
