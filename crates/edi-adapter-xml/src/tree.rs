//! Path lookups over a `roxmltree` node
//!
//! A path is a `/`-separated list of child element names. Lookups never fail:
//! a missing step yields no match, a missing leaf yields `None`.

use edi_ir::leaf_text;
use roxmltree::Node;

use crate::{Error, Result};

/// Every element matching `path` below `node`, in document order
///
/// `a/b` matches every `b` child of every `a` child.
pub fn find_all<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Vec<Node<'a, 'input>> {
    path.split('/').fold(vec![node], |current, step| {
        current
            .into_iter()
            .flat_map(|n| n.children().filter(move |c| c.is_element() && c.has_tag_name(step)))
            .collect()
    })
}

/// First element matching `path` below `node`
pub fn find<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    find_all(node, path).into_iter().next()
}

/// Text of the first element matching `path`; missing element or empty element is `None`
pub fn text(node: Node<'_, '_>, path: &str) -> Option<String> {
    leaf_text(find(node, path).and_then(|n| n.text()))
}

/// First element matching `path`, or a missing-element error naming the full path
///
/// # Errors
///
/// [`Error::MissingElement`] when nothing matches.
pub fn require<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Result<Node<'a, 'input>> {
    find(node, path).ok_or_else(|| Error::missing_element(&element_path(node), path))
}

/// Slash-joined element names from the document root down to `node`
pub fn element_path(node: Node<'_, '_>) -> String {
    let mut names: Vec<&str> = node
        .ancestors()
        .filter(Node::is_element)
        .map(|n| n.tag_name().name())
        .collect();
    names.reverse();
    names.join("/")
}
