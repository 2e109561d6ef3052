//! DOM adapter over `dom_query`.
//!
//! Wraps the handful of tree operations the scoring engine needs behind
//! small named functions, so the heuristic code reads in terms of the
//! algorithm (tags, class strings, ancestor walks) rather than selection
//! plumbing.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::patterns::WHITESPACE_NORMALIZE;

// === Parsing ===

/// Parse HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Reads ===

/// Get element id attribute, or empty string.
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> String {
    sel.attr("id").map(|s| s.to_string()).unwrap_or_default()
}

/// Get element class attribute, or empty string.
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> String {
    sel.attr("class").map(|s| s.to_string()).unwrap_or_default()
}

/// Concatenated "class id" string used by the weight tables and the
/// unlikely-candidate tables.
#[must_use]
pub fn class_and_id(sel: &Selection) -> String {
    let classes = class_name(sel);
    let id = id(sel);
    format!("{classes} {id}")
}

/// Check whether the element carries the given class token.
#[must_use]
pub fn has_class(sel: &Selection, name: &str) -> bool {
    class_name(sel)
        .split_whitespace()
        .any(|token| token.eq_ignore_ascii_case(name))
}

// === Tag/Node Information ===

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Node id of the first node in the selection.
#[must_use]
pub fn node_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|n| n.id)
}

/// Check that the selection wraps an element node.
#[must_use]
pub fn is_element(sel: &Selection) -> bool {
    sel.nodes().first().is_some_and(dom_query::NodeRef::is_element)
}

// === Text Content ===

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn normalize_spaces(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Normalized character count of the selection's text.
#[must_use]
pub fn normalized_text_len(sel: &Selection) -> usize {
    normalize_spaces(&text_content(sel)).chars().count()
}

// === Tree Navigation ===

/// Parent element of the selection, if the parent is an element node.
#[must_use]
pub fn parent_element<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    let parent = sel.parent();
    if parent.is_empty() || !is_element(&parent) {
        None
    } else {
        Some(parent)
    }
}

/// Walk the ancestor chain (nearest first), element nodes only.
#[must_use]
pub fn ancestor_elements<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    let mut found = Vec::new();
    let mut current = parent_element(sel);
    while let Some(ancestor) = current {
        current = parent_element(&ancestor);
        found.push(ancestor);
    }
    found
}

/// Nearest ancestor (or the node itself) carrying the given class token.
#[must_use]
pub fn closest_with_class<'a>(sel: &Selection<'a>, name: &str) -> Option<Selection<'a>> {
    if has_class(sel, name) {
        return sel.nodes().first().map(|n| Selection::from(*n));
    }
    ancestor_elements(sel).into_iter().find(|a| has_class(a, name))
}

// === Tree Manipulation ===

/// Remove elements from the tree.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Rename element tag in place, preserving attributes and children.
#[inline]
pub fn rename(sel: &Selection, new_tag: &str) {
    sel.rename(new_tag);
}

// === Serialization Helpers ===

/// Serialize a single node for re-insertion elsewhere in the tree: outer
/// HTML for elements, escaped text for text nodes, empty for the rest.
#[must_use]
pub fn node_html(node: &dom_query::NodeRef) -> String {
    if node.is_element() {
        Selection::from(*node).html().to_string()
    } else if node.is_text() {
        escape_text(&node.text())
    } else {
        String::new()
    }
}

/// Minimal escaping for raw text re-emitted as HTML markup.
#[must_use]
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
