//! Pre-scoring tree normalization.
//!
//! Rewrites the parse tree so the scorer sees a uniform paragraph
//! structure: runs of `<br>` become real paragraphs, leaf `div`s and
//! free-standing `span`s are promoted to `p`, and (optionally) elements
//! matching the unlikely-candidate blacklist are removed outright.
//!
//! Every sub-pass is two-phase: a read-only pass collects the nodes to
//! touch, then a write pass applies the mutations. Normalization is
//! idempotent - running it again on an already-normalized tree changes
//! nothing.

use std::collections::HashSet;

use dom_query::{Document, NodeRef, Selection};
use tracing::trace;

use crate::dom;
use crate::options::OptionSet;
use crate::patterns::{
    BLOCK_LEVEL_TAG_SET, CANDIDATES_BLACKLIST, CANDIDATES_WHITELIST, DIV_TO_P_BLOCK_TAGS,
    SPAN_TO_P_BLOCK_ANCESTORS,
};

/// Normalize the tree in place under the given options.
pub fn normalize(doc: &Document, opts: &OptionSet) {
    if opts.strip_unlikely_candidates {
        strip_unlikely_candidates(doc);
    }
    convert_to_paragraphs(doc);
}

/// Remove elements whose class/id signature matches the blacklist and is
/// not rescued by the whitelist. `html` and `body` are always exempt, and
/// so are anchors - removing a matched `<a>` would amputate sentence text
/// around it.
pub fn strip_unlikely_candidates(doc: &Document) {
    let nodes = doc.select("*").nodes().to_vec();
    for node in nodes.into_iter().rev() {
        let sel = Selection::from(node);
        let Some(tag) = dom::tag_name(&sel) else {
            continue;
        };
        if matches!(tag.as_str(), "html" | "body" | "a") {
            continue;
        }

        let signature = dom::class_and_id(&sel);
        if signature.trim().is_empty() || CANDIDATES_WHITELIST.is_match(&signature) {
            continue;
        }
        if CANDIDATES_BLACKLIST.is_match(&signature) {
            trace!(%tag, %signature, "stripping unlikely candidate");
            dom::remove(&sel);
        }
    }
}

/// Rewrite line-break runs and promote paragraph-shaped containers.
pub fn convert_to_paragraphs(doc: &Document) {
    collapse_break_runs(doc);
    convert_divs(doc);
    convert_spans(doc);
}

/// Replace every run of two or more consecutive `<br>` elements (only
/// whitespace text allowed between them) with a paragraph boundary. The
/// text and inline elements following a run are wrapped into a new `<p>`
/// that ends at the next block-level element; a run directly followed by a
/// block element is simply deleted.
fn collapse_break_runs(doc: &Document) {
    let brs = doc.select("br").nodes().to_vec();
    let mut in_run: HashSet<_> = HashSet::new();

    for node in brs {
        if in_run.contains(&node.id) {
            continue;
        }

        let mut run = vec![node];
        let mut cursor = node.next_sibling();
        while let Some(next) = cursor {
            if is_blank_text(&next) {
                cursor = next.next_sibling();
            } else if is_br(&next) {
                in_run.insert(next.id);
                run.push(next);
                cursor = next.next_sibling();
            } else {
                break;
            }
        }
        if run.len() < 2 {
            continue;
        }

        for br in &run[..run.len() - 1] {
            dom::remove(&Selection::from(*br));
        }
        paragraphize_tail(run[run.len() - 1]);
    }
}

/// Wrap the inline tail after a collapsed break run into a fresh `<p>`.
fn paragraphize_tail(last_br: NodeRef) {
    let mut absorbed = String::new();
    let mut moved = Vec::new();

    let mut cursor = last_br.next_sibling();
    while let Some(node) = cursor {
        if node.is_element() {
            let tag = node
                .node_name()
                .map(|t| t.to_ascii_lowercase())
                .unwrap_or_default();
            if BLOCK_LEVEL_TAG_SET.contains(tag.as_str()) {
                break;
            }
        }
        absorbed.push_str(&dom::node_html(&node));
        moved.push(node);
        cursor = node.next_sibling();
    }

    let br = Selection::from(last_br);
    if absorbed.trim().is_empty() {
        dom::remove(&br);
        return;
    }
    for node in moved {
        dom::remove(&Selection::from(node));
    }
    let wrapped = format!("<p>{absorbed}</p>");
    br.replace_with_html(wrapped.as_str());
}

/// Promote `div` to `p` when it has no direct child from the block set.
/// The check is shallow - block grandchildren do not prevent promotion.
fn convert_divs(doc: &Document) {
    let mut convertable = Vec::new();
    for node in doc.select("div").nodes() {
        let sel = Selection::from(*node);
        let has_block_child = sel.children().nodes().iter().any(|child| {
            child
                .node_name()
                .is_some_and(|t| DIV_TO_P_BLOCK_TAGS.contains(&t.to_ascii_lowercase().as_str()))
        });
        if !has_block_child {
            convertable.push(*node);
        }
    }
    for node in convertable {
        dom::rename(&Selection::from(node), "p");
    }
}

/// Promote `span` to `p` when no ancestor is a paragraph-ish container.
fn convert_spans(doc: &Document) {
    let mut convertable = Vec::new();
    for node in doc.select("span").nodes() {
        let sel = Selection::from(*node);
        let blocked = dom::ancestor_elements(&sel).iter().any(|ancestor| {
            dom::tag_name(ancestor)
                .is_some_and(|t| SPAN_TO_P_BLOCK_ANCESTORS.contains(&t.as_str()))
        });
        if !blocked {
            convertable.push(*node);
        }
    }
    for node in convertable {
        dom::rename(&Selection::from(node), "p");
    }
}

fn is_blank_text(node: &NodeRef) -> bool {
    node.is_text() && node.text().trim().is_empty()
}

fn is_br(node: &NodeRef) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|t| t.eq_ignore_ascii_case("br"))
}
