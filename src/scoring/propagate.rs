//! Score propagation engine.
//!
//! Paragraph-like nodes are scored on their own text, then fractions of
//! that score flow to their parent and grandparent. Selection later picks
//! the container that accumulated the most, so the article wrapper wins
//! over any single paragraph.
//!
//! The propagation pass runs twice per attempt, in the same order. A node's
//! ancestors may be initialized after the node itself has contributed, and
//! the second pass adds the parent/grandparent contributions again on top
//! of the settled totals. The doubled ancestor accounting is part of the
//! scoring contract - selection thresholds and the hNews boost are
//! calibrated against it, so both passes must run.

use std::collections::HashSet;

use dom_query::{Document, Selection};
use tracing::trace;

use super::lexical::{get_weight, score_node};
use super::score_map::ScoreMap;
use crate::dom;
use crate::patterns::{HNEWS_BOOST, HNEWS_CONTENT_PAIRS, SCORABLE_SELECTOR};

/// Score every scorable node in the tree and propagate to ancestors.
///
/// `weight_nodes` controls whether class/id weight is folded into each
/// node's initial score; the hNews container boost applies either way.
pub fn score_content(doc: &Document, weight_nodes: bool, scores: &mut ScoreMap) {
    boost_hnews_containers(doc, weight_nodes, scores);

    score_paragraphs(doc, weight_nodes, scores);
    score_paragraphs(doc, weight_nodes, scores);
}

/// Flat boost for microformat container/content class pairs.
fn boost_hnews_containers(doc: &Document, weight_nodes: bool, scores: &mut ScoreMap) {
    for (container, content) in HNEWS_CONTENT_PAIRS {
        let selector = format!(".{container} .{content}");
        for node in doc.select(&selector).nodes().to_vec() {
            let sel = Selection::from(node);
            let ancestor = dom::parent_element(&sel)
                .and_then(|parent| dom::closest_with_class(&parent, container));
            if let Some(ancestor) = ancestor {
                trace!(container, content, "hnews pair matched");
                add_score(&ancestor, weight_nodes, scores, HNEWS_BOOST);
            }
        }
    }
}

/// One propagation pass over the paragraph-like nodes, in document order.
///
/// Each node contributes its raw score to the parent and half of it
/// (integer truncation) to the grandparent. The visited set is per pass:
/// the second pass walks every node again, but `get_or_init_score` returns
/// the stored value instead of re-initializing.
pub(crate) fn score_paragraphs(doc: &Document, weight_nodes: bool, scores: &mut ScoreMap) {
    let nodes = doc.select(SCORABLE_SELECTOR).nodes().to_vec();
    let mut visited = HashSet::new();

    for node in nodes {
        if !visited.insert(node.id) {
            continue;
        }
        let sel = Selection::from(node);
        get_or_init_score(&sel, weight_nodes, scores);

        let raw = score_node(&sel);
        let Some(parent) = dom::parent_element(&sel) else {
            continue;
        };
        add_score(&parent, weight_nodes, scores, raw);
        if let Some(grandparent) = dom::parent_element(&parent) {
            add_score(&grandparent, weight_nodes, scores, raw / 2);
        }
    }
}

/// Stored score of a node, initializing it on first touch.
///
/// Initialization computes `score_node` (+ class/id weight when enabled)
/// and seeds the parent with a quarter of that total, which transitively
/// initializes the ancestor chain. Scores never live on inline spans: a
/// span is renamed to `div` in place before its score attaches.
pub(crate) fn get_or_init_score(sel: &Selection, weight_nodes: bool, scores: &mut ScoreMap) -> i64 {
    let Some(id) = dom::node_id(sel) else {
        return 0;
    };
    if let Some(existing) = scores.get(id) {
        return existing;
    }

    if dom::tag_name(sel).as_deref() == Some("span") {
        dom::rename(sel, "div");
    }

    let mut total = score_node(sel);
    if weight_nodes {
        total += get_weight(sel);
    }
    scores.set(id, total);

    if let Some(parent) = dom::parent_element(sel) {
        add_score(&parent, weight_nodes, scores, total / 4);
    }
    total
}

/// Add points to a node's stored score, initializing it first if needed.
pub(crate) fn add_score(sel: &Selection, weight_nodes: bool, scores: &mut ScoreMap, amount: i64) {
    let Some(id) = dom::node_id(sel) else {
        return;
    };
    let updated = get_or_init_score(sel, weight_nodes, scores) + amount;
    scores.set(id, updated);
}
