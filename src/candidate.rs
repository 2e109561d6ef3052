//! Candidate selection.
//!
//! After normalization and scoring, the top candidate is the scored element
//! with the strictly greatest accumulated score, scanned in document order
//! so ties resolve to the earlier node. Root wrappers and void/inline tags
//! are never returned, whatever score fragments they picked up.

use dom_query::{Document, Selection};
use tracing::debug;

use crate::dom;
use crate::normalize;
use crate::options::OptionSet;
use crate::patterns::NON_TOP_CANDIDATE_TAG_SET;
use crate::scoring::{score_content, ScoreMap};

/// Run one full attempt over a tree: normalize, score, select.
///
/// Returns `None` when the tree produced no eligible scored node.
pub fn extract_best_node<'a>(
    doc: &'a Document,
    opts: &OptionSet,
    scores: &mut ScoreMap,
) -> Option<Selection<'a>> {
    normalize::normalize(doc, opts);
    score_content(doc, opts.weight_nodes, scores);
    find_top_candidate(doc, scores)
}

/// Document-order scan for the eligible node with the strictly greatest
/// score. Negative winners are returned too - quality is the sufficiency
/// judge's call, not the selector's.
pub fn find_top_candidate<'a>(doc: &'a Document, scores: &ScoreMap) -> Option<Selection<'a>> {
    let mut best: Option<(i64, Selection<'a>)> = None;

    for node in doc.select("*").nodes() {
        let Some(score) = scores.get(node.id) else {
            continue;
        };
        let sel = Selection::from(*node);
        let Some(tag) = dom::tag_name(&sel) else {
            continue;
        };
        if matches!(tag.as_str(), "html" | "body")
            || NON_TOP_CANDIDATE_TAG_SET.contains(tag.as_str())
        {
            continue;
        }

        let improves = best.as_ref().map_or(true, |(top, _)| score > *top);
        if improves {
            best = Some((score, sel));
        }
    }

    if let Some((score, sel)) = &best {
        let tag = dom::tag_name(sel).unwrap_or_default();
        debug!(score = *score, %tag, "top candidate selected");
    }
    best.map(|(_, sel)| sel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionSet;

    const PARA: &str = "A plain sentence of average length, written for the tests.";

    #[test]
    fn selector_prefers_the_container_with_scored_children() {
        let doc = dom::parse(&format!(
            "<html><body><article><p>{PARA}</p><p>{PARA}</p><p>{PARA}</p></article></body></html>"
        ));
        let mut scores = ScoreMap::new();

        let top = extract_best_node(&doc, &OptionSet::default(), &mut scores);

        let tag = top.as_ref().and_then(dom::tag_name);
        assert_eq!(tag.as_deref(), Some("article"));
    }

    #[test]
    fn body_and_html_are_never_candidates() {
        let doc = dom::parse(&format!("<html><body><p>{PARA}</p></body></html>"));
        let mut scores = ScoreMap::new();

        let top = extract_best_node(&doc, &OptionSet::default(), &mut scores);

        // body accumulates more than the lone paragraph but is excluded.
        let tag = top.as_ref().and_then(dom::tag_name);
        assert_eq!(tag.as_deref(), Some("p"));
    }

    #[test]
    fn excluded_tags_are_skipped_regardless_of_score() {
        let doc = dom::parse("<html><body><div><img src=\"x.jpg\"><p>tiny</p></div></body></html>");
        let mut scores = ScoreMap::new();

        // Force an absurd score onto an excluded tag.
        let img_id = doc.select("img").nodes().first().map(|n| n.id);
        if let Some(id) = img_id {
            scores.set(id, 10_000);
        }
        let top = find_top_candidate(&doc, &scores);
        assert!(top.is_none());
    }

    #[test]
    fn ties_resolve_to_document_order() {
        let doc = dom::parse("<html><body><div id=\"first\">a</div><div id=\"second\">b</div></body></html>");
        let mut scores = ScoreMap::new();
        for node in doc.select("div").nodes() {
            scores.set(node.id, 42);
        }

        let top = find_top_candidate(&doc, &scores);

        let id = top.as_ref().map(dom::id);
        assert_eq!(id.as_deref(), Some("first"));
    }

    #[test]
    fn empty_tree_yields_no_candidate() {
        let doc = dom::parse("<html><body></body></html>");
        let mut scores = ScoreMap::new();

        assert!(extract_best_node(&doc, &OptionSet::default(), &mut scores).is_none());
    }
}
