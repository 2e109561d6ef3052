//! Lexical scorers.
//!
//! Pure functions from raw text and attribute strings to score points.
//! Deterministic and side-effect free; this is the unit-testable surface of
//! the heuristic model. Everything downstream (propagation, candidate
//! selection) is arithmetic over these primitives.

#![allow(clippy::cast_possible_wrap)]

use dom_query::Selection;

use crate::dom;
use crate::patterns::{
    NEGATIVE_SCORE_HINTS, PARAGRAPH_SCORE_TAG_SET, PHOTO_HINTS, POSITIVE_SCORE_HINTS,
    SENTENCE_END_CHARS,
};

/// Penalty for paragraphs too short to say anything about the page.
const SHORT_TEXT_PENALTY: i64 = -10;

/// Normalized character count under which the penalty applies.
const SHORT_TEXT_LIMIT: usize = 20;

/// Bonus for text ending in terminal punctuation.
const SENTENCE_END_BONUS: i64 = 1;

/// Weight granted or withdrawn per class/id hint family match.
const HINT_FAMILY_WEIGHT: i64 = 25;

/// Smaller bonus for photo/caption markup.
const PHOTO_HINT_WEIGHT: i64 = 10;

/// One point per comma. Prose accumulates commas; menus and button labels
/// do not.
#[must_use]
pub fn score_commas(text: &str) -> i64 {
    text.matches(',').count() as i64
}

/// Coarse point bands over the normalized character count. The 50-200 band
/// is the ideal paragraph length and earns the largest bonus; longer text
/// still scores, but the paragraph itself carries less signal than its
/// accumulated children will.
#[must_use]
pub fn score_length(text_length: usize) -> i64 {
    match text_length {
        0..=49 => 0,
        50..=200 => 5,
        201..=400 => 3,
        401..=1000 => 2,
        _ => 1,
    }
}

/// Score one paragraph's text: commas, length band, sentence-end bonus.
/// Text under 20 normalized characters scores a flat -10.
#[must_use]
pub fn score_paragraph(text: &str) -> i64 {
    let normalized = dom::normalize_spaces(text);
    let text_length = normalized.chars().count();

    if text_length < SHORT_TEXT_LIMIT {
        return SHORT_TEXT_PENALTY;
    }

    let mut score = score_commas(&normalized) + score_length(text_length);
    if normalized.ends_with(&SENTENCE_END_CHARS[..]) {
        score += SENTENCE_END_BONUS;
    }
    score
}

/// Raw score of a node by tag. Paragraph-like tags are scored on their
/// text; structural containers get small fixed nudges either way.
#[must_use]
pub fn score_node(sel: &Selection) -> i64 {
    let Some(tag) = dom::tag_name(sel) else {
        return 0;
    };

    if PARAGRAPH_SCORE_TAG_SET.contains(tag.as_str()) {
        return score_paragraph(&dom::text_content(sel));
    }

    match tag.as_str() {
        "div" => 5,
        "td" | "blockquote" | "ol" | "ul" | "dl" => 3,
        "address" | "form" => -3,
        "th" => -5,
        _ => 0,
    }
}

/// Class/id weight of a node against the hint tables.
///
/// The concatenated "class id" string is tested once per family: +25 for a
/// positive-hint match, -25 for a negative-hint match (both can apply and
/// cancel out). Photo/caption classes add a smaller +10.
#[must_use]
pub fn get_weight(sel: &Selection) -> i64 {
    let signature = dom::class_and_id(sel);
    let mut weight = 0;

    if POSITIVE_SCORE_HINTS.is_match(&signature) {
        weight += HINT_FAMILY_WEIGHT;
    }
    if NEGATIVE_SCORE_HINTS.is_match(&signature) {
        weight -= HINT_FAMILY_WEIGHT;
    }
    if PHOTO_HINTS.is_match(&dom::class_name(sel)) {
        weight += PHOTO_HINT_WEIGHT;
    }

    weight
}
