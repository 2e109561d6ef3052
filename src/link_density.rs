//! Sufficiency and link density tests.
//!
//! Two quality measures over a candidate node: the length-based sufficiency
//! gate the cascade controller consults after selection, and the
//! link-density ratio consumed by the downstream conditional-cleaning pass.
//! Both work on whitespace-normalized text, measured in characters.

use dom_query::Selection;

use crate::dom;

/// Minimum normalized text length for a candidate to be accepted without
/// falling through the cascade.
pub const SUFFICIENT_TEXT_LEN: usize = 100;

/// Whether a candidate carries enough text to stand as the article.
/// Exactly 100 normalized characters is sufficient; 99 is not.
#[must_use]
pub fn node_is_sufficient(sel: &Selection) -> bool {
    dom::normalized_text_len(sel) >= SUFFICIENT_TEXT_LEN
}

/// Fraction of a node's text contributed by anchor elements.
///
/// Each anchor's text is normalized individually before summing. An empty
/// node has density 0.0. Values above roughly 0.5 usually mean navigation.
#[must_use]
pub fn link_density(sel: &Selection) -> f64 {
    let total = dom::normalized_text_len(sel);
    if total == 0 {
        return 0.0;
    }

    let link_chars: usize = sel
        .select("a")
        .iter()
        .map(|link| dom::normalize_spaces(&link.text()).chars().count())
        .sum();

    link_chars as f64 / total as f64
}
