//! Cascading options controller.
//!
//! Extraction runs as an ordered sequence of attempts, strictest options
//! first. Each attempt parses the raw markup afresh, so the destructive
//! normalization and scoring of one attempt never leak into the next. The
//! first candidate that passes the sufficiency gate wins; when the cascade
//! is exhausted, the best-scoring candidate seen across all attempts is
//! returned instead. Extraction never fails for non-empty input - an empty
//! document yields empty text, not an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::candidate::extract_best_node;
use crate::dom;
use crate::error::{Error, Result};
use crate::link_density::node_is_sufficient;
use crate::options::{default_cascade, OptionSet};
use crate::scoring::ScoreMap;

/// Hard cap on cascade attempts, custom cascades included. Keeps worst-case
/// latency bounded on pathological trees.
pub const MAX_ATTEMPTS: usize = 8;

/// Input to one extraction call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Params<'a> {
    /// Raw HTML markup. Every attempt re-parses this string.
    pub html: &'a str,

    /// Document title, if the caller already extracted one. Not consulted
    /// by the scoring engine; forwarded for the downstream cleaning pass.
    pub title: Option<&'a str>,

    /// Source URL. Forwarded like `title`.
    pub url: Option<&'a str>,
}

impl<'a> Params<'a> {
    /// Build params from raw markup alone.
    #[must_use]
    pub fn new(html: &'a str) -> Self {
        Self {
            html,
            title: None,
            url: None,
        }
    }
}

/// Outcome of one extraction call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Extraction {
    /// Whitespace-normalized text of the selected candidate; empty when the
    /// document produced no candidate at all.
    pub text: String,

    /// Whether the candidate passed the sufficiency gate, or was only the
    /// best-seen fallback after the cascade was exhausted.
    pub sufficient: bool,

    /// The option set of the attempt that produced `text`. Downstream
    /// cleaning consults `clean_conditionally` from here.
    pub options: OptionSet,

    /// Number of attempts actually run.
    pub attempts: usize,

    /// Title echoed from the request params.
    pub title: Option<String>,

    /// URL echoed from the request params.
    pub url: Option<String>,
}

/// The cascading extraction controller.
///
/// Owns the ordered list of option sets tried per call. Stateless across
/// calls: every `extract` works on its own parse trees and score tables, so
/// one extractor can serve parallel workers behind a shared reference.
#[derive(Debug, Clone)]
pub struct Extractor {
    cascade: Vec<OptionSet>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Extractor with the default cascade.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cascade: default_cascade(),
        }
    }

    /// Extractor with a caller-supplied cascade, tried in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCascade`] when `cascade` is empty.
    pub fn with_cascade(cascade: Vec<OptionSet>) -> Result<Self> {
        if cascade.is_empty() {
            return Err(Error::EmptyCascade);
        }
        Ok(Self { cascade })
    }

    /// Run the cascade over one document.
    ///
    /// A `requested` option set becomes an additional first attempt ahead of
    /// the configured cascade (skipped when identical to the cascade head);
    /// it never replaces the cascade.
    #[must_use]
    pub fn extract(&self, params: &Params, requested: Option<OptionSet>) -> Extraction {
        let mut plan: Vec<OptionSet> = Vec::with_capacity(self.cascade.len() + 1);
        if let Some(first) = requested {
            if self.cascade.first() != Some(&first) {
                plan.push(first);
            }
        }
        plan.extend(self.cascade.iter().copied());

        let total = plan.len().min(MAX_ATTEMPTS);
        let final_opts = plan.get(total.saturating_sub(1)).copied().unwrap_or_default();
        let mut best: Option<(i64, String, OptionSet)> = None;

        for (index, opts) in plan.into_iter().take(MAX_ATTEMPTS).enumerate() {
            let doc = dom::parse(params.html);
            let mut scores = ScoreMap::new();

            let Some(node) = extract_best_node(&doc, &opts, &mut scores) else {
                debug!(attempt = index, "no candidate found");
                continue;
            };

            let text = dom::normalize_spaces(&node.text());
            if node_is_sufficient(&node) {
                debug!(attempt = index, chars = text.chars().count(), "candidate accepted");
                return Extraction {
                    text,
                    sufficient: true,
                    options: opts,
                    attempts: index + 1,
                    title: params.title.map(str::to_string),
                    url: params.url.map(str::to_string),
                };
            }

            let score = dom::node_id(&node).and_then(|id| scores.get(id)).unwrap_or(0);
            debug!(attempt = index, score, chars = text.chars().count(), "candidate insufficient");
            if best.as_ref().map_or(true, |(top, _, _)| score > *top) {
                best = Some((score, text, opts));
            }
        }

        // Exhausted: degrade to the best-scoring candidate seen anywhere in
        // the cascade rather than failing.
        let (text, options) = match best {
            Some((_, text, options)) => (text, options),
            None => (String::new(), final_opts),
        };
        Extraction {
            text,
            sufficient: false,
            options,
            attempts: total,
            title: params.title.map(str::to_string),
            url: params.url.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARA: &str = "A plain sentence of average length, written for the tests.";

    fn article_html() -> String {
        format!(
            r#"<html><body>
            <div class="article-body"><p>{PARA}</p><p>{PARA}</p><p>{PARA}</p></div>
            </body></html>"#
        )
    }

    #[test]
    fn with_cascade_rejects_empty_list() {
        let result = Extractor::with_cascade(Vec::new());
        assert!(matches!(result, Err(Error::EmptyCascade)));
    }

    #[test]
    fn sufficient_document_short_circuits_on_first_attempt() {
        let html = article_html();
        let extraction = Extractor::new().extract(&Params::new(&html), None);

        assert!(extraction.sufficient);
        assert_eq!(extraction.attempts, 1);
        assert_eq!(extraction.options, OptionSet::default());
        assert!(extraction.text.contains("plain sentence"));
    }

    #[test]
    fn requested_options_run_as_additional_first_attempt() {
        let html = article_html();
        let requested = OptionSet {
            weight_nodes: false,
            ..OptionSet::default()
        };

        let extraction = Extractor::new().extract(&Params::new(&html), Some(requested));

        assert!(extraction.sufficient);
        assert_eq!(extraction.attempts, 1);
        assert_eq!(extraction.options, requested);
    }

    #[test]
    fn requested_options_identical_to_cascade_head_are_not_duplicated() {
        // A document no option set can make sufficient: every attempt runs.
        let html = format!("<html><body><div><p>{PARA}</p></div></body></html>");

        let merged = Extractor::new().extract(&Params::new(&html), Some(OptionSet::default()));
        let plain = Extractor::new().extract(&Params::new(&html), None);

        assert_eq!(merged.attempts, plain.attempts);
    }

    #[test]
    fn insufficient_document_falls_back_to_best_seen_candidate() {
        // One short paragraph, no blacklist matches: the first attempt
        // already finds it, the judge rejects it, and exhaustion returns it.
        let html = format!("<html><body><div><p>{PARA}</p></div></body></html>");
        let extraction = Extractor::new().extract(&Params::new(&html), None);

        assert!(!extraction.sufficient);
        assert_eq!(extraction.attempts, 4);
        assert_eq!(extraction.text, PARA);
    }

    #[test]
    fn empty_document_yields_empty_extraction() {
        let extraction = Extractor::new().extract(&Params::new(""), None);

        assert!(!extraction.sufficient);
        assert_eq!(extraction.text, "");

        let extraction = Extractor::new().extract(&Params::new("<html><body></body></html>"), None);
        assert_eq!(extraction.text, "");
    }

    #[test]
    fn params_metadata_is_echoed_on_the_result() {
        let html = article_html();
        let params = Params {
            html: &html,
            title: Some("A Title"),
            url: Some("https://example.com/a"),
        };

        let extraction = Extractor::new().extract(&params, None);

        assert_eq!(extraction.title.as_deref(), Some("A Title"));
        assert_eq!(extraction.url.as_deref(), Some("https://example.com/a"));
    }

    #[test]
    fn attempts_are_capped_for_oversized_custom_cascades() {
        let html = format!("<html><body><div><p>{PARA}</p></div></body></html>");
        let cascade = vec![OptionSet::default(); 20];

        let extractor = match Extractor::with_cascade(cascade) {
            Ok(e) => e,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        let extraction = extractor.extract(&Params::new(&html), None);

        assert_eq!(extraction.attempts, MAX_ATTEMPTS);
    }
}
