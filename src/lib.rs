//! # bodycopy
//!
//! Site-agnostic extraction of the primary readable content of an HTML
//! document - the "body copy" a human would read - discarding navigation,
//! ads, comments, and boilerplate without any page-specific configuration.
//!
//! The crate is a content-scoring and candidate-selection engine: it walks
//! the parsed tree, scores each element through structural and lexical
//! heuristics, propagates scores to ancestors, strips structurally unlikely
//! sections, and selects the best candidate node. A cascading options
//! controller retries extraction under progressively relaxed strictness
//! until the result clears a sufficiency bar, degrading to the best-seen
//! candidate instead of failing.
//!
//! ## Quick Start
//!
//! ```rust
//! use bodycopy::extract;
//!
//! let html = r#"<html><body>
//!   <nav class="menu"><a href="/">Home</a><a href="/about">About</a></nav>
//!   <div class="article-body">
//!     <p>The first paragraph of the article, with enough running text to
//!     look like prose rather than a caption or a navigation label.</p>
//!     <p>A second paragraph, because real articles rarely stop after one
//!     thought and the scorer rewards accumulated content.</p>
//!   </div>
//! </body></html>"#;
//!
//! let result = extract(html);
//! assert!(result.sufficient);
//! assert!(result.text.contains("first paragraph"));
//! assert!(!result.text.contains("Home"));
//! ```
//!
//! ## Scope
//!
//! The engine owns scoring, normalization, candidate selection, and the
//! cascade. Field extractors (title, author, date), the final markup
//! cleaning pass, and fetching/encoding live in collaborating crates; the
//! winning [`OptionSet`] and the [`node_is_sufficient`]/[`link_density`]
//! measures are exposed for them.

mod candidate;
mod cascade;
mod error;
mod options;
mod patterns;

/// DOM adapter over `dom_query`.
pub mod dom;

/// Sufficiency gate and link-density measure.
pub mod link_density;

/// Pre-scoring tree normalization.
pub mod normalize;

/// Lexical scorers, score storage, and propagation.
pub mod scoring;

// Public API - re-exports
pub use candidate::{extract_best_node, find_top_candidate};
pub use cascade::{Extraction, Extractor, Params, MAX_ATTEMPTS};
pub use error::{Error, Result};
pub use link_density::{link_density, node_is_sufficient, SUFFICIENT_TEXT_LEN};
pub use options::{default_cascade, OptionSet};

/// Extracts the main content of an HTML document with the default cascade.
///
/// Always returns an [`Extraction`]; an empty or contentless document
/// yields empty text rather than an error.
///
/// # Example
///
/// ```rust
/// use bodycopy::extract;
///
/// let result = extract("<html><body><p>Too short.</p></body></html>");
/// assert!(!result.sufficient);
/// assert_eq!(result.text, "Too short.");
/// ```
#[must_use]
pub fn extract(html: &str) -> Extraction {
    Extractor::new().extract(&Params::new(html), None)
}

/// Extracts the main content with a caller-supplied option set.
///
/// The given options run as an additional first attempt ahead of the fixed
/// cascade; the cascade still runs if that attempt is insufficient.
///
/// # Example
///
/// ```rust
/// use bodycopy::{extract_with_options, OptionSet};
///
/// let options = OptionSet {
///     strip_unlikely_candidates: false,
///     ..OptionSet::default()
/// };
/// let result = extract_with_options("<html><body></body></html>", options);
/// assert_eq!(result.text, "");
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: OptionSet) -> Extraction {
    Extractor::new().extract(&Params::new(html), Some(options))
}
