//! Compiled regex patterns and tag catalogs for content scoring.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! These tables are pure data: the weight tables feed the lexical scorers,
//! the candidate blacklist/whitelist feeds normalization, and the tag sets
//! feed paragraph promotion and candidate selection. They are process-wide
//! immutable statics, safe for concurrent read-only access from parallel
//! extraction workers.

#![allow(clippy::expect_used)]

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Class/Id Weight Tables
// =============================================================================

/// Matches class/id names that suggest an element holds article content.
/// First-match semantics: one +25 for the whole family, not per keyword.
pub static POSITIVE_SCORE_HINTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(article|articlecontent|instapaper_body|blog|body|content|entry-content-asset|entry|hentry|hfeed|hatom|main|page|permalink|post|story|text)",
    )
    .expect("POSITIVE_SCORE_HINTS regex")
});

/// Matches class/id names that suggest boilerplate rather than content.
/// Note: word boundaries are deliberately absent - compound names like
/// "comment-list" should still count against the element.
pub static NEGATIVE_SCORE_HINTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(adbox|advert|author|bio|bookmark|bottom|byline|clear|combx|comment|contact|credit|crumb|date|deck|excerpt|featured|foot|footer|footnote|graf|head|info|infotext|jump|linebreak|masthead|media|meta|modal|outbrain|promo|related|respond|scroll|secondary|share|shopping|shoutbox|sidebar|sponsor|stamp|summary|tags|tools|widget)",
    )
    .expect("NEGATIVE_SCORE_HINTS regex")
});

/// Matches class names around figures and captions. A weak positive signal:
/// photo wrappers usually sit inside the article body, not the chrome.
pub static PHOTO_HINTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(figure|photo|image|caption)").expect("PHOTO_HINTS regex")
});

// =============================================================================
// Unlikely-Candidate Tables
// =============================================================================

/// Matches class/id names of elements that are almost never article content
/// and can be removed outright before scoring (navigation, social chrome,
/// comment threads, ad slots).
pub static CANDIDATES_BLACKLIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(ad-break|adbox|advert|addthis|agegate|aux|blogger-labels|combx|comment|conversation|disqus|entry-unrelated|extra|foot|header|hidden|loader|login|menu|meta|nav|outbrain|pager|pagination|popup|printfriendly|related|remove|remark|rss|share|shoutbox|sidebar|sociable|sponsor|taboola|tools)",
    )
    .expect("CANDIDATES_BLACKLIST regex")
});

/// Rescues elements the blacklist would otherwise remove. Compound names
/// like "article-header" carry a content marker next to the boilerplate one;
/// keep those and let scoring sort them out.
pub static CANDIDATES_WHITELIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(article|body|blogindex|column|content|entry-content-asset|hfeed|hentry|hatom|main|page|posts|shadow)",
    )
    .expect("CANDIDATES_WHITELIST regex")
});

// =============================================================================
// hNews Selector Pairs
// =============================================================================

/// (container class, content class) pairs from the hNews/hAtom microformat
/// conventions. A container holding a matching content descendant is a very
/// strong signal and earns a flat score boost.
pub static HNEWS_CONTENT_PAIRS: [(&str, &str); 6] = [
    ("hentry", "entry-content"),
    ("entry", "entry-content"),
    ("entry", "entry_content"),
    ("post", "post-body"),
    ("post", "post_body"),
    ("post", "postbody"),
];

/// Flat score added to an hNews container when a content descendant exists.
pub const HNEWS_BOOST: i64 = 80;

// =============================================================================
// Tag Catalogs
// =============================================================================

/// Tags that render as blocks. Used to bound the paragraphs created from
/// `<br>` runs: absorbed siblings stop at the first block-level element.
pub static BLOCK_LEVEL_TAGS: [&str; 44] = [
    "article", "aside", "blockquote", "body", "br", "button", "canvas", "caption", "col",
    "colgroup", "dd", "div", "dl", "dt", "embed", "fieldset", "figcaption", "figure", "footer",
    "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup", "hr", "li", "map", "object",
    "ol", "output", "p", "pre", "progress", "section", "table", "tbody", "textarea", "tfoot",
    "ul", "video",
];

/// `BLOCK_LEVEL_TAGS` as a `HashSet`
pub static BLOCK_LEVEL_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BLOCK_LEVEL_TAGS.into_iter().collect());

/// Direct children that stop a `div` from being promoted to a paragraph.
/// The check is shallow: a grandchild from this set does not block promotion.
pub static DIV_TO_P_BLOCK_TAGS: [&str; 8] =
    ["a", "blockquote", "dl", "div", "img", "p", "pre", "table"];

/// Ancestors that stop a `span` from being promoted to a paragraph.
pub static SPAN_TO_P_BLOCK_ANCESTORS: [&str; 4] = ["p", "div", "li", "figcaption"];

/// Tags never returned as the top candidate, no matter their score. Mostly
/// void and inline elements that can pick up propagated score fragments.
pub static NON_TOP_CANDIDATE_TAGS: [&str; 12] = [
    "br", "b", "i", "label", "hr", "area", "base", "basefont", "input", "img", "link", "meta",
];

/// `NON_TOP_CANDIDATE_TAGS` as a `HashSet`
pub static NON_TOP_CANDIDATE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NON_TOP_CANDIDATE_TAGS.into_iter().collect());

/// Paragraph-like tags scored with the lexical paragraph scorer.
pub static PARAGRAPH_SCORE_TAGS: [&str; 4] = ["p", "li", "span", "pre"];

/// `PARAGRAPH_SCORE_TAGS` as a `HashSet`
pub static PARAGRAPH_SCORE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PARAGRAPH_SCORE_TAGS.into_iter().collect());

/// Selector for the nodes one propagation pass visits. Spans and divs that
/// qualify as paragraphs have already been promoted by normalization.
pub const SCORABLE_SELECTOR: &str = "p, pre";

// =============================================================================
// Text Patterns
// =============================================================================

/// Matches whitespace runs for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Terminal punctuation marking a sentence end.
pub static SENTENCE_END_CHARS: [char; 5] = ['.', '!', '?', ':', ';'];
