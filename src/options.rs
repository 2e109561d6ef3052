//! Extraction strictness options.
//!
//! An `OptionSet` is one configuration of the three strictness flags the
//! cascade controller relaxes between attempts. The default cascade starts
//! with everything enabled and switches flags off one at a time, most
//! impactful first.

use serde::{Deserialize, Serialize};

/// One configuration of extraction strictness flags.
///
/// Immutable once built; the cascade controller owns an ordered list of
/// these and never mutates them in place.
///
/// # Example
///
/// ```rust
/// use bodycopy::OptionSet;
///
/// // Default: strictest settings
/// let options = OptionSet::default();
/// assert!(options.strip_unlikely_candidates);
///
/// // Customize specific flags
/// let options = OptionSet {
///     weight_nodes: false,
///     ..OptionSet::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    /// Remove blacklist-matched elements (navigation, social chrome, ad
    /// slots) before scoring. Switched off when a page keeps its article
    /// inside markup the blacklist would discard.
    pub strip_unlikely_candidates: bool,

    /// Add class/id weight to each node's initial score. Switched off when
    /// a page uses misleading class names on its content containers.
    pub weight_nodes: bool,

    /// Ask the downstream cleaning pass to conditionally drop link-dense
    /// sections from the selected node. The scoring engine itself does not
    /// consult this flag; it travels with the winning attempt so the
    /// cleaning collaborator knows which mode won.
    pub clean_conditionally: bool,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            strip_unlikely_candidates: true,
            weight_nodes: true,
            clean_conditionally: true,
        }
    }
}

/// The fixed attempt order, strictest first. Relaxation order matters:
/// unlikely-candidate stripping removes whole subtrees and is the most
/// common reason a page loses its article, so it is the first flag to go.
#[must_use]
pub fn default_cascade() -> Vec<OptionSet> {
    vec![
        OptionSet::default(),
        OptionSet {
            strip_unlikely_candidates: false,
            ..OptionSet::default()
        },
        OptionSet {
            strip_unlikely_candidates: false,
            weight_nodes: false,
            ..OptionSet::default()
        },
        OptionSet {
            strip_unlikely_candidates: false,
            weight_nodes: false,
            clean_conditionally: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_option_set_is_strictest() {
        let options = OptionSet::default();
        assert!(options.strip_unlikely_candidates);
        assert!(options.weight_nodes);
        assert!(options.clean_conditionally);
    }

    #[test]
    fn default_cascade_relaxes_monotonically() {
        let cascade = default_cascade();
        assert_eq!(cascade.len(), 4);
        assert_eq!(cascade[0], OptionSet::default());

        fn enabled(o: &OptionSet) -> usize {
            usize::from(o.strip_unlikely_candidates)
                + usize::from(o.weight_nodes)
                + usize::from(o.clean_conditionally)
        }

        for pair in cascade.windows(2) {
            assert!(enabled(&pair[1]) < enabled(&pair[0]));
        }

        let last = cascade[cascade.len() - 1];
        assert!(!last.strip_unlikely_candidates);
        assert!(!last.weight_nodes);
        assert!(!last.clean_conditionally);
    }

    #[test]
    fn option_set_is_serializable() {
        fn assert_serde<T: serde::Serialize + for<'de> serde::Deserialize<'de>>(_: &T) {}

        let options = OptionSet {
            weight_nodes: false,
            ..OptionSet::default()
        };
        assert_serde(&options);
    }
}
