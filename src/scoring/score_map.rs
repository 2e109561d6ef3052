//! Transient per-attempt score storage.
//!
//! Scores are attached to nodes for the duration of one extraction attempt.
//! They live in an explicit map keyed by `NodeId` rather than as synthetic
//! attributes on the live tree, so resetting between cascade attempts is
//! dropping the map, and the tree serialization never leaks scoring state.

use std::collections::HashMap;

use dom_query::NodeId;

/// Mutable score table for one extraction attempt.
///
/// Absent entries mean "unscored". Stored values may be negative; a negative
/// score biases a node away from selection but keeps it eligible.
#[derive(Debug, Default)]
pub struct ScoreMap {
    scores: HashMap<NodeId, i64>,
}

impl ScoreMap {
    /// Create an empty score table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored score for a node, `None` when unscored.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<i64> {
        self.scores.get(&id).copied()
    }

    /// Store a node's score, replacing any previous value.
    pub fn set(&mut self, id: NodeId, score: i64) {
        self.scores.insert(id, score);
    }

    /// Whether the node has been scored.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.scores.contains_key(&id)
    }

    /// Number of scored nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when no node has been scored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Forget all scores. Equivalent to starting a fresh attempt.
    pub fn clear(&mut self) {
        self.scores.clear();
    }
}
