//! Content scoring.
//!
//! # Module Structure
//!
//! - `lexical`: pure text and attribute scorers (commas, length bands,
//!   sentence endings, class/id weight)
//! - `score_map`: transient per-attempt score storage keyed by node id
//! - `propagate`: the propagation engine distributing paragraph scores to
//!   ancestors, with the hNews container boost

pub mod lexical;
pub mod propagate;
pub mod score_map;

pub use lexical::{get_weight, score_commas, score_length, score_node, score_paragraph};
pub use propagate::score_content;
pub use score_map::ScoreMap;
