//! Error types for bodycopy.
//!
//! Extraction itself is infallible: it degrades to a coarse fallback or an
//! empty result instead of failing. Errors exist only for configuration
//! misuse at the API boundary.

/// Error type for extractor configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The extractor was configured with an empty cascade.
    #[error("extraction cascade must contain at least one option set")]
    EmptyCascade,
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;
