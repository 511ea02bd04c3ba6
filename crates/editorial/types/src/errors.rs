//! Error types for the editorial workflow family

/// Errors surfaced by editorial workflow resolution.
///
/// Absence of backing data is never an error: a key with zero backing
/// rows produces an empty-but-valid snapshot, which callers treat as
/// least privilege / no notification.
#[derive(Debug, thiserror::Error)]
pub enum EditorialError {
    /// The backing row source failed (connectivity, query error).
    /// Propagated unchanged; never retried at this layer.
    #[error("backing source error: {0}")]
    Backing(String),

    /// Caller-supplied input was malformed; rejected before any partial
    /// computation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for editorial workflow operations
pub type EditorialResult<T> = Result<T, EditorialError>;
