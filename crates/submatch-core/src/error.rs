//! Error types for the matching engine.

use thiserror::Error;

/// Main error type for matching operations.
///
/// Empty inputs are never errors; every variant here is fatal for the
/// current run and must be surfaced to the caller.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Malformed or internally inconsistent facts, e.g. a candidate match
    /// referencing a nonexistent capacity pool.
    #[error("data integrity error: {0}")]
    DataIntegrity(String),

    /// The score of a working solution could not be computed. The run is
    /// aborted; a solution without an authoritative score is not a valid
    /// deliverable.
    #[error("score calculation error: {0}")]
    ScoreCalculation(String),

    /// Invalid operation for the current solver state.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for matching operations.
pub type Result<T> = std::result::Result<T, MatchError>;
