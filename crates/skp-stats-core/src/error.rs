//! Error types for statistics operations

use thiserror::Error;

/// Error type for the fallible edges of the statistics API
///
/// Counting, merging and finalizing never fail. Errors only come from
/// parsing names and from rendering a report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Name does not match any counter field
    #[error("unknown stat field: {0}")]
    UnknownField(String),

    /// Name does not match any operation kind
    #[error("unknown stat kind: {0}")]
    UnknownKind(String),

    /// Rendering a report failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for statistics operations
pub type Result<T> = std::result::Result<T, StatsError>;
