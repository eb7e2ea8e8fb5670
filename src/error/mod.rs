//! Error types for the query DSL

use thiserror::Error;

/// Result type alias for query DSL operations
pub type Result<T> = std::result::Result<T, QueryError>;

/// Main error type for the query DSL
///
/// The only hard failure a builder can raise is [`QueryError::InvalidQuery`]:
/// a value offered as a sub-query that is not the serialized envelope of a
/// recognized query type. Everything else (unrecognized score modes, odd
/// factors) is either accepted verbatim or silently discarded so a builder
/// chain never breaks mid-expression.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid query argument: {reason}")]
    InvalidQuery { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QueryError {
    /// Shorthand used by the sub-query validation path.
    pub(crate) fn invalid_query(reason: impl Into<String>) -> Self {
        QueryError::InvalidQuery {
            reason: reason.into(),
        }
    }
}
