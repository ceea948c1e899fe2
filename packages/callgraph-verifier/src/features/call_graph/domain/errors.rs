//! Call graph construction errors

use thiserror::Error;

/// Fatal failure of the external call-graph builder
///
/// Aborts the whole verification run; never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Call graph construction was cancelled")]
    Cancelled,

    #[error("Invalid entrypoint: {0}")]
    InvalidEntrypoint(String),

    /// A node refers to a method the type universe does not declare
    #[error("Call graph node for undeclared method {0}")]
    UndeclaredMethod(String),

    #[error("Call graph builder internal error: {0}")]
    Internal(String),
}

impl BuildError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
