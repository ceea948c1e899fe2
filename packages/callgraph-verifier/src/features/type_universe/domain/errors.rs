//! Type universe error types

use thiserror::Error;

/// A loader name that is not registered in the universe
///
/// Callers must only ask for loaders they know exist, so this signals a broken
/// precondition (test misconfiguration), not analyzer behavior.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown loader '{loader}' (registered: {})", .known.join(", "))]
pub struct UnknownLoader {
    pub loader: String,
    pub known: Vec<String>,
}

/// Errors raised while populating a universe
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniverseError {
    #[error("Loader '{0}' is already registered")]
    DuplicateLoader(String),

    #[error("Loader name must not be empty")]
    EmptyLoaderName,

    #[error(transparent)]
    UnknownLoader(#[from] UnknownLoader),

    #[error("Class '{class}' is not declared in loader '{loader}'")]
    UnknownClass { loader: String, class: String },

    #[error("Class '{class}' is already declared in loader '{loader}'")]
    DuplicateClass { loader: String, class: String },
}
