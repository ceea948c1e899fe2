//! Error types for callgraph-verifier
//!
//! Only failures that end a run live here. Per-assertion problems (malformed
//! descriptors, unknown loaders, missing methods) become report diagnostics.

use crate::config::ConfigError;
use crate::features::call_graph::BuildError;
use crate::features::type_universe::UniverseError;
use thiserror::Error;

/// Main error type for verification runs
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Call graph construction failed; the run is aborted
    #[error("Call graph build failed: {0}")]
    Build(#[from] BuildError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Inconsistent type universe
    #[error("Type universe error: {0}")]
    Universe(#[from] UniverseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot or report JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Assertion file YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for verification operations
pub type Result<T> = std::result::Result<T, VerifyError>;
