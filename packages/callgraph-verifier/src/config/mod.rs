//! Verifier configuration
//!
//! Two levels:
//! - Level 1: Preset (`lenient`, `strict`, `debug`) - complete defaults
//! - Level 2: YAML file (`version: 1`) or field overrides on top of a preset
//!
//! # Examples
//!
//! ```rust,ignore
//! use callgraph_verifier::config::{Preset, VerifierConfig};
//!
//! let config = VerifierConfig::preset(Preset::Strict);
//! let config = VerifierConfig::from_yaml("verify.yaml")?;
//! ```

pub mod error;
pub mod preset;
pub mod verifier_config;

pub use error::{ConfigError, ConfigResult};
pub use preset::Preset;
pub use verifier_config::{ContextPolicy, VerifierConfig, CONFIG_VERSION};
