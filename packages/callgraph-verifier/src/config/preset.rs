//! Preset configurations
//!
//! Presets provide complete default configurations for common use cases.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Report unreachable methods without failing the run
    Lenient,

    /// Fail the run when any declared method is unreachable
    Strict,

    /// Lenient, plus IR dumps of every reachable method
    Debug,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
            Self::Debug => "debug",
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            "debug" => Ok(Self::Debug),
            _ => Err(format!(
                "Unknown preset '{}'. Valid presets: lenient, strict, debug",
                s
            )),
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Lenient
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
