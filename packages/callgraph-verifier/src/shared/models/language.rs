//! Analysis language tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language a loader (and every method it defines) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    /// Java source or bytecode
    Java,
    /// JavaScript source
    JavaScript,
    /// Python source
    Python,
    /// Kotlin source
    Kotlin,
}

impl LanguageTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Kotlin => "kotlin",
        }
    }

    /// Parse a language tag from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "java" => Some(Self::Java),
            "javascript" | "js" => Some(Self::JavaScript),
            "python" | "py" => Some(Self::Python),
            "kotlin" | "kt" => Some(Self::Kotlin),
            _ => None,
        }
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self::Java
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
