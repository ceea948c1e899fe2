//! Loaders
//!
//! A loader is a named partition of the type universe (analyzed source vs.
//! library code). Identity is the name; each loader has exactly one language.

use super::language::LanguageTag;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Conventional name of the loader holding analyzed source code
pub const SOURCE_LOADER: &str = "Source";

/// Conventional name of the loader holding library/bytecode code
pub const PRIMORDIAL_LOADER: &str = "Primordial";

/// Registered loader, immutable once created
#[derive(Debug, Clone)]
pub struct Loader {
    name: Arc<str>,
    language: LanguageTag,
}

impl Loader {
    pub fn new(name: impl AsRef<str>, language: LanguageTag) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            language,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn language(&self) -> LanguageTag {
        self.language
    }
}

impl PartialEq for Loader {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.name, &other.name) || self.name == other.name
    }
}

impl Eq for Loader {}

impl Hash for Loader {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
