//! Internal type names
//!
//! Class types are stored in sigiled internal form: `Lpkg/Foo`.
//! Descriptor text carries the unsigiled class name (`pkg/Foo`); the sigil is
//! added here so every caller ends up with the same representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Sigil prefixed to class type names
pub const CLASS_SIGIL: char = 'L';

/// Sigiled internal type name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TypeName {
    internal: Arc<str>,
}

impl TypeName {
    /// Build a class type name from its unsigiled form (`pkg/Foo` or `pkg.Foo`)
    pub fn class(name: &str) -> Self {
        let normalized = name.trim().replace('.', "/");
        let mut internal = String::with_capacity(normalized.len() + 1);
        internal.push(CLASS_SIGIL);
        internal.push_str(&normalized);
        Self {
            internal: internal.into(),
        }
    }

    /// Sigiled form, e.g. `Lpkg/Foo`
    #[inline]
    pub fn as_internal(&self) -> &str {
        &self.internal
    }

    /// Unsigiled form, e.g. `pkg/Foo`
    #[inline]
    pub fn class_name(&self) -> &str {
        self.internal
            .strip_prefix(CLASS_SIGIL)
            .unwrap_or(&self.internal)
    }

    /// Simple class name (`Foo`)
    pub fn simple_name(&self) -> &str {
        let name = self.class_name();
        match name.rfind('/') {
            Some(pos) => &name[pos + 1..],
            None => name,
        }
    }

    /// Human readable dotted form (`pkg.Foo`)
    pub fn dotted(&self) -> String {
        self.class_name().replace('/', ".")
    }
}

impl From<String> for TypeName {
    fn from(s: String) -> Self {
        Self::class(&s)
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        Self::class(s)
    }
}

impl From<TypeName> for String {
    fn from(t: TypeName) -> Self {
        t.class_name().to_string()
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.internal)
    }
}
