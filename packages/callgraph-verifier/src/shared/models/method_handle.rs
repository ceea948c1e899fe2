//! Method handles
//!
//! Canonical identity of one method: `(loader, declaring type, name, signature)`
//! plus the language derived from the loader. Handles are cheap to clone and
//! compare by value.

use super::language::LanguageTag;
use super::loader::Loader;
use super::method_signature::MethodSignature;
use super::type_name::TypeName;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Fields of a method handle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodRef {
    pub loader: Loader,
    pub declaring_type: TypeName,
    pub name: Arc<str>,
    pub signature: MethodSignature,
    pub language: LanguageTag,
}

impl MethodRef {
    /// Build the fields of a handle; the language always follows the loader
    pub fn new(
        loader: Loader,
        declaring_type: TypeName,
        name: impl AsRef<str>,
        signature: MethodSignature,
    ) -> Self {
        let language = loader.language();
        Self {
            loader,
            declaring_type,
            name: Arc::from(name.as_ref()),
            signature,
            language,
        }
    }
}

/// Canonical, value-comparable method handle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodHandle(Arc<MethodRef>);

impl MethodHandle {
    pub fn new(method: MethodRef) -> Self {
        Self(Arc::new(method))
    }

    #[inline]
    pub fn loader(&self) -> &Loader {
        &self.0.loader
    }

    #[inline]
    pub fn declaring_type(&self) -> &TypeName {
        &self.0.declaring_type
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    #[inline]
    pub fn signature(&self) -> &MethodSignature {
        &self.0.signature
    }

    #[inline]
    pub fn language(&self) -> LanguageTag {
        self.0.language
    }

    /// Whether both handles share the same interned allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Descriptor text `loader#type#name#signature`
    pub fn descriptor(&self) -> String {
        format!(
            "{}#{}#{}#{}",
            self.loader().name(),
            self.declaring_type().class_name(),
            self.name(),
            self.signature()
        )
    }

    /// Short human form used in diagnostics: `pkg.Foo.bar`
    pub fn short_name(&self) -> String {
        format!("{}.{}", self.declaring_type().dotted(), self.name())
    }
}

impl fmt::Display for MethodHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "< {}, {}, {}{} >",
            self.loader(),
            self.declaring_type(),
            self.name(),
            self.signature()
        )
    }
}

impl Serialize for MethodHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.descriptor())
    }
}
