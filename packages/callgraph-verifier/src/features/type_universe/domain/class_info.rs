//! Declared classes and methods

use crate::shared::models::{Loader, MethodHandle, TypeName};
use serde::{Deserialize, Serialize};

/// Kind of a declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Class,
    Interface,
}

impl Default for ClassKind {
    fn default() -> Self {
        Self::Class
    }
}

/// A method declared by some class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredMethod {
    pub handle: MethodHandle,
    pub is_abstract: bool,
    /// Declared by an interface
    pub is_interface_member: bool,
}

/// A class (or interface) declared under one loader
#[derive(Debug, Clone)]
pub struct ClassInfo {
    pub loader: Loader,
    pub name: TypeName,
    pub kind: ClassKind,
    pub methods: Vec<DeclaredMethod>,
}

impl ClassInfo {
    pub fn new(loader: Loader, name: TypeName, kind: ClassKind) -> Self {
        Self {
            loader,
            name,
            kind,
            methods: Vec::new(),
        }
    }

    #[inline]
    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    pub fn declares(&self, handle: &MethodHandle) -> bool {
        self.methods.iter().any(|m| &m.handle == handle)
    }
}
