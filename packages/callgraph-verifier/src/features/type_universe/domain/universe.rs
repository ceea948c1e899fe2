//! Type universe
//!
//! Explicit replacement for a process-wide loader table: every resolution call
//! receives the universe it resolves against. Loaders and declarations are
//! added before graph construction; afterwards the universe is only read,
//! except for handle interning which is safe to share across threads.

use super::class_info::{ClassInfo, ClassKind, DeclaredMethod};
use super::errors::{UniverseError, UnknownLoader};
use crate::features::type_universe::infrastructure::MethodInterner;
use crate::shared::models::{LanguageTag, Loader, MethodHandle, MethodRef, MethodSignature, TypeName};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Closed set of loaders, classes and methods for one verification run
#[derive(Debug, Default)]
pub struct TypeUniverse {
    loaders: Vec<Loader>,
    classes: Vec<ClassInfo>,
    /// Type name → indexes into `classes` (one entry per loader declaring it)
    class_index: FxHashMap<TypeName, Vec<usize>>,
    interner: MethodInterner,
}

impl TypeUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Loader Registry
    // ═══════════════════════════════════════════════════════════════════════

    /// Register a loader; names are unique within a universe
    pub fn register_loader(
        &mut self,
        name: &str,
        language: LanguageTag,
    ) -> Result<Loader, UniverseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UniverseError::EmptyLoaderName);
        }
        if self.loaders.iter().any(|l| l.name() == name) {
            return Err(UniverseError::DuplicateLoader(name.to_string()));
        }
        let loader = Loader::new(name, language);
        debug!("registered loader {} ({})", loader, language);
        self.loaders.push(loader.clone());
        Ok(loader)
    }

    pub fn loaders(&self) -> &[Loader] {
        &self.loaders
    }

    /// Find a registered loader by name (linear scan)
    pub fn find_loader(&self, name: &str) -> Result<&Loader, UnknownLoader> {
        self.loaders
            .iter()
            .find(|l| l.name() == name)
            .ok_or_else(|| UnknownLoader {
                loader: name.to_string(),
                known: self.loaders.iter().map(|l| l.name().to_string()).collect(),
            })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Declarations
    // ═══════════════════════════════════════════════════════════════════════

    /// Declare a class or interface under a registered loader
    pub fn declare_class(
        &mut self,
        loader: &str,
        class: &str,
        kind: ClassKind,
    ) -> Result<TypeName, UniverseError> {
        let loader = self.find_loader(loader)?.clone();
        let name = TypeName::class(class);
        if self.class(loader.name(), &name).is_some() {
            return Err(UniverseError::DuplicateClass {
                loader: loader.name().to_string(),
                class: name.class_name().to_string(),
            });
        }
        let idx = self.classes.len();
        self.classes.push(ClassInfo::new(loader, name.clone(), kind));
        self.class_index.entry(name.clone()).or_default().push(idx);
        Ok(name)
    }

    /// Declare a method on an already declared class
    pub fn declare_method(
        &mut self,
        loader: &str,
        class: &str,
        name: &str,
        signature: &str,
        is_abstract: bool,
    ) -> Result<MethodHandle, UniverseError> {
        let type_name = TypeName::class(class);
        let idx = self
            .class_index_of(loader, &type_name)
            .ok_or_else(|| UniverseError::UnknownClass {
                loader: loader.to_string(),
                class: type_name.class_name().to_string(),
            })?;

        let class_info = &self.classes[idx];
        let handle = self.interner.intern(MethodRef::new(
            class_info.loader.clone(),
            type_name,
            name,
            MethodSignature::parse(signature),
        ));
        let is_interface_member = class_info.is_interface();

        let class_info = &mut self.classes[idx];
        if !class_info.declares(&handle) {
            class_info.methods.push(DeclaredMethod {
                handle: handle.clone(),
                is_abstract: is_abstract || is_interface_member,
                is_interface_member,
            });
        }
        Ok(handle)
    }

    fn class_index_of(&self, loader: &str, name: &TypeName) -> Option<usize> {
        self.class_index
            .get(name)?
            .iter()
            .copied()
            .find(|&idx| self.classes[idx].loader.name() == loader)
    }

    pub fn class(&self, loader: &str, name: &TypeName) -> Option<&ClassInfo> {
        self.class_index_of(loader, name).map(|idx| &self.classes[idx])
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Method Handles
    // ═══════════════════════════════════════════════════════════════════════

    /// Canonical handle for `(loader, type, name, signature)`
    ///
    /// Idempotent; the method does not have to be declared.
    pub fn method_handle(
        &self,
        loader: &Loader,
        declaring_type: TypeName,
        name: &str,
        signature: MethodSignature,
    ) -> MethodHandle {
        self.interner
            .intern(MethodRef::new(loader.clone(), declaring_type, name, signature))
    }

    /// Whether `handle` names a method declared in this universe
    pub fn contains_method(&self, handle: &MethodHandle) -> bool {
        self.class(handle.loader().name(), handle.declaring_type())
            .map_or(false, |c| c.declares(handle))
    }

    /// Every declared method of one loader, with its abstract/interface flags
    pub fn iterate_declared_methods<'a>(
        &'a self,
        loader: &str,
    ) -> Result<impl Iterator<Item = &'a DeclaredMethod> + 'a, UnknownLoader> {
        let loader = self.find_loader(loader)?.clone();
        Ok(self
            .classes
            .iter()
            .filter(move |c| c.loader == loader)
            .flat_map(|c| c.methods.iter()))
    }
}
