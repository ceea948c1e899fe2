//! Method handle interning
//!
//! Equal `(loader, type, name, signature)` tuples always map to one shared
//! handle allocation. Backed by a sharded concurrent map so resolution can run
//! from several rayon workers at once; the entry API makes find-or-create
//! atomic per key.

use crate::shared::models::{MethodHandle, MethodRef};
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

/// Concurrent find-or-create table for method handles
#[derive(Debug, Default)]
pub struct MethodInterner {
    handles: DashMap<MethodRef, MethodHandle, FxBuildHasher>,
}

impl MethodInterner {
    pub fn new() -> Self {
        Self {
            handles: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Return the canonical handle for `method`, creating it on first use
    pub fn intern(&self, method: MethodRef) -> MethodHandle {
        if let Some(existing) = self.handles.get(&method) {
            return existing.value().clone();
        }
        let key = method.clone();
        self.handles
            .entry(method)
            .or_insert_with(|| MethodHandle::new(key))
            .value()
            .clone()
    }

    /// Look up without creating
    pub fn get(&self, method: &MethodRef) -> Option<MethodHandle> {
        self.handles.get(method).map(|h| h.value().clone())
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{LanguageTag, Loader, MethodSignature, TypeName};
    use rayon::prelude::*;

    fn method_ref(name: &str) -> MethodRef {
        MethodRef::new(
            Loader::new("Source", LanguageTag::Java),
            TypeName::class("pkg/Foo"),
            name,
            MethodSignature::parse("()V"),
        )
    }

    #[test]
    fn test_intern_returns_shared_handle() {
        let interner = MethodInterner::new();
        let a = interner.intern(method_ref("bar"));
        let b = interner.intern(method_ref("bar"));
        assert!(a.ptr_eq(&b));
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn test_get_does_not_create() {
        let interner = MethodInterner::new();
        assert!(interner.get(&method_ref("bar")).is_none());
        assert!(interner.is_empty());
    }

    #[test]
    fn test_concurrent_interning_converges() {
        let interner = MethodInterner::new();
        let handles: Vec<MethodHandle> = (0..256)
            .into_par_iter()
            .map(|i| interner.intern(method_ref(if i % 2 == 0 { "even" } else { "odd" })))
            .collect();

        assert_eq!(interner.len(), 2);
        let even = interner.get(&method_ref("even")).unwrap();
        for (i, h) in handles.iter().enumerate() {
            if i % 2 == 0 {
                assert!(h.ptr_eq(&even));
            }
        }
    }
}
