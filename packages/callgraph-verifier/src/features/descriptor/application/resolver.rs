//! Method reference resolver
//!
//! Descriptor fields → loader lookup → sigiled type name → interned handle.
//! The handle's language always comes from the resolved loader.

use crate::features::descriptor::domain::{parse, DescriptorError, MethodDescriptorFields};
use crate::features::type_universe::{TypeUniverse, UnknownLoader};
use crate::shared::models::{MethodHandle, MethodSignature, TypeName};
use thiserror::Error;

/// Failure to turn descriptor text into a method handle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Broken precondition: the descriptor names a loader the universe lacks
    #[error(transparent)]
    UnknownLoader(#[from] UnknownLoader),
}

impl ResolveError {
    /// Whether this signals a caller misconfiguration rather than bad input text
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::UnknownLoader(_))
    }
}

/// Resolve parsed fields against a universe
pub fn resolve(
    fields: &MethodDescriptorFields,
    universe: &TypeUniverse,
) -> Result<MethodHandle, UnknownLoader> {
    let loader = universe.find_loader(&fields.loader)?;
    let type_name = TypeName::class(&fields.type_name);
    Ok(universe.method_handle(
        loader,
        type_name,
        &fields.method_name,
        MethodSignature::parse(&fields.signature),
    ))
}

/// Parse then resolve descriptor text
pub fn resolve_text(text: &str, universe: &TypeUniverse) -> Result<MethodHandle, ResolveError> {
    let fields = parse(text)?;
    Ok(resolve(&fields, universe)?)
}
