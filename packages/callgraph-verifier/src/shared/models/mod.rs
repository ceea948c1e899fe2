//! Shared domain models
//!
//! Value types that cross feature boundaries:
//! - LanguageTag: analysis language a loader belongs to
//! - Loader: named partition of the type universe
//! - TypeName: sigiled internal type name (`Lpkg/Foo`)
//! - MethodSignature: canonical method signature
//! - MethodHandle: canonical, value-comparable method identity

pub mod language;
pub mod loader;
pub mod method_handle;
pub mod method_signature;
pub mod type_name;

pub use language::LanguageTag;
pub use loader::{Loader, PRIMORDIAL_LOADER, SOURCE_LOADER};
pub use method_handle::{MethodHandle, MethodRef};
pub use method_signature::{MethodSignature, TypeDescriptor};
pub use type_name::TypeName;
