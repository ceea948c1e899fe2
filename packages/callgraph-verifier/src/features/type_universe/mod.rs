//! Type Universe
//!
//! The closed set of loaders, classes and declared methods visible to one
//! verification run. Owns the loader registry and the method-handle interner.
//!
//! # Hexagonal Architecture
//! ```text
//! domain/          TypeUniverse, ClassInfo, DeclaredMethod, errors
//! infrastructure/  MethodInterner (concurrent handle interning)
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{ClassInfo, ClassKind, DeclaredMethod, TypeUniverse, UniverseError, UnknownLoader};
pub use infrastructure::MethodInterner;
