//! Domain models for the type universe

pub mod class_info;
pub mod errors;
pub mod universe;

pub use class_info::{ClassInfo, ClassKind, DeclaredMethod};
pub use errors::{UniverseError, UnknownLoader};
pub use universe::TypeUniverse;
