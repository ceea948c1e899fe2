//! Descriptor resolution use cases

pub mod resolver;

pub use resolver::{resolve, resolve_text, ResolveError};
