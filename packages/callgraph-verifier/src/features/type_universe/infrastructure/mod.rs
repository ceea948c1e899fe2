//! Infrastructure for the type universe

pub mod interner;

pub use interner::MethodInterner;
