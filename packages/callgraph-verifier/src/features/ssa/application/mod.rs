//! Variable binding verification use cases

pub mod binding;

pub use binding::{is_bound, BindingVerdict, BindingVerifier};
