//! SSA scanning infrastructure

pub mod binding_scan;

pub use binding_scan::{find_binding, BindingSite};
