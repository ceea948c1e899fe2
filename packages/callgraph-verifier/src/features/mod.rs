//! Feature slices, ordered by dependency

pub mod call_graph;
pub mod descriptor;
pub mod ssa;
pub mod type_universe;
pub mod verification;
