//! Call graph query engine

pub mod query;

pub use query::{all_declared_methods, find_edge_between, has_edge, nodes_for, NodeLookup};
