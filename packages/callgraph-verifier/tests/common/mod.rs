//! Common test utilities for callgraph-verifier
//!
//! Shared universes, IR fixtures and a declarative call-graph builder.

#![allow(dead_code)]

mod builders;
mod fixtures;

pub use builders::*;
pub use fixtures::*;
