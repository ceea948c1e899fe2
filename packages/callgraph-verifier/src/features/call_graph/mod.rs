//! Call Graph
//!
//! Read-only view of the call graph built by an external analyzer, plus the
//! query engine used by the verifiers.
//!
//! # Hexagonal Architecture
//! ```text
//! ports/           CallGraphBuilder (the external analyzer)
//! domain/          CallGraph, CGNode, NodeId, ContextId, AnalysisScope, BuildError
//! application/     nodes_for / has_edge / all_declared_methods
//! infrastructure/  SnapshotCallGraphBuilder (JSON analyzer output)
//! ```
//!
//! Under context-sensitive analysis one method may own several nodes. The
//! graph keeps an explicit `method → [node]` index next to the node arena
//! instead of back-pointers.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{all_declared_methods, find_edge_between, has_edge, nodes_for, NodeLookup};
pub use domain::{
    AnalysisScope, BuildError, CGNode, CallGraph, CancellationToken, ContextId, Entrypoint, NodeId,
};
pub use infrastructure::{AnalyzerSnapshot, SnapshotCallGraphBuilder};
pub use ports::CallGraphBuilder;
