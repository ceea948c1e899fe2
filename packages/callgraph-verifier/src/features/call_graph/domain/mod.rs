//! Call graph domain models

pub mod call_graph;
pub mod errors;
pub mod node;
pub mod scope;

pub use call_graph::CallGraph;
pub use errors::BuildError;
pub use node::{CGNode, ContextId, NodeId};
pub use scope::{AnalysisScope, CancellationToken, Entrypoint};
