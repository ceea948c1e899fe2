//! Ports (Interfaces) for call graph construction
//!
//! The analyzer itself lives outside this crate. Anything that can produce a
//! finished `CallGraph` for a scope plugs in here.

use crate::features::call_graph::domain::{AnalysisScope, BuildError, CallGraph};
use crate::features::type_universe::TypeUniverse;

/// External call-graph builder
///
/// Must return a complete graph or fail; partial graphs are never consumed.
/// Every node's method must resolve within `universe`.
pub trait CallGraphBuilder: Send + Sync {
    fn build(&self, scope: &AnalysisScope, universe: &TypeUniverse)
        -> Result<CallGraph, BuildError>;
}

impl<B: CallGraphBuilder + ?Sized> CallGraphBuilder for Box<B> {
    fn build(
        &self,
        scope: &AnalysisScope,
        universe: &TypeUniverse,
    ) -> Result<CallGraph, BuildError> {
        (**self).build(scope, universe)
    }
}
