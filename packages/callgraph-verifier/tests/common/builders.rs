//! Test data builders

use callgraph_verifier::features::call_graph::{
    AnalysisScope, BuildError, CallGraph, CallGraphBuilder, ContextId,
};
use callgraph_verifier::features::descriptor::resolve_text;
use callgraph_verifier::features::ssa::MethodIr;
use callgraph_verifier::features::type_universe::TypeUniverse;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct NodeSpec {
    descriptor: String,
    context: ContextId,
    ir: Option<Arc<MethodIr>>,
}

/// Declarative call graph, rebuilt on every `build`
///
/// Nodes are referenced by their position in insertion order.
#[derive(Debug, Clone, Default)]
pub struct GraphSpec {
    nodes: Vec<NodeSpec>,
    edges: Vec<(usize, usize)>,
}

impl GraphSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node in the default context; returns its position
    pub fn node(&mut self, descriptor: &str) -> usize {
        self.node_in(descriptor, ContextId::EVERYWHERE)
    }

    pub fn node_in(&mut self, descriptor: &str, context: ContextId) -> usize {
        self.nodes.push(NodeSpec {
            descriptor: descriptor.to_string(),
            context,
            ir: None,
        });
        self.nodes.len() - 1
    }

    pub fn node_with_ir(&mut self, descriptor: &str, ir: MethodIr) -> usize {
        let pos = self.node(descriptor);
        self.nodes[pos].ir = Some(Arc::new(ir));
        pos
    }

    pub fn edge(&mut self, caller: usize, callee: usize) -> &mut Self {
        self.edges.push((caller, callee));
        self
    }
}

impl CallGraphBuilder for GraphSpec {
    fn build(&self, scope: &AnalysisScope, universe: &TypeUniverse) -> Result<CallGraph, BuildError> {
        if scope.cancellation.is_cancelled() {
            return Err(BuildError::Cancelled);
        }
        let mut graph = CallGraph::new();
        let mut ids = Vec::with_capacity(self.nodes.len());
        for spec in &self.nodes {
            let handle =
                resolve_text(&spec.descriptor, universe).map_err(|e| BuildError::internal(e.to_string()))?;
            let id = graph.find_or_create_node(&handle, spec.context);
            if let Some(ir) = &spec.ir {
                graph.set_ir(id, ir.clone());
            }
            ids.push(id);
        }
        for &(caller, callee) in &self.edges {
            graph.add_edge(ids[caller], ids[callee]);
        }
        Ok(graph)
    }
}
