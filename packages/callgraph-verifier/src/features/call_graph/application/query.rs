//! Call graph queries used by verification
//!
//! Context-sensitive graphs may hold several nodes per method. Edge checks
//! accept any candidate source node reaching any candidate target node, so
//! the verifier never needs to understand the analyzer's context model.

use crate::features::call_graph::domain::{CallGraph, NodeId};
use crate::features::type_universe::{TypeUniverse, UnknownLoader};
use crate::shared::models::MethodHandle;

/// Nodes found for one method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLookup {
    pub method: MethodHandle,
    pub nodes: Vec<NodeId>,
}

impl NodeLookup {
    /// Method absent from the graph (unreachable or never declared)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// More than one context produced a node
    pub fn is_ambiguous(&self) -> bool {
        self.nodes.len() > 1
    }

    /// An arbitrary node, when one is enough
    pub fn representative(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }
}

/// Every node whose method equals `method`
pub fn nodes_for(method: &MethodHandle, graph: &CallGraph) -> NodeLookup {
    NodeLookup {
        method: method.clone(),
        nodes: graph.nodes_of(method).to_vec(),
    }
}

/// Whether `src → dst` is a direct edge
pub fn has_edge(src: NodeId, dst: NodeId, graph: &CallGraph) -> bool {
    graph.contains_edge(src, dst)
}

/// First `(src, dst)` pair among the candidates joined by a direct edge
pub fn find_edge_between(
    srcs: &[NodeId],
    dsts: &[NodeId],
    graph: &CallGraph,
) -> Option<(NodeId, NodeId)> {
    srcs.iter().find_map(|&s| {
        dsts.iter()
            .find(|&&d| has_edge(s, d, graph))
            .map(|&d| (s, d))
    })
}

/// Every method declared by a non-interface class of `loader`, abstract
/// methods included
pub fn all_declared_methods(
    universe: &TypeUniverse,
    loader: &str,
) -> Result<Vec<MethodHandle>, UnknownLoader> {
    Ok(universe
        .iterate_declared_methods(loader)?
        .filter(|m| !m.is_interface_member)
        .map(|m| m.handle.clone())
        .collect())
}
