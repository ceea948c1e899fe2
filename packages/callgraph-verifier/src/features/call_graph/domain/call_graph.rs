//! Call graph storage
//!
//! Directed multigraph over `CGNode`s backed by petgraph. Parallel edges are
//! allowed but carry no meaning: verification only asks whether an edge
//! exists. Built once by the analyzer adapter, read-only afterwards.

use super::node::{CGNode, ContextId, NodeId};
use crate::features::ssa::domain::MethodIr;
use crate::shared::models::MethodHandle;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::sync::Arc;

/// Call graph with a method → nodes index
#[derive(Debug, Default)]
pub struct CallGraph {
    graph: DiGraph<CGNode, ()>,
    /// Every node of a method, in creation order
    method_index: FxHashMap<MethodHandle, Vec<NodeId>>,
    /// (method, context) → node, for find-or-create
    context_index: FxHashMap<(MethodHandle, ContextId), NodeId>,
    entrypoints: Vec<NodeId>,
}

impl CallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════════

    /// Node for `(method, context)`, created on first request
    pub fn find_or_create_node(&mut self, method: &MethodHandle, context: ContextId) -> NodeId {
        if let Some(&id) = self.context_index.get(&(method.clone(), context)) {
            return id;
        }
        let next = NodeId::from_index(NodeIndex::new(self.graph.node_count()));
        let idx = self.graph.add_node(CGNode {
            id: next,
            method: method.clone(),
            context,
            ir: None,
        });
        let id = NodeId::from_index(idx);
        debug_assert_eq!(id, next);
        self.method_index.entry(method.clone()).or_default().push(id);
        self.context_index.insert((method.clone(), context), id);
        id
    }

    /// Attach the IR built for a node
    pub fn set_ir(&mut self, node: NodeId, ir: Arc<MethodIr>) {
        if let Some(n) = self.graph.node_weight_mut(node.index()) {
            n.ir = Some(ir);
        }
    }

    /// Record a call edge; repeated edges are kept but ignored by queries
    pub fn add_edge(&mut self, caller: NodeId, callee: NodeId) {
        self.graph.add_edge(caller.index(), callee.index(), ());
    }

    pub fn add_entrypoint(&mut self, node: NodeId) {
        if !self.entrypoints.contains(&node) {
            self.entrypoints.push(node);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════════

    pub fn node(&self, id: NodeId) -> Option<&CGNode> {
        self.graph.node_weight(id.index())
    }

    pub fn nodes(&self) -> impl Iterator<Item = &CGNode> + '_ {
        self.graph.node_weights()
    }

    /// Nodes representing `method`; empty when the method is absent
    pub fn nodes_of(&self, method: &MethodHandle) -> &[NodeId] {
        self.method_index
            .get(method)
            .map(|nodes| nodes.as_slice())
            .unwrap_or(&[])
    }

    /// Node already created for `(method, context)`
    pub fn find_node(&self, method: &MethodHandle, context: ContextId) -> Option<NodeId> {
        self.context_index.get(&(method.clone(), context)).copied()
    }

    /// Whether a direct edge `src → dst` exists (direction matters)
    pub fn contains_edge(&self, src: NodeId, dst: NodeId) -> bool {
        self.graph.contains_edge(src.index(), dst.index())
    }

    /// Distinct successors of a node
    pub fn successors(&self, node: NodeId) -> Vec<NodeId> {
        self.neighbors(node, Direction::Outgoing)
    }

    /// Distinct predecessors of a node
    pub fn predecessors(&self, node: NodeId) -> Vec<NodeId> {
        self.neighbors(node, Direction::Incoming)
    }

    fn neighbors(&self, node: NodeId, dir: Direction) -> Vec<NodeId> {
        let mut seen = FxHashSet::default();
        let mut out: Vec<NodeId> = self
            .graph
            .neighbors_directed(node.index(), dir)
            .map(NodeId::from_index)
            .filter(|id| seen.insert(*id))
            .collect();
        out.sort();
        out
    }

    pub fn entrypoints(&self) -> &[NodeId] {
        &self.entrypoints
    }

    /// Methods that own at least one node
    pub fn methods(&self) -> impl Iterator<Item = &MethodHandle> + '_ {
        self.method_index.keys()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Edge count including parallel edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl fmt::Display for CallGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            writeln!(f, "{}", node)?;
            for succ in self.successors(node.id) {
                if let Some(callee) = self.node(succ) {
                    writeln!(f, " - invokes {}", callee.method)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{LanguageTag, Loader, MethodRef, MethodSignature, TypeName};

    fn handle(ty: &str, name: &str) -> MethodHandle {
        MethodHandle::new(MethodRef::new(
            Loader::new("Source", LanguageTag::Java),
            TypeName::class(ty),
            name,
            MethodSignature::parse("()V"),
        ))
    }

    #[test]
    fn test_find_or_create_is_idempotent() {
        let mut g = CallGraph::new();
        let m = handle("A", "m");
        let a = g.find_or_create_node(&m, ContextId::EVERYWHERE);
        let b = g.find_or_create_node(&m, ContextId::EVERYWHERE);
        assert_eq!(a, b);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.nodes_of(&m), &[a]);
        assert_eq!(g.find_node(&m, ContextId::EVERYWHERE), Some(a));
        assert_eq!(g.find_node(&m, ContextId(3)), None);
    }

    #[test]
    fn test_contexts_create_distinct_nodes() {
        let mut g = CallGraph::new();
        let m = handle("A", "m");
        let a = g.find_or_create_node(&m, ContextId(1));
        let b = g.find_or_create_node(&m, ContextId(2));
        assert_ne!(a, b);
        assert_eq!(g.nodes_of(&m), &[a, b]);
    }

    #[test]
    fn test_edges_are_directed() {
        let mut g = CallGraph::new();
        let a = g.find_or_create_node(&handle("A", "m"), ContextId::EVERYWHERE);
        let b = g.find_or_create_node(&handle("B", "n"), ContextId::EVERYWHERE);
        g.add_edge(a, b);
        assert!(g.contains_edge(a, b));
        assert!(!g.contains_edge(b, a));
    }

    #[test]
    fn test_parallel_edges_collapse_in_successors() {
        let mut g = CallGraph::new();
        let a = g.find_or_create_node(&handle("A", "m"), ContextId::EVERYWHERE);
        let b = g.find_or_create_node(&handle("B", "n"), ContextId::EVERYWHERE);
        g.add_edge(a, b);
        g.add_edge(a, b);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.successors(a), vec![b]);
        assert_eq!(g.predecessors(b), vec![a]);
    }

    #[test]
    fn test_absent_method_has_no_nodes() {
        let g = CallGraph::new();
        assert!(g.nodes_of(&handle("A", "m")).is_empty());
    }

    #[test]
    fn test_display_lists_callees() {
        let mut g = CallGraph::new();
        let a = g.find_or_create_node(&handle("A", "m"), ContextId::EVERYWHERE);
        let b = g.find_or_create_node(&handle("B", "n"), ContextId::EVERYWHERE);
        g.add_edge(a, b);
        let text = g.to_string();
        assert!(text.contains("Node: < Source, LA, m()V > Context: Everywhere"));
        assert!(text.contains(" - invokes < Source, LB, n()V >"));
    }
}
