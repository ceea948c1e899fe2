//! Variable binding verifier
//!
//! Checks `(method, variable, line)` against every call-graph node of the
//! method. One confirming node is enough: contexts should not change the SSA
//! form, and requiring agreement would over-constrain the analyzer.

use crate::features::call_graph::domain::{CallGraph, NodeId};
use crate::features::ssa::domain::SourceLine;
use crate::features::ssa::infrastructure::{find_binding, BindingSite};
use crate::shared::models::MethodHandle;
use tracing::{debug, warn};

/// Outcome of one binding check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingVerdict {
    Bound { node: NodeId, site: BindingSite },
    /// Every candidate node was scanned without a match
    Unbound {
        nodes_checked: usize,
        nodes_without_ir: Vec<NodeId>,
    },
    /// The method has no node in the graph
    MethodUnreachable,
}

impl BindingVerdict {
    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Bound { .. })
    }
}

/// Binding checks against one call graph
#[derive(Debug, Clone, Copy)]
pub struct BindingVerifier<'g> {
    graph: &'g CallGraph,
}

impl<'g> BindingVerifier<'g> {
    pub fn new(graph: &'g CallGraph) -> Self {
        Self { graph }
    }

    pub fn check(&self, method: &MethodHandle, variable: &str, line: SourceLine) -> BindingVerdict {
        let nodes = self.graph.nodes_of(method);
        if nodes.is_empty() {
            debug!("{} unreachable, cannot bind {}", method, variable);
            return BindingVerdict::MethodUnreachable;
        }
        self.check_nodes(nodes, variable, line)
    }

    /// Scan the given nodes in order; the first confirming node wins
    pub fn check_nodes(&self, nodes: &[NodeId], variable: &str, line: SourceLine) -> BindingVerdict {
        if nodes.is_empty() {
            return BindingVerdict::MethodUnreachable;
        }
        debug!("check for {} defined at {}", variable, line);

        let mut nodes_without_ir = Vec::new();
        for &id in nodes {
            let Some(node) = self.graph.node(id) else {
                continue;
            };
            let Some(ir) = node.ir() else {
                warn!("no IR for {}", node);
                nodes_without_ir.push(id);
                continue;
            };
            if let Some(site) = find_binding(ir, variable, line) {
                return BindingVerdict::Bound { node: id, site };
            }
        }
        BindingVerdict::Unbound {
            nodes_checked: nodes.len(),
            nodes_without_ir,
        }
    }
}

/// Whether `variable` is defined at `line` in some node of `method`
pub fn is_bound(method: &MethodHandle, variable: &str, line: SourceLine, graph: &CallGraph) -> bool {
    BindingVerifier::new(graph).check(method, variable, line).is_bound()
}
