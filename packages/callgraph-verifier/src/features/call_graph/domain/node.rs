//! Call graph nodes

use crate::features::ssa::domain::MethodIr;
use crate::shared::models::MethodHandle;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Stable id of a node inside one call graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> NodeIndex {
        NodeIndex::new(self.0 as usize)
    }

    #[inline]
    pub(crate) fn from_index(idx: NodeIndex) -> Self {
        Self(idx.index() as u32)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Calling context distinguishing nodes of the same method
///
/// Opaque to the verifier; `EVERYWHERE` is the single context of a
/// context-insensitive analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextId(pub u32);

impl ContextId {
    pub const EVERYWHERE: ContextId = ContextId(0);
}

impl Default for ContextId {
    fn default() -> Self {
        Self::EVERYWHERE
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::EVERYWHERE {
            write!(f, "Everywhere")
        } else {
            write!(f, "Context({})", self.0)
        }
    }
}

/// A (method, context) pair in the call graph, with the IR built for it
#[derive(Debug, Clone)]
pub struct CGNode {
    pub id: NodeId,
    pub method: MethodHandle,
    pub context: ContextId,
    pub ir: Option<Arc<MethodIr>>,
}

impl CGNode {
    pub fn ir(&self) -> Option<&MethodIr> {
        self.ir.as_deref()
    }
}

impl fmt::Display for CGNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node: {} Context: {}", self.method, self.context)
    }
}
