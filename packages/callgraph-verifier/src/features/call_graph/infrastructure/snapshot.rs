//! Analyzer snapshot adapter
//!
//! Loads the output of an external analyzer run from JSON: loaders, declared
//! classes, call-graph nodes with their SSA IR and debug info, and call edges.
//! Node methods are written as descriptor text and resolved like any
//! assertion, so the snapshot and the assertions agree on handle identity.
//!
//! ```json
//! {
//!   "loaders": [{"name": "Source", "language": "java"}],
//!   "classes": [{"loader": "Source", "name": "A",
//!                "methods": [{"name": "m", "signature": "()V"}]}],
//!   "entrypoints": [{"loader": "Source", "class": "A"}],
//!   "nodes": [{"id": 0, "method": "Source#A#m#()V",
//!              "ir": {"instructions": [{"index": 0, "opcode": "const", "defs": [3]}],
//!                     "lines": [[0, 4]],
//!                     "local_names": [{"index": 0, "value": 3, "names": ["x"]}]}}],
//!   "edges": [{"caller": 0, "callee": 0}]
//! }
//! ```

use crate::errors::Result;
use crate::features::call_graph::domain::{
    AnalysisScope, BuildError, CallGraph, ContextId, Entrypoint, NodeId,
};
use crate::features::call_graph::ports::CallGraphBuilder;
use crate::features::descriptor::resolve_text;
use crate::features::ssa::domain::{MethodIr, SourceLine, SsaInstruction, ValueNumber};
use crate::features::type_universe::{ClassKind, TypeUniverse, UniverseError};
use crate::shared::models::LanguageTag;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderSnapshot {
    pub name: String,
    #[serde(default)]
    pub language: LanguageTag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSnapshot {
    pub name: String,
    pub signature: String,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSnapshot {
    pub loader: String,
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub methods: Vec<MethodSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalNamesSnapshot {
    pub index: usize,
    pub value: ValueNumber,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodIrSnapshot {
    #[serde(default)]
    pub instructions: Vec<SsaInstruction>,
    /// `(instruction index, source line)` pairs
    #[serde(default)]
    pub lines: Vec<(usize, SourceLine)>,
    #[serde(default)]
    pub local_names: Vec<LocalNamesSnapshot>,
}

impl MethodIrSnapshot {
    /// Rebuild the IR; instruction indexes at or past
    /// the IR slot limit are rejected
    pub fn to_ir(&self) -> std::result::Result<MethodIr, BuildError> {
        let mut builder = MethodIr::builder();
        for inst in &self.instructions {
            builder
                .push(inst.clone())
                .map_err(|e| BuildError::internal(e.to_string()))?;
        }
        let debug = builder.debug_info_mut();
        for &(index, line) in &self.lines {
            debug.set_line(index, line);
        }
        for entry in &self.local_names {
            debug.add_local_names(entry.index, entry.value, entry.names.iter().cloned());
        }
        builder.build().map_err(|e| BuildError::internal(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Snapshot-local id referenced by edges
    pub id: u32,
    /// Descriptor text `loader#type#name#signature`
    pub method: String,
    #[serde(default)]
    pub context: ContextId,
    #[serde(default)]
    pub ir: Option<MethodIrSnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSnapshot {
    pub caller: u32,
    pub callee: u32,
}

/// Serialized analyzer output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerSnapshot {
    #[serde(default)]
    pub loaders: Vec<LoaderSnapshot>,
    #[serde(default)]
    pub classes: Vec<ClassSnapshot>,
    #[serde(default)]
    pub entrypoints: Vec<Entrypoint>,
    #[serde(default)]
    pub nodes: Vec<NodeSnapshot>,
    #[serde(default)]
    pub edges: Vec<EdgeSnapshot>,
}

impl AnalyzerSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Type universe described by the snapshot's loaders and classes
    pub fn universe(&self) -> std::result::Result<TypeUniverse, UniverseError> {
        let mut universe = TypeUniverse::new();
        for loader in &self.loaders {
            universe.register_loader(&loader.name, loader.language)?;
        }
        for class in &self.classes {
            universe.declare_class(&class.loader, &class.name, class.kind)?;
            for method in &class.methods {
                universe.declare_method(
                    &class.loader,
                    &class.name,
                    &method.name,
                    &method.signature,
                    method.is_abstract,
                )?;
            }
        }
        Ok(universe)
    }

    /// Scope rooted at the snapshot's recorded entrypoints
    pub fn default_scope(&self) -> AnalysisScope {
        AnalysisScope {
            entrypoints: self.entrypoints.clone(),
            ..AnalysisScope::default()
        }
    }
}

/// `CallGraphBuilder` replaying a recorded analyzer run
#[derive(Debug, Clone)]
pub struct SnapshotCallGraphBuilder {
    snapshot: AnalyzerSnapshot,
}

impl SnapshotCallGraphBuilder {
    pub fn new(snapshot: AnalyzerSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &AnalyzerSnapshot {
        &self.snapshot
    }

    fn check_cancelled(scope: &AnalysisScope) -> std::result::Result<(), BuildError> {
        if scope.cancellation.is_cancelled() {
            Err(BuildError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl CallGraphBuilder for SnapshotCallGraphBuilder {
    fn build(
        &self,
        scope: &AnalysisScope,
        universe: &TypeUniverse,
    ) -> std::result::Result<CallGraph, BuildError> {
        Self::check_cancelled(scope)?;

        let mut entry_methods = Vec::with_capacity(scope.entrypoints.len());
        for ep in &scope.entrypoints {
            let handle = resolve_text(&ep.descriptor(), universe)
                .map_err(|e| BuildError::InvalidEntrypoint(e.to_string()))?;
            if !universe.contains_method(&handle) {
                return Err(BuildError::InvalidEntrypoint(format!(
                    "{} is not declared",
                    ep.descriptor()
                )));
            }
            entry_methods.push(handle);
        }

        let mut graph = CallGraph::new();
        let mut ids: FxHashMap<u32, NodeId> = FxHashMap::default();
        for node in &self.snapshot.nodes {
            Self::check_cancelled(scope)?;
            let handle = resolve_text(&node.method, universe)
                .map_err(|e| BuildError::internal(format!("node {}: {}", node.id, e)))?;
            if !universe.contains_method(&handle) {
                return Err(BuildError::UndeclaredMethod(handle.to_string()));
            }
            if ids.contains_key(&node.id) {
                return Err(BuildError::internal(format!("duplicate node id {}", node.id)));
            }
            if graph.find_node(&handle, node.context).is_some() {
                return Err(BuildError::internal(format!(
                    "duplicate node for {} in {}",
                    handle, node.context
                )));
            }
            let ir = node
                .ir
                .as_ref()
                .map(|ir| {
                    ir.to_ir()
                        .map_err(|e| BuildError::internal(format!("node {}: {}", node.id, e)))
                })
                .transpose()?;
            let id = graph.find_or_create_node(&handle, node.context);
            ids.insert(node.id, id);
            if let Some(ir) = ir {
                graph.set_ir(id, Arc::new(ir));
            }
        }

        for edge in &self.snapshot.edges {
            let lookup = |sid: u32| {
                ids.get(&sid)
                    .copied()
                    .ok_or_else(|| BuildError::internal(format!("edge references unknown node {}", sid)))
            };
            graph.add_edge(lookup(edge.caller)?, lookup(edge.callee)?);
        }

        for handle in &entry_methods {
            let nodes = graph.nodes_of(handle).to_vec();
            if nodes.is_empty() {
                debug!("entrypoint {} has no call graph node", handle);
            }
            for node in nodes {
                graph.add_entrypoint(node);
            }
        }

        info!(
            "call graph built: {} nodes, {} edges, {} entrypoints",
            graph.node_count(),
            graph.edge_count(),
            graph.entrypoints().len()
        );
        Ok(graph)
    }
}
