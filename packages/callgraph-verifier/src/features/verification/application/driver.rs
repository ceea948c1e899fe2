//! Verification driver
//!
//! Build → Enumerate → Assert → Report, strictly in sequence. Each phase
//! consumes the complete output of the previous one.

use crate::config::{ContextPolicy, VerifierConfig};
use crate::errors::Result;
use crate::features::call_graph::{
    find_edge_between, nodes_for, AnalysisScope, CallGraph, CallGraphBuilder, NodeLookup,
};
use crate::features::descriptor::{resolve_text, ResolveError};
use crate::features::ssa::{BindingVerdict, BindingVerifier};
use crate::features::type_universe::{TypeUniverse, UniverseError};
use crate::features::verification::domain::{
    Assertion, AssertionOutcome, BindingAssertion, Diagnostic, DiagnosticKind, EdgeAssertion,
    IrDump, PhaseTimings, VerificationReport,
};
use crate::shared::models::MethodHandle;
use std::time::Instant;
use tracing::{debug, error, info, info_span, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of the reachability audit
#[derive(Debug, Default)]
struct Enumeration {
    reachable: Vec<MethodHandle>,
    unreachable: Vec<MethodHandle>,
    abstract_methods: Vec<MethodHandle>,
    ir_dumps: Vec<IrDump>,
}

/// Runs verification sessions against one call-graph builder
#[derive(Debug, Clone)]
pub struct VerificationDriver<B> {
    builder: B,
    config: VerifierConfig,
}

impl<B: CallGraphBuilder> VerificationDriver<B> {
    pub fn new(builder: B, config: VerifierConfig) -> Self {
        Self { builder, config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Run one session
    ///
    /// Fails only when the configuration does not fit the universe or the
    /// call graph cannot be built. Assertion failures are part of the report.
    pub fn run(
        &self,
        scope: &AnalysisScope,
        universe: &TypeUniverse,
        assertions: &[Assertion],
    ) -> Result<VerificationReport> {
        self.config.validate()?;
        universe
            .find_loader(&self.config.source_loader)
            .map_err(UniverseError::from)?;

        let mut timings = PhaseTimings::default();

        // Phase 1: Build
        let start = Instant::now();
        let graph = {
            let _span = info_span!("build", entrypoints = scope.entrypoints.len()).entered();
            let graph = self.builder.build(scope, universe).map_err(|e| {
                error!("call graph build failed: {}", e);
                e
            })?;
            debug!("call graph:\n{}", graph);
            graph
        };
        timings.build_ms = start.elapsed().as_millis() as u64;

        // Phase 2: Enumerate
        let start = Instant::now();
        let enumeration = {
            let _span = info_span!("enumerate", loader = %self.config.source_loader).entered();
            self.enumerate(&graph, universe)?
        };
        timings.enumerate_ms = start.elapsed().as_millis() as u64;

        // Phase 3: Assert
        let start = Instant::now();
        let outcomes = {
            let _span = info_span!("assert", count = assertions.len()).entered();
            self.evaluate_all(assertions, &graph, universe)
        };
        timings.assert_ms = start.elapsed().as_millis() as u64;

        // Phase 4: Report
        let _span = info_span!("report").entered();
        let mut report = VerificationReport::new(
            self.config.strict_reachability,
            enumeration.reachable,
            enumeration.unreachable,
            enumeration.abstract_methods,
            outcomes,
        );
        report.ir_dumps = enumeration.ir_dumps;
        report.timings = timings;

        for m in &report.unreachable {
            if report.strict_reachability {
                error!("unreachable method {}", m);
            } else {
                info!("unreachable method {}", m);
            }
        }
        info!(
            "verification {}: {}/{} assertions passed, {} unreachable methods",
            if report.passed { "passed" } else { "failed" },
            report.passed_count(),
            report.outcomes.len(),
            report.unreachable.len()
        );
        Ok(report)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Enumerate
    // ═══════════════════════════════════════════════════════════════════════

    fn enumerate(&self, graph: &CallGraph, universe: &TypeUniverse) -> Result<Enumeration> {
        let mut out = Enumeration::default();
        let declared = universe
            .iterate_declared_methods(&self.config.source_loader)
            .map_err(UniverseError::from)?;

        for method in declared.filter(|m| !m.is_interface_member) {
            if method.is_abstract {
                out.abstract_methods.push(method.handle.clone());
                continue;
            }
            let nodes = graph.nodes_of(&method.handle);
            if nodes.is_empty() {
                out.unreachable.push(method.handle.clone());
                continue;
            }
            out.reachable.push(method.handle.clone());

            if self.config.dump_ir {
                let ir = nodes
                    .iter()
                    .filter_map(|&id| graph.node(id))
                    .find_map(|n| n.ir());
                if let Some(ir) = ir {
                    let text = ir.to_string();
                    debug!("IR of {}:\n{}", method.handle, text);
                    out.ir_dumps.push(IrDump {
                        method: method.handle.clone(),
                        text,
                    });
                }
            }
        }

        info!(
            "{} reachable, {} unreachable, {} abstract",
            out.reachable.len(),
            out.unreachable.len(),
            out.abstract_methods.len()
        );
        Ok(out)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Assert
    // ═══════════════════════════════════════════════════════════════════════

    fn evaluate_all(
        &self,
        assertions: &[Assertion],
        graph: &CallGraph,
        universe: &TypeUniverse,
    ) -> Vec<AssertionOutcome> {
        if self.config.parallel_assertions {
            return self.evaluate_parallel(assertions, graph, universe);
        }
        assertions
            .iter()
            .map(|a| self.evaluate(a, graph, universe))
            .collect()
    }

    /// Rayon evaluation; `collect` keeps input order
    #[cfg(feature = "parallel")]
    fn evaluate_parallel(
        &self,
        assertions: &[Assertion],
        graph: &CallGraph,
        universe: &TypeUniverse,
    ) -> Vec<AssertionOutcome> {
        assertions
            .par_iter()
            .map(|a| self.evaluate(a, graph, universe))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_parallel(
        &self,
        assertions: &[Assertion],
        graph: &CallGraph,
        universe: &TypeUniverse,
    ) -> Vec<AssertionOutcome> {
        debug!("built without the parallel feature, evaluating sequentially");
        assertions
            .iter()
            .map(|a| self.evaluate(a, graph, universe))
            .collect()
    }

    /// Evaluate one assertion in isolation
    pub fn evaluate(
        &self,
        assertion: &Assertion,
        graph: &CallGraph,
        universe: &TypeUniverse,
    ) -> AssertionOutcome {
        let mut diagnostics = Vec::new();
        match assertion {
            Assertion::Edge(edge) => self.check_edge(edge, graph, universe, &mut diagnostics),
            Assertion::Binding(b) => self.check_binding(b, graph, universe, &mut diagnostics),
        }
        let outcome = AssertionOutcome::from_diagnostics(assertion.clone(), diagnostics);
        if outcome.passed {
            debug!("passed: {}", assertion);
        } else {
            warn!("failed: {}: {}", assertion, outcome.message());
        }
        outcome
    }

    fn check_edge(
        &self,
        edge: &EdgeAssertion,
        graph: &CallGraph,
        universe: &TypeUniverse,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let Some(src) = self.lookup(&edge.src, graph, universe, diagnostics) else {
            return;
        };
        for dst_text in &edge.dsts {
            let Some(dst) = self.lookup(dst_text, graph, universe, diagnostics) else {
                continue;
            };
            match find_edge_between(&src.nodes, &dst.nodes, graph) {
                Some((s, d)) => debug!("edge {} -> {}", s, d),
                None => diagnostics.push(Diagnostic::error(
                    DiagnosticKind::MissingEdge,
                    format!(
                        "Missing edge: {} -> {}",
                        src.method.short_name(),
                        dst.method.short_name()
                    ),
                )),
            }
        }
    }

    fn check_binding(
        &self,
        binding: &BindingAssertion,
        graph: &CallGraph,
        universe: &TypeUniverse,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let Some(lookup) = self.lookup(&binding.method, graph, universe, diagnostics) else {
            return;
        };
        let verdict = BindingVerifier::new(graph).check_nodes(
            &lookup.nodes,
            &binding.variable,
            binding.line,
        );
        match verdict {
            BindingVerdict::Bound { node, site } => {
                debug!(
                    "{} bound to {} at instruction {} in {}",
                    binding.variable, site.value, site.instruction_index, node
                );
            }
            BindingVerdict::Unbound {
                nodes_without_ir, ..
            } => {
                for id in nodes_without_ir {
                    diagnostics.push(Diagnostic::warning(
                        DiagnosticKind::MissingIr,
                        format!("No IR for node {} of {}", id, lookup.method.short_name()),
                    ));
                }
                diagnostics.push(Diagnostic::error(
                    DiagnosticKind::Unbound,
                    format!(
                        "Variable {} not bound at line {} in {}",
                        binding.variable,
                        binding.line,
                        lookup.method.short_name()
                    ),
                ));
            }
            BindingVerdict::MethodUnreachable => {
                diagnostics.push(not_found(&lookup.method));
            }
        }
    }

    /// Resolve descriptor text and find its nodes
    ///
    /// `None` when evaluation of the dependent check cannot continue; the
    /// reason is already recorded in `diagnostics`.
    fn lookup(
        &self,
        text: &str,
        graph: &CallGraph,
        universe: &TypeUniverse,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<NodeLookup> {
        let method = match resolve_text(text, universe) {
            Ok(handle) => handle,
            Err(ResolveError::Descriptor(e)) => {
                diagnostics.push(Diagnostic::error(
                    DiagnosticKind::MalformedDescriptor,
                    e.to_string(),
                ));
                return None;
            }
            Err(ResolveError::UnknownLoader(e)) => {
                error!("broken precondition resolving '{}': {}", text, e);
                diagnostics.push(Diagnostic::error(DiagnosticKind::UnknownLoader, e.to_string()));
                return None;
            }
        };

        let lookup = nodes_for(&method, graph);
        if lookup.is_empty() {
            diagnostics.push(not_found(&method));
            return None;
        }
        if lookup.is_ambiguous() {
            let message = format!(
                "{} nodes for {}",
                lookup.nodes.len(),
                method.short_name()
            );
            match self.config.context_policy {
                ContextPolicy::Tolerant => {
                    warn!("ambiguous context: {}", message);
                    diagnostics.push(Diagnostic::warning(DiagnosticKind::AmbiguousContext, message));
                }
                ContextPolicy::RequireUnique => {
                    diagnostics.push(Diagnostic::error(
                        DiagnosticKind::AmbiguousContext,
                        format!("Expected a unique node: {}", message),
                    ));
                }
            }
        }
        Some(lookup)
    }
}

fn not_found(method: &MethodHandle) -> Diagnostic {
    Diagnostic::error(
        DiagnosticKind::MethodNotFound,
        format!("Unreachable/non-existent method: {}", method.short_name()),
    )
}
