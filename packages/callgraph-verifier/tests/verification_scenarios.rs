//! End-to-end verification scenarios
//!
//! Each test builds a call graph through the `CallGraphBuilder` port and runs
//! the full Build → Enumerate → Assert → Report session.

mod common;

use callgraph_verifier::config::{ContextPolicy, Preset, VerifierConfig};
use callgraph_verifier::errors::VerifyError;
use callgraph_verifier::features::call_graph::{
    nodes_for, AnalysisScope, BuildError, CancellationToken, ContextId,
};
use callgraph_verifier::features::descriptor::{resolve_text, DescriptorError, ResolveError};
use callgraph_verifier::features::ssa::is_bound;
use callgraph_verifier::features::verification::{
    Assertion, BindingAssertion, DiagnosticKind, EdgeAssertion, VerificationDriver,
    VerificationReport,
};
use callgraph_verifier::CallGraphBuilder;
use common::*;
use pretty_assertions::assert_eq;

fn verify(spec: GraphSpec, config: VerifierConfig, assertions: &[Assertion]) -> VerificationReport {
    let universe = java_universe();
    VerificationDriver::new(spec, config)
        .run(&AnalysisScope::new(), &universe, assertions)
        .unwrap()
}

#[test]
fn scenario_a_single_node_lookup() {
    let universe = java_universe();
    let mut spec = GraphSpec::new();
    spec.node("Source#pkg/Foo#bar#()V");
    let graph = spec.build(&AnalysisScope::new(), &universe).unwrap();

    let handle = resolve_text("Source#pkg/Foo#bar#()V", &universe).unwrap();
    let lookup = nodes_for(&handle, &graph);
    assert_eq!(lookup.nodes.len(), 1);
    assert_eq!(handle.short_name(), "pkg.Foo.bar");
}

#[test]
fn scenario_b_missing_edge() {
    let mut spec = GraphSpec::new();
    spec.node("Source#A#m#()V");
    spec.node("Source#B#n#()V");

    let report = verify(
        spec,
        VerifierConfig::default(),
        &[EdgeAssertion::new("Source#A#m#()V").to("Source#B#n#()V").into()],
    );
    let outcome = &report.outcomes[0];
    assert!(!outcome.passed);
    assert_eq!(outcome.message(), "Missing edge: A.m -> B.n");
    assert!(!report.passed);
}

#[test]
fn scenario_c_binding_by_name_set() {
    let mut spec = GraphSpec::new();
    spec.node_with_ir("Source#C#p#(I)V", max_binding_ir());

    let report = verify(
        spec,
        VerifierConfig::default(),
        &[BindingAssertion::new("Source#C#p#(I)V", "max", 10).into()],
    );
    assert!(report.outcomes[0].passed);
    assert_eq!(report.outcomes[0].diagnostics, vec![]);
}

#[test]
fn scenario_d_malformed_descriptor_does_not_stop_run() {
    let mut spec = GraphSpec::new();
    let a = spec.node("Source#A#m#()V");
    let b = spec.node("Source#B#n#()V");
    spec.edge(a, b);

    let assertions: Vec<Assertion> = vec![
        EdgeAssertion::new("Source#A#m").to("Source#B#n#()V").into(),
        EdgeAssertion::new("Source#A#m#()V").to("Source#B#n#()V").into(),
    ];
    let report = verify(spec, VerifierConfig::default(), &assertions);

    assert_eq!(report.outcomes.len(), 2);
    assert!(!report.outcomes[0].passed);
    assert!(report.outcomes[0].has_kind(DiagnosticKind::MalformedDescriptor));
    assert!(report.outcomes[1].passed);

    assert!(matches!(
        resolve_text("Source#A#m", &java_universe()),
        Err(ResolveError::Descriptor(DescriptorError::Malformed { .. }))
    ));
}

#[test]
fn ssa1_max_bound_at_join_only() {
    let mut spec = GraphSpec::new();
    spec.node_with_ir("Source#ssa/SSA1#start#(III)V", ssa1_start_ir());

    let assertions: Vec<Assertion> = vec![
        BindingAssertion::new("Source#ssa/SSA1#start#(III)V", "max", 22).into(),
        BindingAssertion::new("Source#ssa/SSA1#start#(III)V", "max", 10).into(),
    ];
    let report = verify(spec, VerifierConfig::default(), &assertions);

    assert!(report.outcomes[0].passed);
    assert_eq!(
        report.outcomes[1].message(),
        "Variable max not bound at line 10 in ssa.SSA1.start"
    );
}

#[test]
fn binding_in_any_context_node() {
    let universe = java_universe();
    let mut spec = GraphSpec::new();
    spec.node_in("Source#C#p#(I)V", ContextId(1));
    spec.node_with_ir("Source#C#p#(I)V", max_binding_ir());
    let graph = spec.build(&AnalysisScope::new(), &universe).unwrap();

    let handle = resolve_text("Source#C#p#(I)V", &universe).unwrap();
    assert_eq!(nodes_for(&handle, &graph).nodes.len(), 2);
    assert!(is_bound(&handle, "max", 10, &graph));
    assert!(!is_bound(&handle, "max", 9, &graph));
}

#[test]
fn ambiguous_context_is_advisory_by_default() {
    let mut spec = GraphSpec::new();
    let a1 = spec.node_in("Source#A#m#()V", ContextId(1));
    spec.node_in("Source#A#m#()V", ContextId(2));
    let b = spec.node("Source#B#n#()V");
    spec.edge(a1, b);
    let edge: Assertion = EdgeAssertion::new("Source#A#m#()V").to("Source#B#n#()V").into();

    let tolerant = verify(spec.clone(), VerifierConfig::default(), &[edge.clone()]);
    assert!(tolerant.outcomes[0].passed);
    assert!(tolerant.outcomes[0].has_kind(DiagnosticKind::AmbiguousContext));

    let unique = verify(
        spec,
        VerifierConfig::default().with_context_policy(ContextPolicy::RequireUnique),
        &[edge],
    );
    assert!(!unique.outcomes[0].passed);
}

#[test]
fn every_destination_is_checked() {
    let mut spec = GraphSpec::new();
    let a = spec.node("Source#A#m#()V");
    let b = spec.node("Source#B#n#()V");
    spec.node("Source#C#p#(I)V");
    spec.edge(a, b);

    let report = verify(
        spec,
        VerifierConfig::default(),
        &[EdgeAssertion::new("Source#A#m#()V")
            .to("Source#B#n#()V")
            .to("Source#C#p#(I)V")
            .to("Source#B#unused#()V")
            .into()],
    );
    let outcome = &report.outcomes[0];
    assert_eq!(
        outcome.message(),
        "Missing edge: A.m -> C.p; Unreachable/non-existent method: B.unused"
    );
}

#[test]
fn unknown_loader_becomes_diagnostic() {
    let mut spec = GraphSpec::new();
    spec.node("Source#A#m#()V");
    let report = verify(
        spec,
        VerifierConfig::default(),
        &[BindingAssertion::new("Bytecode#A#m#()V", "x", 1).into()],
    );
    let outcome = &report.outcomes[0];
    assert!(outcome.has_kind(DiagnosticKind::UnknownLoader));
    assert!(outcome.message().contains("Unknown loader 'Bytecode'"));
}

#[test]
fn reachability_audit_partitions_source_methods() {
    let mut spec = GraphSpec::new();
    let main = spec.node("Source#A#main#([Ljava/lang/String;)V");
    let m = spec.node("Source#A#m#()V");
    spec.edge(main, m);
    spec.node("Primordial#java/lang/Object#<init>#()V");

    let report = verify(spec.clone(), VerifierConfig::default(), &[]);
    let mut unreachable: Vec<_> = report.unreachable.iter().map(|h| h.short_name()).collect();
    unreachable.sort();
    assert_eq!(
        unreachable,
        vec!["B.n", "B.unused", "C.p", "pkg.Foo.bar", "ssa.SSA1.id", "ssa.SSA1.start"]
    );
    assert_eq!(report.reachable.len(), 2);
    assert_eq!(report.abstract_methods.len(), 1);
    assert!(report.passed);

    let strict = verify(spec, VerifierConfig::preset(Preset::Strict), &[]);
    assert!(!strict.passed);
}

#[test]
fn cancelled_build_aborts_run() {
    let universe = java_universe();
    let token = CancellationToken::new();
    token.cancel();
    let scope = AnalysisScope::new().with_cancellation(token);
    let err = VerificationDriver::new(GraphSpec::new(), VerifierConfig::default())
        .run(&scope, &universe, &[])
        .unwrap_err();
    assert!(matches!(err, VerifyError::Build(BuildError::Cancelled)));
}
