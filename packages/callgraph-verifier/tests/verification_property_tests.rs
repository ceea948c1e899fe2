//! Property-based tests for descriptor resolution and verification
//!
//! Invariants that should hold for ALL inputs:
//! - Determinism: resolving the same text twice yields equal handles
//! - Canonical spellings: padding and `.`/`/` separators do not change identity
//! - Direction: an edge never implies its reverse
//! - Monotonicity: unrelated code never un-binds a variable
//! - Completeness: reachable and unreachable partition the audited methods

mod common;

use callgraph_verifier::config::VerifierConfig;
use callgraph_verifier::features::call_graph::{has_edge, AnalysisScope, CallGraph, ContextId};
use callgraph_verifier::features::descriptor::resolve_text;
use callgraph_verifier::features::ssa::{find_binding, SsaInstruction};
use callgraph_verifier::features::type_universe::TypeUniverse;
use callgraph_verifier::features::verification::VerificationDriver;
use callgraph_verifier::shared::models::{LanguageTag, MethodHandle, SOURCE_LOADER};
use common::*;
use proptest::prelude::*;
use std::collections::HashSet;

fn source_universe() -> TypeUniverse {
    let mut u = TypeUniverse::new();
    u.register_loader(SOURCE_LOADER, LanguageTag::Java).unwrap();
    u
}

fn ident() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,8}"
}

fn class_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(ident(), 1..4)
}

proptest! {
    #[test]
    fn prop_resolution_is_deterministic(
        class in class_path(),
        name in ident(),
        params in prop::collection::vec(prop::sample::select(vec!["I", "J", "Z", "Ljava/lang/String;", "[I"]), 0..4),
    ) {
        let u = source_universe();
        let text = format!("Source#{}#{}#({})V", class.join("/"), name, params.concat());
        let first = resolve_text(&text, &u).unwrap();
        let second = resolve_text(&text, &u).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.ptr_eq(&second));
        prop_assert_eq!(first.descriptor(), text);
    }

    #[test]
    fn prop_equivalent_spellings_resolve_equal(
        class in class_path(),
        name in ident(),
        pad in "[ \t]{0,3}",
    ) {
        let u = source_universe();
        let plain = format!("Source#{}#{}#(Ljava/lang/String;)V", class.join("/"), name);
        let padded = format!(
            "{p}Source{p}#{p}{}{p}#{p}{}{p}#{p}(Ljava.lang.String;){p}V{p}",
            class.join("."),
            name,
            p = pad
        );
        prop_assert_eq!(resolve_text(&plain, &u).unwrap(), resolve_text(&padded, &u).unwrap());
    }

    #[test]
    fn prop_edges_are_directed(
        edges in prop::collection::vec((0usize..6, 0usize..6), 0..12),
    ) {
        let u = source_universe();
        let handles: Vec<MethodHandle> = (0..6)
            .map(|i| resolve_text(&format!("Source#T#m{}#()V", i), &u).unwrap())
            .collect();
        let mut graph = CallGraph::new();
        let nodes: Vec<_> = handles
            .iter()
            .map(|h| graph.find_or_create_node(h, ContextId::EVERYWHERE))
            .collect();
        for &(a, b) in &edges {
            graph.add_edge(nodes[a], nodes[b]);
        }

        let expected: HashSet<(usize, usize)> = edges.iter().copied().collect();
        for a in 0..6 {
            for b in 0..6 {
                prop_assert_eq!(has_edge(nodes[a], nodes[b], &graph), expected.contains(&(a, b)));
            }
        }
    }

    #[test]
    fn prop_unrelated_code_keeps_binding(
        extra in prop::collection::vec((11u32..200, 100u32..500, ident()), 0..20),
    ) {
        let mut builder = callgraph_verifier::features::ssa::MethodIr::builder()
            .instruction(SsaInstruction::new(2, "binaryop").def(7u32).uses([1, 5]))
            .line(2, 10)
            .local_names(2, 7, ["max"]);
        for (offset, (line, value, name)) in extra.iter().enumerate() {
            let index = 3 + offset;
            builder = builder
                .instruction(SsaInstruction::new(index, "const").def(*value))
                .line(index, *line)
                .local_names(index, *value, [name.clone()]);
        }
        let ir = builder.build().unwrap();
        let site = find_binding(&ir, "max", 10);
        prop_assert!(site.is_some());
        prop_assert_eq!(site.map(|s| s.instruction_index), Some(2));
    }

    #[test]
    fn prop_reachability_partitions_declared_methods(
        mask in prop::collection::vec(any::<bool>(), 8),
    ) {
        let universe = java_universe();
        let candidates = [
            "Source#A#main#([Ljava/lang/String;)V",
            "Source#A#m#()V",
            "Source#B#n#()V",
            "Source#B#unused#()V",
            "Source#C#p#(I)V",
            "Source#pkg/Foo#bar#()V",
            "Source#ssa/SSA1#start#(III)V",
            "Source#ssa/SSA1#id#(I)V",
        ];
        let mut spec = GraphSpec::new();
        for (descriptor, present) in candidates.iter().zip(&mask) {
            if *present {
                spec.node(descriptor);
            }
        }

        let report = VerificationDriver::new(spec, VerifierConfig::default())
            .run(&AnalysisScope::new(), &universe, &[])
            .unwrap();

        let reachable: HashSet<String> = report.reachable.iter().map(|h| h.descriptor()).collect();
        let unreachable: HashSet<String> = report.unreachable.iter().map(|h| h.descriptor()).collect();
        let all: HashSet<String> = candidates.iter().map(|c| c.to_string()).collect();

        prop_assert!(reachable.is_disjoint(&unreachable));
        let union: HashSet<String> = reachable.union(&unreachable).cloned().collect();
        prop_assert_eq!(union, all);
        prop_assert_eq!(reachable.len() + unreachable.len(), candidates.len());
    }
}
