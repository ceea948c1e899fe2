/*
 * Callgraph Verifier - checks analyzer output against expectations
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Loader, TypeName, MethodSignature, MethodHandle)
 * - features/    : Vertical slices (type_universe → descriptor → call_graph → ssa → verification)
 * - config/      : Presets + versioned YAML
 *
 * A run builds the call graph once, audits reachability of every declared
 * source method, then evaluates edge and binding assertions against it.
 */

#![allow(clippy::derivable_impls)] // Manual impl for documentation
#![allow(clippy::new_without_default)] // Explicit constructors

pub mod config;
pub mod errors;
pub mod features;
pub mod shared;

pub use config::{ContextPolicy, Preset, VerifierConfig};
pub use errors::{Result, VerifyError};
pub use features::call_graph::{
    AnalysisScope, AnalyzerSnapshot, CallGraph, CallGraphBuilder, Entrypoint,
    SnapshotCallGraphBuilder,
};
pub use features::descriptor::resolve_text;
pub use features::type_universe::TypeUniverse;
pub use features::verification::{
    Assertion, BindingAssertion, EdgeAssertion, VerificationDriver, VerificationReport,
};
pub use shared::models::{MethodHandle, SOURCE_LOADER};
