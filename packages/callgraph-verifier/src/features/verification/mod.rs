//! Verification
//!
//! Runs one verification session: build the call graph, audit reachability of
//! every declared source method, evaluate edge and binding assertions, report.
//!
//! # Hexagonal Architecture
//! ```text
//! domain/          Assertion (edge | binding), Diagnostic, VerificationReport
//! application/     VerificationDriver (Build → Enumerate → Assert → Report)
//! infrastructure/  YAML / JSON assertion files
//! ```
//!
//! Only a failed build aborts a run. Malformed descriptors, unknown loaders and
//! missing methods become diagnostics on the assertion that named them.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::VerificationDriver;
pub use domain::{
    Assertion, AssertionOutcome, BindingAssertion, Diagnostic, DiagnosticKind, EdgeAssertion,
    IrDump, PhaseTimings, Severity, VerificationReport,
};
pub use infrastructure::{load_assertions, parse_assertions, AssertionFormat};
