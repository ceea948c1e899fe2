pub mod assertion;
pub mod report;

pub use assertion::{Assertion, BindingAssertion, EdgeAssertion};
pub use report::{
    AssertionOutcome, Diagnostic, DiagnosticKind, IrDump, PhaseTimings, Severity,
    VerificationReport,
};
