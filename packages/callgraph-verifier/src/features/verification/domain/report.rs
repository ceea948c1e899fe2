//! Verification report
//!
//! Always lists every assertion's verdict next to the reachability audit, so a
//! single broken assertion never hides the others.

use super::assertion::Assertion;
use crate::shared::models::MethodHandle;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MalformedDescriptor,
    UnknownLoader,
    /// Empty node set: unreachable or never declared
    MethodNotFound,
    MissingEdge,
    Unbound,
    AmbiguousContext,
    /// A candidate node carried no IR to scan
    MissingIr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            message: message.into(),
        }
    }

    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Verdict for one assertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssertionOutcome {
    pub assertion: Assertion,
    pub passed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl AssertionOutcome {
    /// Passed iff no diagnostic is an error
    pub fn from_diagnostics(assertion: Assertion, diagnostics: Vec<Diagnostic>) -> Self {
        let passed = !diagnostics.iter().any(Diagnostic::is_error);
        Self {
            assertion,
            passed,
            diagnostics,
        }
    }

    /// Error messages joined into one line; empty when passed
    pub fn message(&self) -> String {
        self.diagnostics
            .iter()
            .filter(|d| d.is_error())
            .map(|d| d.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn has_kind(&self, kind: DiagnosticKind) -> bool {
        self.diagnostics.iter().any(|d| d.kind == kind)
    }
}

/// Rendered IR of one reachable method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IrDump {
    pub method: MethodHandle,
    pub text: String,
}

/// Wall-clock time per phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PhaseTimings {
    pub build_ms: u64,
    pub enumerate_ms: u64,
    pub assert_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub passed: bool,
    pub strict_reachability: bool,
    pub reachable: Vec<MethodHandle>,
    pub unreachable: Vec<MethodHandle>,
    /// Declared abstract methods, excluded from the audit
    pub abstract_methods: Vec<MethodHandle>,
    pub outcomes: Vec<AssertionOutcome>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ir_dumps: Vec<IrDump>,
    pub timings: PhaseTimings,
}

impl VerificationReport {
    /// Assemble a report and compute the overall verdict
    pub fn new(
        strict_reachability: bool,
        reachable: Vec<MethodHandle>,
        unreachable: Vec<MethodHandle>,
        abstract_methods: Vec<MethodHandle>,
        outcomes: Vec<AssertionOutcome>,
    ) -> Self {
        let passed = outcomes.iter().all(|o| o.passed)
            && (!strict_reachability || unreachable.is_empty());
        Self {
            passed,
            strict_reachability,
            reachable,
            unreachable,
            abstract_methods,
            outcomes,
            ir_dumps: Vec::new(),
            timings: PhaseTimings::default(),
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &AssertionOutcome> + '_ {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn is_unreachable(&self, method: &MethodHandle) -> bool {
        self.unreachable.contains(method)
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Verification {} (strict reachability: {})",
            if self.passed { "PASSED" } else { "FAILED" },
            if self.strict_reachability { "on" } else { "off" }
        )?;
        writeln!(f, "Reachable methods: {}", self.reachable.len())?;
        if !self.unreachable.is_empty() {
            writeln!(f, "Unreachable methods ({}):", self.unreachable.len())?;
            for m in &self.unreachable {
                writeln!(f, "  {}", m)?;
            }
        }
        if !self.abstract_methods.is_empty() {
            writeln!(f, "Abstract methods (not audited): {}", self.abstract_methods.len())?;
        }
        writeln!(
            f,
            "Assertions: {} passed, {} failed",
            self.passed_count(),
            self.outcomes.len() - self.passed_count()
        )?;
        for outcome in &self.outcomes {
            writeln!(
                f,
                "  [{}] {}",
                if outcome.passed { "PASS" } else { "FAIL" },
                outcome.assertion
            )?;
            for d in &outcome.diagnostics {
                writeln!(f, "      {}", d)?;
            }
        }
        for dump in &self.ir_dumps {
            writeln!(f, "\nIR of {}:", dump.method)?;
            write!(f, "{}", dump.text)?;
        }
        Ok(())
    }
}
