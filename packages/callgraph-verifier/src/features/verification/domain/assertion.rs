//! Verification inputs
//!
//! Assertions carry raw descriptor text; resolution happens per assertion
//! inside the driver so a malformed descriptor only fails its own assertion.
//!
//! Assertion files (YAML or JSON) are lists tagged by `kind`:
//!
//! ```yaml
//! - kind: edge
//!   src: "Source#A#main#([Ljava/lang/String;)V"
//!   dsts: ["Source#B#n#()V"]
//! - kind: binding
//!   method: "Source#C#p#(I)V"
//!   variable: max
//!   line: 10
//! ```

use crate::features::ssa::domain::SourceLine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Expected direct call edges from one caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeAssertion {
    pub src: String,
    pub dsts: Vec<String>,
}

impl EdgeAssertion {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            dsts: Vec::new(),
        }
    }

    /// Add an expected callee
    pub fn to(mut self, dst: impl Into<String>) -> Self {
        self.dsts.push(dst.into());
        self
    }
}

/// Expected source variable bound at a line of a method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingAssertion {
    pub method: String,
    pub variable: String,
    pub line: SourceLine,
}

impl BindingAssertion {
    pub fn new(method: impl Into<String>, variable: impl Into<String>, line: SourceLine) -> Self {
        Self {
            method: method.into(),
            variable: variable.into(),
            line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Assertion {
    Edge(EdgeAssertion),
    Binding(BindingAssertion),
}

impl Assertion {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Edge(_) => "edge",
            Self::Binding(_) => "binding",
        }
    }
}

impl From<EdgeAssertion> for Assertion {
    fn from(edge: EdgeAssertion) -> Self {
        Self::Edge(edge)
    }
}

impl From<BindingAssertion> for Assertion {
    fn from(binding: BindingAssertion) -> Self {
        Self::Binding(binding)
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edge(e) => write!(f, "edge {} -> [{}]", e.src, e.dsts.join(", ")),
            Self::Binding(b) => write!(
                f,
                "binding '{}' at line {} in {}",
                b.variable, b.line, b.method
            ),
        }
    }
}
