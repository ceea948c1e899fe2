//! Analysis scope handed to the call-graph builder

use crate::shared::models::{TypeName, SOURCE_LOADER};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag for a running build
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Root of the call graph: the `main` method of a class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entrypoint {
    pub loader: String,
    pub class: TypeName,
    #[serde(default = "Entrypoint::default_method")]
    pub method: String,
    #[serde(default = "Entrypoint::default_signature")]
    pub signature: String,
}

impl Entrypoint {
    fn default_method() -> String {
        "main".to_string()
    }

    fn default_signature() -> String {
        "([Ljava/lang/String;)V".to_string()
    }

    /// `main(String[])` of a source class
    pub fn main_of(class: &str) -> Self {
        Self {
            loader: SOURCE_LOADER.to_string(),
            class: TypeName::class(class),
            method: Self::default_method(),
            signature: Self::default_signature(),
        }
    }

    /// Descriptor text of the entry method
    pub fn descriptor(&self) -> String {
        format!(
            "{}#{}#{}#{}",
            self.loader,
            self.class.class_name(),
            self.method,
            self.signature
        )
    }
}

/// What the builder analyzes and where it starts
#[derive(Debug, Clone, Default)]
pub struct AnalysisScope {
    pub entrypoints: Vec<Entrypoint>,
    pub cancellation: CancellationToken,
}

impl AnalysisScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entrypoint(mut self, entrypoint: Entrypoint) -> Self {
        self.entrypoints.push(entrypoint);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_entrypoint_descriptor() {
        let ep = Entrypoint::main_of("Simple1");
        assert_eq!(ep.descriptor(), "Source#Simple1#main#([Ljava/lang/String;)V");
    }

    #[test]
    fn test_entrypoint_defaults_from_json() {
        let ep: Entrypoint =
            serde_json::from_str(r#"{"loader": "Source", "class": "pkg/App"}"#).unwrap();
        assert_eq!(ep, Entrypoint::main_of("pkg/App"));
    }

    #[test]
    fn test_cancellation_shared() {
        let token = CancellationToken::new();
        let scope = AnalysisScope::new().with_cancellation(token.clone());
        assert!(!scope.cancellation.is_cancelled());
        token.cancel();
        assert!(scope.cancellation.is_cancelled());
    }
}
