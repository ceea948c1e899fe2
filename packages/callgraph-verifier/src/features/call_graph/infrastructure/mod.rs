//! Call graph infrastructure

pub mod snapshot;

pub use snapshot::{
    AnalyzerSnapshot, ClassSnapshot, EdgeSnapshot, LoaderSnapshot, MethodIrSnapshot,
    MethodSnapshot, NodeSnapshot, SnapshotCallGraphBuilder,
};
