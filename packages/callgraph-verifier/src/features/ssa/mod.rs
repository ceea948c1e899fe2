//! SSA IR and variable binding verification
//!
//! The analyzer hands over, per call-graph node, a flat SSA instruction
//! stream (indexable, with holes) plus debug metadata mapping instruction
//! indexes to source lines and value numbers to source variable names.
//!
//! - domain/          SsaInstruction, ValueNumber, DebugInfo, MethodIr
//! - infrastructure/  line/name scan over one IR (first match wins)
//! - application/     BindingVerifier over all nodes of a method

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{is_bound, BindingVerdict, BindingVerifier};
pub use domain::{
    DebugInfo, MethodIr, MethodIrBuilder, SlotOutOfRange, SourceLine, SsaInstruction,
    ValueNumber, MAX_INSTRUCTION_SLOTS,
};
pub use infrastructure::{find_binding, BindingSite};
