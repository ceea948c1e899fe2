//! SSA domain models

pub mod debug_info;
pub mod instruction;
pub mod method_ir;

pub use debug_info::{DebugInfo, SourceLine};
pub use instruction::{SsaInstruction, ValueNumber};
pub use method_ir::{MethodIr, MethodIrBuilder, SlotOutOfRange, MAX_INSTRUCTION_SLOTS};
