//! Per-node method IR
//!
//! Instruction array indexed by instruction position. Some positions carry
//! no instruction (removed during SSA construction), so slots are optional.

use super::debug_info::{DebugInfo, SourceLine};
use super::instruction::{SsaInstruction, ValueNumber};
use std::fmt;
use thiserror::Error;

/// Largest instruction array a method IR may hold
pub const MAX_INSTRUCTION_SLOTS: usize = 1 << 20;

/// Instruction index that does not fit in a method IR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("instruction index {index} exceeds the limit of {} slots", MAX_INSTRUCTION_SLOTS)]
pub struct SlotOutOfRange {
    pub index: usize,
}

/// SSA instructions plus debug metadata for one call-graph node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodIr {
    instructions: Vec<Option<SsaInstruction>>,
    debug: DebugInfo,
}

impl MethodIr {
    pub fn builder() -> MethodIrBuilder {
        MethodIrBuilder::default()
    }

    /// Number of instruction slots, holes included
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.instructions.len()
    }

    pub fn instruction_at(&self, index: usize) -> Option<&SsaInstruction> {
        self.instructions.get(index).and_then(|slot| slot.as_ref())
    }

    /// Present instructions in index order
    pub fn instructions(&self) -> impl Iterator<Item = &SsaInstruction> + '_ {
        self.instructions.iter().flatten()
    }

    #[inline]
    pub fn debug_info(&self) -> &DebugInfo {
        &self.debug
    }

    #[inline]
    pub fn line_of(&self, index: usize) -> Option<SourceLine> {
        self.debug.line_of(index)
    }

    #[inline]
    pub fn local_names_of(&self, index: usize, value: ValueNumber) -> Option<&[String]> {
        self.debug.local_names_of(index, value)
    }
}

impl fmt::Display for MethodIr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inst in self.instructions() {
            match self.line_of(inst.index) {
                Some(line) => write!(f, "{:>4} @{:<5} {}", inst.index, line, inst)?,
                None => write!(f, "{:>4} @?     {}", inst.index, inst)?,
            }
            let names: Vec<String> = inst
                .defs
                .iter()
                .filter_map(|d| {
                    self.local_names_of(inst.index, *d)
                        .map(|n| format!("{}={}", d, n.join("|")))
                })
                .collect();
            if !names.is_empty() {
                write!(f, "   [{}]", names.join(" "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Incremental construction of a [`MethodIr`]
///
/// The chained `instruction` form keeps the first out-of-range index and
/// reports it from `build`.
#[derive(Debug, Default)]
pub struct MethodIrBuilder {
    ir: MethodIr,
    error: Option<SlotOutOfRange>,
}

impl MethodIrBuilder {
    /// Place an instruction at its own index, replacing any previous occupant
    pub fn instruction(mut self, inst: SsaInstruction) -> Self {
        if let Err(e) = self.push(inst) {
            self.error.get_or_insert(e);
        }
        self
    }

    pub fn push(&mut self, inst: SsaInstruction) -> Result<(), SlotOutOfRange> {
        let index = inst.index;
        let len = index
            .checked_add(1)
            .filter(|&len| len <= MAX_INSTRUCTION_SLOTS)
            .ok_or(SlotOutOfRange { index })?;
        if self.ir.instructions.len() < len {
            self.ir.instructions.resize(len, None);
        }
        self.ir.instructions[index] = Some(inst);
        Ok(())
    }

    pub fn line(mut self, index: usize, line: SourceLine) -> Self {
        self.ir.debug.set_line(index, line);
        self
    }

    pub fn local_names<I, S>(mut self, index: usize, value: u32, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ir.debug.add_local_names(index, ValueNumber(value), names);
        self
    }

    pub fn debug_info_mut(&mut self) -> &mut DebugInfo {
        &mut self.ir.debug
    }

    pub fn build(self) -> Result<MethodIr, SlotOutOfRange> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.ir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holes_preserved() {
        let ir = MethodIr::builder()
            .instruction(SsaInstruction::new(0, "const").def(3u32))
            .instruction(SsaInstruction::new(4, "return").uses([3]))
            .build()
            .unwrap();
        assert_eq!(ir.slot_count(), 5);
        assert!(ir.instruction_at(2).is_none());
        assert!(ir.instruction_at(99).is_none());
        let indexes: Vec<usize> = ir.instructions().map(|i| i.index).collect();
        assert_eq!(indexes, vec![0, 4]);
    }

    #[test]
    fn test_dump_format() {
        let ir = MethodIr::builder()
            .instruction(SsaInstruction::new(1, "binaryop").def(7u32).uses([1, 2]))
            .line(1, 10)
            .local_names(1, 7, ["max"])
            .instruction(SsaInstruction::new(2, "return"))
            .build()
            .unwrap();
        let dump = ir.to_string();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("@10"));
        assert!(lines[0].contains("v7 = binaryop v1, v2"));
        assert!(lines[0].ends_with("[v7=max]"));
        assert!(lines[1].contains("@?"));
    }

    #[test]
    fn test_index_past_limit_rejected() {
        let mut builder = MethodIr::builder();
        assert_eq!(
            builder.push(SsaInstruction::new(usize::MAX, "const")),
            Err(SlotOutOfRange { index: usize::MAX })
        );
        assert!(builder
            .push(SsaInstruction::new(MAX_INSTRUCTION_SLOTS, "const"))
            .is_err());
        assert!(builder
            .push(SsaInstruction::new(MAX_INSTRUCTION_SLOTS - 1, "const"))
            .is_ok());
    }

    #[test]
    fn test_chained_builder_reports_first_bad_index() {
        let err = MethodIr::builder()
            .instruction(SsaInstruction::new(0, "const"))
            .instruction(SsaInstruction::new(1_000_000_000_000_000, "const"))
            .instruction(SsaInstruction::new(usize::MAX, "const"))
            .build()
            .unwrap_err();
        assert_eq!(err.index, 1_000_000_000_000_000);
    }
}
