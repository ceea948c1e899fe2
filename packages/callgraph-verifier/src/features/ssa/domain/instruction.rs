//! SSA instructions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of one SSA-defined value within a method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueNumber(pub u32);

impl fmt::Display for ValueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<u32> for ValueNumber {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// One SSA instruction
///
/// `index` is the position in the method's instruction array; defs and uses
/// keep their operand order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsaInstruction {
    pub index: usize,
    /// Mnemonic used when dumping IR (`binaryop`, `phi`, `invoke`, ...)
    #[serde(default)]
    pub opcode: String,
    #[serde(default)]
    pub defs: Vec<ValueNumber>,
    #[serde(default)]
    pub uses: Vec<ValueNumber>,
}

impl SsaInstruction {
    pub fn new(index: usize, opcode: impl Into<String>) -> Self {
        Self {
            index,
            opcode: opcode.into(),
            defs: Vec::new(),
            uses: Vec::new(),
        }
    }

    pub fn def(mut self, value: impl Into<ValueNumber>) -> Self {
        self.defs.push(value.into());
        self
    }

    pub fn uses(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.uses.extend(values.into_iter().map(ValueNumber));
        self
    }
}

impl fmt::Display for SsaInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.defs.is_empty() {
            let defs: Vec<String> = self.defs.iter().map(|d| d.to_string()).collect();
            write!(f, "{} = ", defs.join(", "))?;
        }
        write!(f, "{}", self.opcode)?;
        if !self.uses.is_empty() {
            let uses: Vec<String> = self.uses.iter().map(|u| u.to_string()).collect();
            write!(f, " {}", uses.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let inst = SsaInstruction::new(3, "binaryop").def(7u32).uses([1, 2]);
        assert_eq!(inst.to_string(), "v7 = binaryop v1, v2");
        assert_eq!(SsaInstruction::new(4, "return").to_string(), "return");
    }
}
