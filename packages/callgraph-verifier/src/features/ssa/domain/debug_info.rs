//! Source debug metadata for one method's IR

use super::instruction::ValueNumber;
use rustc_hash::FxHashMap;

/// 1-based source line
pub type SourceLine = u32;

/// Instruction index → source line, and (index, value) → source names
///
/// A value may carry several names when the analyzer merged live ranges that
/// originally belonged to different source variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugInfo {
    lines: FxHashMap<usize, SourceLine>,
    local_names: FxHashMap<(usize, ValueNumber), Vec<String>>,
}

impl DebugInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_line(&mut self, index: usize, line: SourceLine) {
        self.lines.insert(index, line);
    }

    /// Add names for `value` at `index`; duplicates are ignored
    pub fn add_local_names<I, S>(&mut self, index: usize, value: ValueNumber, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.local_names.entry((index, value)).or_default();
        for name in names {
            let name = name.into();
            if !entry.contains(&name) {
                entry.push(name);
            }
        }
    }

    pub fn line_of(&self, index: usize) -> Option<SourceLine> {
        self.lines.get(&index).copied()
    }

    pub fn local_names_of(&self, index: usize, value: ValueNumber) -> Option<&[String]> {
        self.local_names
            .get(&(index, value))
            .map(|names| names.as_slice())
    }
}
