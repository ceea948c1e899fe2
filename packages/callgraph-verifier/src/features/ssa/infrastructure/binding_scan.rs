//! Line/name scan over one method IR
//!
//! A variable is defined at line L if some instruction mapped to L has a def
//! whose local-name set contains the variable. Lines map many-to-one onto
//! instructions and a value can carry several names, so the scan is two-level
//! and tests set membership. The first match ends the scan.

use crate::features::ssa::domain::{MethodIr, SourceLine, ValueNumber};
use serde::Serialize;
use tracing::trace;

/// Where a variable binding was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BindingSite {
    pub instruction_index: usize,
    pub def_position: usize,
    pub value: ValueNumber,
    pub line: SourceLine,
}

/// Find the first definition of `variable` at `line`
pub fn find_binding(ir: &MethodIr, variable: &str, line: SourceLine) -> Option<BindingSite> {
    ir.instructions()
        .filter(|inst| ir.line_of(inst.index) == Some(line))
        .find_map(|inst| {
            trace!("  found {} at line {}", inst, line);
            inst.defs.iter().enumerate().find_map(|(pos, &def)| {
                let names = ir.local_names_of(inst.index, def)?;
                trace!("    def {}: {} names {:?}", pos, def, names);
                names
                    .iter()
                    .any(|name| name == variable)
                    .then_some(BindingSite {
                        instruction_index: inst.index,
                        def_position: pos,
                        value: def,
                        line,
                    })
            })
        })
}
