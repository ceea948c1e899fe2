//! Descriptor grammar parser
//!
//! Grammar: `loader#type#name#signature`, split on a literal `#`. No escaping:
//! names containing `#` cannot be written. The type field is an unsigiled
//! internal class name (`pkg/Foo`); the resolver adds the sigil.

use std::fmt;
use thiserror::Error;

/// Field delimiter of the descriptor grammar
pub const DESCRIPTOR_DELIMITER: char = '#';

const FIELD_COUNT: usize = 4;

/// Descriptor text that does not match the grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("Malformed descriptor '{text}': {reason}")]
    Malformed { text: String, reason: String },
}

impl DescriptorError {
    fn malformed(text: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}

/// The four fields of a parsed descriptor, trimmed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDescriptorFields {
    pub loader: String,
    pub type_name: String,
    pub method_name: String,
    pub signature: String,
}

/// Parse descriptor text into its four fields
pub fn parse(text: &str) -> Result<MethodDescriptorFields, DescriptorError> {
    let fields: Vec<&str> = text.split(DESCRIPTOR_DELIMITER).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(DescriptorError::malformed(
            text,
            format!(
                "expected {} '{}'-separated fields, found {}",
                FIELD_COUNT,
                DESCRIPTOR_DELIMITER,
                fields.len()
            ),
        ));
    }

    const NAMES: [&str; FIELD_COUNT] = ["loader", "type", "name", "signature"];
    if let Some(pos) = fields.iter().position(|f| f.is_empty()) {
        return Err(DescriptorError::malformed(
            text,
            format!("{} field is empty", NAMES[pos]),
        ));
    }

    Ok(MethodDescriptorFields {
        loader: fields[0].to_string(),
        type_name: fields[1].to_string(),
        method_name: fields[2].to_string(),
        signature: fields[3].to_string(),
    })
}

impl fmt::Display for MethodDescriptorFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}{d}{}",
            self.loader,
            self.type_name,
            self.method_name,
            self.signature,
            d = DESCRIPTOR_DELIMITER
        )
    }
}
