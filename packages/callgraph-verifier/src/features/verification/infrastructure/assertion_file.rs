//! Assertion files
//!
//! A list of tagged assertions in YAML or JSON. The format follows the file
//! extension; anything other than `.json` is read as YAML.

use crate::errors::Result;
use crate::features::verification::domain::Assertion;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertionFormat {
    Yaml,
    Json,
}

impl AssertionFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

pub fn parse_assertions(text: &str, format: AssertionFormat) -> Result<Vec<Assertion>> {
    Ok(match format {
        AssertionFormat::Json => serde_json::from_str(text)?,
        AssertionFormat::Yaml => serde_yaml::from_str(text)?,
    })
}

pub fn load_assertions(path: impl AsRef<Path>) -> Result<Vec<Assertion>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    parse_assertions(&text, AssertionFormat::from_path(path))
}
