//! Verifier configuration
//!
//! A preset supplies every field; a versioned YAML file may pick a preset and
//! override individual fields on top of it.

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use crate::shared::models::SOURCE_LOADER;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Current configuration file schema version
pub const CONFIG_VERSION: u32 = 1;

/// How to treat several call-graph nodes for one method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextPolicy {
    /// Warn and accept a match from any node
    Tolerant,
    /// Fail an assertion whose method has more than one node
    RequireUnique,
}

impl Default for ContextPolicy {
    fn default() -> Self {
        Self::Tolerant
    }
}

/// Verification run settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    pub preset: Preset,
    /// Loader whose declared methods are audited for reachability
    pub source_loader: String,
    /// Fail the run when any audited method is unreachable
    pub strict_reachability: bool,
    pub context_policy: ContextPolicy,
    /// Evaluate assertions on the rayon pool
    pub parallel_assertions: bool,
    /// Render the IR of every reachable method into the report
    pub dump_ir: bool,
}

/// YAML schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFileV1 {
    version: Option<u32>,
    #[serde(default = "default_preset_name")]
    preset: String,
    #[serde(default)]
    overrides: Option<ConfigOverrides>,
}

fn default_preset_name() -> String {
    Preset::default().to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_loader: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    strict_reachability: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    context_policy: Option<ContextPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parallel_assertions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dump_ir: Option<bool>,
}

impl VerifierConfig {
    /// Complete configuration for a preset
    pub fn preset(preset: Preset) -> Self {
        let base = Self {
            preset,
            source_loader: SOURCE_LOADER.to_string(),
            strict_reachability: false,
            context_policy: ContextPolicy::Tolerant,
            parallel_assertions: false,
            dump_ir: false,
        };
        match preset {
            Preset::Lenient => base,
            Preset::Strict => Self {
                strict_reachability: true,
                ..base
            },
            Preset::Debug => Self {
                dump_ir: true,
                ..base
            },
        }
    }

    /// Preset by name
    pub fn preset_named(name: &str) -> ConfigResult<Self> {
        let preset =
            Preset::from_str(name).map_err(|_| ConfigError::UnknownPreset(name.to_string()))?;
        Ok(Self::preset(preset))
    }

    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;
        match file.version {
            None => return Err(ConfigError::MissingVersion),
            Some(CONFIG_VERSION) => {}
            Some(found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: vec![CONFIG_VERSION],
                })
            }
        }

        let mut config = Self::preset_named(&file.preset)?;
        if let Some(o) = file.overrides {
            if let Some(v) = o.source_loader {
                config.source_loader = v.trim().to_string();
            }
            if let Some(v) = o.strict_reachability {
                config.strict_reachability = v;
            }
            if let Some(v) = o.context_policy {
                config.context_policy = v;
            }
            if let Some(v) = o.parallel_assertions {
                config.parallel_assertions = v;
            }
            if let Some(v) = o.dump_ir {
                config.dump_ir = v;
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(CONFIG_VERSION),
            preset: self.preset.to_string(),
            overrides: Some(ConfigOverrides {
                source_loader: Some(self.source_loader.clone()),
                strict_reachability: Some(self.strict_reachability),
                context_policy: Some(self.context_policy),
                parallel_assertions: Some(self.parallel_assertions),
                dump_ir: Some(self.dump_ir),
            }),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.source_loader.trim().is_empty() {
            return Err(ConfigError::invalid("source_loader", "must not be empty"));
        }
        if self.source_loader.contains('#') {
            return Err(ConfigError::invalid(
                "source_loader",
                "loader names cannot contain '#'",
            ));
        }
        Ok(())
    }

    pub fn with_strict_reachability(mut self, strict: bool) -> Self {
        self.strict_reachability = strict;
        self
    }

    pub fn with_context_policy(mut self, policy: ContextPolicy) -> Self {
        self.context_policy = policy;
        self
    }

    pub fn with_parallel_assertions(mut self, parallel: bool) -> Self {
        self.parallel_assertions = parallel;
        self
    }

    pub fn with_dump_ir(mut self, dump: bool) -> Self {
        self.dump_ir = dump;
        self
    }

    pub fn with_source_loader(mut self, loader: impl Into<String>) -> Self {
        self.source_loader = loader.into().trim().to_string();
        self
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}
