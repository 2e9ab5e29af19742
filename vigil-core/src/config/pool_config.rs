//! Pool configuration: template slots, auto-commit, fallback message.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// A declared template slot. List order in [`PoolConfig::slots`] is the
/// insertion order, which is the implicit-priority tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSpec {
    pub name: String,
    /// Explicit priority. Either every template slot sets one, or none does.
    pub priority: Option<i32>,
}

impl SlotSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: None,
        }
    }

    pub fn with_priority(name: impl Into<String>, priority: i32) -> Self {
        Self {
            name: name.into(),
            priority: Some(priority),
        }
    }
}

/// Configuration for a status pool, established once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PoolConfig {
    /// When set, every mutating pool operation commits immediately.
    pub auto_commit: bool,
    /// Message committed when every registered slot is unknown.
    pub fallback_message: Option<String>,
    /// Template slots registered at pool construction, in order.
    pub slots: Vec<SlotSpec>,
}

impl PoolConfig {
    /// Load and validate a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: PoolConfig = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Append a template slot. Convenience for programmatic construction;
    /// `validate` still applies.
    pub fn slot(mut self, spec: SlotSpec) -> Self {
        self.slots.push(spec);
        self
    }

    /// Check the template invariants: non-empty unique names and a single
    /// priority mode across all declared slots.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for spec in &self.slots {
            if spec.name.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "slots".to_string(),
                    message: "slot name must not be empty".to_string(),
                });
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: spec.name.clone(),
                    message: "duplicate template slot name".to_string(),
                });
            }
        }

        let explicit = self.slots.iter().filter(|s| s.priority.is_some()).count();
        if explicit != 0 && explicit != self.slots.len() {
            return Err(ConfigError::ValidationFailed {
                field: "slots".to_string(),
                message: format!(
                    "mixed priority modes: {} slot(s) carry a priority, {} do not",
                    explicit,
                    self.slots.len() - explicit
                ),
            });
        }
        Ok(())
    }
}
