//! Redaction rules declared in TOML.
//!
//! ```toml
//! [[redact]]
//! type = "LicensePlate"
//! fields = ["Number"]
//! ```

use std::path::Path;

use redline_types::TypeTag;
use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};
use crate::redaction::{RedactionRegistry, RedactionRule};

/// One `[[redact]]` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Tag of the owning type.
    #[serde(rename = "type")]
    pub owner: TypeTag,
    /// Field names to redact on that type.
    pub fields: Vec<String>,
}

/// A set of redaction rules loaded from a file or string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionConfig {
    #[serde(default, rename = "redact")]
    pub rules: Vec<RuleConfig>,
}

impl RedactionConfig {
    pub fn from_toml_str(source: &str) -> DiffResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| DiffError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> DiffResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| DiffError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    fn validate(&self) -> DiffResult<()> {
        for rule in &self.rules {
            if rule.fields.is_empty() {
                return Err(DiffError::Config(format!(
                    "rule for {} names no fields",
                    rule.owner
                )));
            }
            if rule.fields.iter().any(String::is_empty) {
                return Err(DiffError::Config(format!(
                    "rule for {} contains an empty field name",
                    rule.owner
                )));
            }
        }
        Ok(())
    }

    pub fn into_registry(self) -> RedactionRegistry {
        self.rules
            .into_iter()
            .map(|rule| RedactionRule::new(rule.owner, rule.fields))
            .collect()
    }
}
