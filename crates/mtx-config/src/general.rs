//! General CLI configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Output formats the CLI knows how to render.
pub const OUTPUT_FORMATS: [&str; 3] = ["json", "table", "raw"];

fn default_format() -> String {
    "table".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

impl GeneralConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown output format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if OUTPUT_FORMATS.contains(&self.default_format.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "general.default_format".into(),
                reason: format!(
                    "`{}` is not one of {}",
                    self.default_format,
                    OUTPUT_FORMATS.join(", ")
                ),
            })
        }
    }
}
