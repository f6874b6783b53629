use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_label_length: usize,
    pub max_text_length: usize,
    /// Upper bound on tasks per container and records overall.
    pub max_items_per_container: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_label_length: 200,
            max_text_length: 10_000,
            max_items_per_container: 500,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_label_length == 0 || self.max_text_length == 0 {
            return Err(ConfigError::config(
                "validation lengths must be at least 1",
            ));
        }
        if self.max_items_per_container == 0 {
            return Err(ConfigError::config(
                "validation.max_items_per_container must be at least 1",
            ));
        }
        Ok(())
    }
}
