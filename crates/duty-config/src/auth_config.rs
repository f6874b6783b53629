use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Shared access-key gate. Disabled by default for single-station desktop
/// use; when enabled, every API and WebSocket client must present the key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    pub access_key: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.enabled {
            match self.access_key.as_deref() {
                None | Some("") => {
                    return Err(ConfigError::auth(
                        "auth.enabled requires a non-empty auth.access_key",
                    ));
                }
                Some(key) if key.len() < 8 => {
                    return Err(ConfigError::auth(
                        "auth.access_key must be at least 8 characters",
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
