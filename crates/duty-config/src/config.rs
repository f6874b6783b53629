use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, RateLimitConfig,
    ServerConfig, TrashConfig, ValidationConfig, WebSocketConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub websocket: WebSocketConfig,
    pub rate_limit: RateLimitConfig,
    pub trash: TrashConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for DUTY_CONFIG_DIR env var, else use ./.dutyboard/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply DUTY_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DUTY_CONFIG_DIR env var > ./.dutyboard/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("DUTY_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".dutyboard"))
    }

    /// Validate all configuration. Call after load() to catch every error at
    /// startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.websocket.validate()?;
        self.rate_limit.validate()?;
        self.validation.validate()?;

        // Database path must stay inside the config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to the database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs the access key).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!("  database: {}", self.database.path);
        info!(
            "  auth: {}",
            if self.auth.enabled {
                "access key required"
            } else {
                "disabled"
            }
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  websocket: buffer={}, heartbeat={}s/{}s",
            self.websocket.send_buffer_size,
            self.websocket.heartbeat_interval_secs,
            self.websocket.heartbeat_timeout_secs
        );
        info!(
            "  rate_limit: {}/{}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
        info!(
            "  trash: retention={}d, cleanup={}h",
            self.trash.retention_days, self.trash.cleanup_interval_hours
        );
        info!(
            "  validation: label={}, text={}, per_container={}",
            self.validation.max_label_length,
            self.validation.max_text_length,
            self.validation.max_items_per_container
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("DUTY_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("DUTY_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "DUTY_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );
        Self::apply_env_parse(
            "DUTY_IDLE_SHUTDOWN_SECS",
            &mut self.server.idle_shutdown_secs,
        );

        // Database
        Self::apply_env_string("DUTY_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_bool("DUTY_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("DUTY_AUTH_ACCESS_KEY", &mut self.auth.access_key);

        // Logging
        Self::apply_env_parse("DUTY_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DUTY_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DUTY_LOG_FILE", &mut self.logging.file);

        // WebSocket
        Self::apply_env_parse(
            "DUTY_WS_SEND_BUFFER_SIZE",
            &mut self.websocket.send_buffer_size,
        );
        Self::apply_env_parse(
            "DUTY_WS_HEARTBEAT_INTERVAL_SECS",
            &mut self.websocket.heartbeat_interval_secs,
        );
        Self::apply_env_parse(
            "DUTY_WS_HEARTBEAT_TIMEOUT_SECS",
            &mut self.websocket.heartbeat_timeout_secs,
        );

        // Rate limit
        Self::apply_env_parse(
            "DUTY_RATE_LIMIT_MAX_REQUESTS",
            &mut self.rate_limit.max_requests,
        );
        Self::apply_env_parse(
            "DUTY_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );

        // Trash
        Self::apply_env_parse(
            "DUTY_TRASH_RETENTION_DAYS",
            &mut self.trash.retention_days,
        );
        Self::apply_env_parse(
            "DUTY_TRASH_CLEANUP_INTERVAL_HOURS",
            &mut self.trash.cleanup_interval_hours,
        );

        // Validation
        Self::apply_env_parse(
            "DUTY_VALIDATION_MAX_LABEL_LENGTH",
            &mut self.validation.max_label_length,
        );
        Self::apply_env_parse(
            "DUTY_VALIDATION_MAX_TEXT_LENGTH",
            &mut self.validation.max_text_length,
        );
        Self::apply_env_parse(
            "DUTY_VALIDATION_MAX_ITEMS_PER_CONTAINER",
            &mut self.validation.max_items_per_container,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
