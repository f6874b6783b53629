use serde::Deserialize;

/// Trash retention configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TrashConfig {
    /// Days an archived handover item is kept before auto-purge.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,

    /// Interval of the background purge pass, in hours.
    #[serde(default = "default_cleanup_interval_hours")]
    pub cleanup_interval_hours: u32,
}

fn default_retention_days() -> u32 {
    30
}

fn default_cleanup_interval_hours() -> u32 {
    24
}

impl Default for TrashConfig {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
            cleanup_interval_hours: default_cleanup_interval_hours(),
        }
    }
}
