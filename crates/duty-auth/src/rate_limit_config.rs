use serde::Deserialize;

/// Rate limit settings as consumed by the limiter itself (duty-config has
/// the validated user-facing twin).
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 120,
            window_secs: 60,
        }
    }
}
