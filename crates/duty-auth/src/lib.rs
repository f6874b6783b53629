mod access_key;
mod connection_rate_limiter;
mod error;
mod rate_limit_config;
mod rate_limiter_factory;

pub use access_key::AccessKeyValidator;
pub use connection_rate_limiter::ConnectionRateLimiter;
pub use error::{AuthError, Result};
pub use rate_limit_config::RateLimitConfig;
pub use rate_limiter_factory::RateLimiterFactory;
