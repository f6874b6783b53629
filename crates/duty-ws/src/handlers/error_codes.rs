//! Wire error codes shared between handlers and clients.

pub const CONNECTION_CLOSED: &str = "CONNECTION_CLOSED";
pub const CONNECTION_LIMIT: &str = "CONNECTION_LIMIT";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
pub const INVALID_MESSAGE: &str = "INVALID_MESSAGE";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const RATE_LIMITED: &str = "RATE_LIMITED";
pub const SLOW_CLIENT: &str = "SLOW_CLIENT";
pub const TIMEOUT: &str = "TIMEOUT";
pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
