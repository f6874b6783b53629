use crate::handlers::error_codes;
use crate::protocol::WireError;

use std::panic::Location;

use duty_core::CoreError;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsError {
    #[error("Connection closed: {reason} {location}")]
    ConnectionClosed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Message decode failed: {source} {location}")]
    Decode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Send buffer full, client too slow {location}")]
    SendBufferFull { location: ErrorLocation },

    #[error("Connection limit exceeded: {current} connections (max: {max}) {location}")]
    ConnectionLimitExceeded {
        current: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Invalid message: {message} {location}")]
    InvalidMessage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Db {
        #[source]
        source: duty_db::DbError,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message}")]
    ValidationError {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Resource not found: {message}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded {location}")]
    RateLimited { location: ErrorLocation },

    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },
}

impl WsError {
    /// Convert to the wire error for the client.
    pub fn to_wire_error(&self) -> WireError {
        WireError {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectionClosed { .. } => error_codes::CONNECTION_CLOSED,
            Self::Decode { .. } | Self::InvalidMessage { .. } => error_codes::INVALID_MESSAGE,
            Self::SendBufferFull { .. } => error_codes::SLOW_CLIENT,
            Self::ConnectionLimitExceeded { .. } => error_codes::CONNECTION_LIMIT,
            Self::Internal { .. } | Self::Db { .. } => error_codes::INTERNAL_ERROR,
            Self::ValidationError { .. } => error_codes::VALIDATION_ERROR,
            Self::NotFound { .. } => error_codes::NOT_FOUND,
            Self::RateLimited { .. } => error_codes::RATE_LIMITED,
            Self::Unauthorized { .. } => error_codes::UNAUTHORIZED,
        }
    }
}

impl From<serde_json::Error> for WsError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<duty_db::DbError> for WsError {
    #[track_caller]
    fn from(source: duty_db::DbError) -> Self {
        Self::Db {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for WsError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            CoreError::Validation { .. } => Self::ValidationError {
                message: source.to_string(),
                field: None,
                location,
            },
            CoreError::InvalidContainer { .. } => Self::InvalidMessage {
                message: source.to_string(),
                location,
            },
            CoreError::UnknownContainer { .. }
            | CoreError::UnknownTask { .. }
            | CoreError::UnknownStatus { .. }
            | CoreError::UnknownRecord { .. }
            | CoreError::UnknownGroup { .. } => Self::NotFound {
                message: source.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, WsError>;
