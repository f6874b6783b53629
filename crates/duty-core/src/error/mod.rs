use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid container id: {value} {location}")]
    InvalidContainer {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown container: {container} {location}")]
    UnknownContainer {
        container: String,
        location: ErrorLocation,
    },

    #[error("Unknown task: {id} {location}")]
    UnknownTask { id: String, location: ErrorLocation },

    #[error("Unknown status: {id} {location}")]
    UnknownStatus { id: String, location: ErrorLocation },

    #[error("Unknown work record: {id} {location}")]
    UnknownRecord { id: String, location: ErrorLocation },

    #[error("Unknown record group: {id} {location}")]
    UnknownGroup { id: String, location: ErrorLocation },
}

pub type Result<T> = StdResult<T, CoreError>;
