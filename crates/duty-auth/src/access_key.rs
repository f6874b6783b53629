use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Validates the station's shared access key.
///
/// The comparison runs over every byte regardless of where the first
/// mismatch occurs, so response timing does not leak the key prefix.
pub struct AccessKeyValidator {
    key: String,
}

impl AccessKeyValidator {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Check a presented key.
    #[track_caller]
    pub fn validate(&self, presented: &str) -> AuthErrorResult<()> {
        if presented.is_empty() {
            return Err(AuthError::MissingAccessKey {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let expected = self.key.as_bytes();
        let actual = presented.as_bytes();
        let mut diff = expected.len() ^ actual.len();
        for i in 0..expected.len() {
            diff |= usize::from(expected[i] ^ actual[i % actual.len()]);
        }

        if diff == 0 {
            Ok(())
        } else {
            Err(AuthError::InvalidAccessKey {
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
