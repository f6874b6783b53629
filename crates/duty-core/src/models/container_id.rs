use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identifies one of the board's ordered task containers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum ContainerId {
    Basic,
    Handover,
    Shift(String),
}

impl ContainerId {
    pub fn shift(id: impl Into<String>) -> Self {
        Self::Shift(id.into())
    }

    pub fn is_handover(&self) -> bool {
        matches!(self, Self::Handover)
    }

    /// Database string representation.
    pub fn as_db_str(&self) -> String {
        match self {
            Self::Basic => "basic".to_string(),
            Self::Handover => "handover".to_string(),
            Self::Shift(id) => format!("shift:{id}"),
        }
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Handover => write!(f, "handover"),
            Self::Shift(id) => write!(f, "shift:{id}"),
        }
    }
}

impl FromStr for ContainerId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "basic" => Ok(Self::Basic),
            "handover" => Ok(Self::Handover),
            _ => match s.strip_prefix("shift:") {
                Some(id) if !id.is_empty() => Ok(Self::Shift(id.to_string())),
                _ => Err(CoreError::InvalidContainer {
                    value: s.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            },
        }
    }
}
