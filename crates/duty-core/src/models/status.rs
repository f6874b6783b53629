use serde::{Deserialize, Serialize};

/// A handover status (label + display color).
///
/// Statuses form one ordered list edited by whole-list replacement. Moving a
/// handover item into an `is_done` status archives it to the trash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusConfig {
    pub id: String,
    pub label: String,
    pub color: String,
    #[serde(default)]
    pub is_done: bool,
}

impl StatusConfig {
    pub fn new(id: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: color.into(),
            is_done: false,
        }
    }

    pub fn done(id: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        let mut status = Self::new(id, label, color);
        status.is_done = true;
        status
    }
}
