use crate::models::task::Task;

use serde::{Deserialize, Serialize};

/// A duty shift window and its ordered task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSection {
    pub id: String,
    pub title: String,
    /// Display string, e.g. "08:00 - 12:00".
    pub time_range: String,
    /// Display color for the shift tab.
    pub color: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl ShiftSection {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        time_range: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            time_range: time_range.into(),
            color: color.into(),
            tasks: Vec::new(),
        }
    }
}
