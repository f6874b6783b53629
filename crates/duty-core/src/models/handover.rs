use crate::models::task::Task;

use serde::{Deserialize, Serialize};

/// A handover entry: a task carrying a status reference.
///
/// Handover items only ever live in the handover container; the resolver
/// rejects moves across the handover boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoverItem {
    #[serde(flatten)]
    pub task: Task,
    pub status_id: String,
}

impl HandoverItem {
    pub fn new(task: Task, status_id: impl Into<String>) -> Self {
        Self {
            task,
            status_id: status_id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.task.id
    }
}
