use serde::{Deserialize, Serialize};

/// A reusable work-record template (copy-paste text plus optional links).
///
/// All records live in one flat ordered list; per-group ordering is derived
/// from the flat order. A `group_id` that no longer matches an existing group
/// counts as ungrouped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Newline-separated URLs.
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
}

impl WorkRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: String::new(),
            link: None,
            group_id: None,
        }
    }
}
