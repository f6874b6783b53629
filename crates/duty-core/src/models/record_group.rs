use serde::{Deserialize, Serialize};

/// A named, user-created grouping of work records.
///
/// The implicit "ungrouped" bucket is not a group entity; records without a
/// valid group reference fall into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRecordGroup {
    pub id: String,
    pub title: String,
}

impl WorkRecordGroup {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
