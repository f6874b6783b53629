use crate::models::handover::HandoverItem;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// An archived handover item awaiting auto-purge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrashedItem {
    #[serde(flatten)]
    pub item: HandoverItem,
    pub trashed_at: DateTime<Utc>,
}

impl TrashedItem {
    pub fn new(item: HandoverItem, trashed_at: DateTime<Utc>) -> Self {
        Self { item, trashed_at }
    }

    pub fn id(&self) -> &str {
        self.item.id()
    }

    /// Whether the entry has outlived the retention window.
    pub fn is_expired(&self, now: DateTime<Utc>, retention_days: u32) -> bool {
        now - self.trashed_at >= TimeDelta::days(i64::from(retention_days))
    }
}
