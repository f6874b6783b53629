//! Work-record templates: a second, independent sortable pool.
//!
//! Records form one flat ordered list; named groups plus an implicit
//! "ungrouped" bucket partition it for display, and the groups themselves are
//! a second sortable axis. The drag resolver here mirrors the board resolver:
//! absent/self/unresolvable targets are silent no-ops.

use crate::models::record::WorkRecord;
use crate::models::record_group::WorkRecordGroup;
use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_RECORD_TITLE: &str = "Untitled";
pub const PLACEHOLDER_GROUP_TITLE: &str = "New group";

/// A group reference as used by drop targets: a user-created group or the
/// implicit ungrouped bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum GroupRef {
    Group(String),
    Ungrouped,
}

/// What is being dragged on the records board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RecordDragSource {
    Record { id: String },
    GroupHeader { group: GroupRef },
}

/// Where a records-board drag was released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RecordDropTarget {
    Record { id: String },
    GroupHeader { group: GroupRef },
    /// A group's (possibly empty) content area: assigns membership without
    /// needing another record as an anchor.
    GroupContent { group: GroupRef },
}

/// Which of the two persisted lists a resolved gesture changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordDragOutcome {
    Unchanged,
    RecordsChanged,
    GroupsChanged,
}

impl RecordDragOutcome {
    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// The record pool and its groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    pub records: Vec<WorkRecord>,
    pub groups: Vec<WorkRecordGroup>,
}

impl RecordSet {
    pub fn new(records: Vec<WorkRecord>, groups: Vec<WorkRecordGroup>) -> Self {
        Self { records, groups }
    }

    /// The bucket a record currently displays in: its `group_id` when that
    /// group exists, else ungrouped (dangling references count as ungrouped).
    pub fn effective_group(&self, record: &WorkRecord) -> GroupRef {
        match &record.group_id {
            Some(gid) if self.groups.iter().any(|g| g.id == *gid) => GroupRef::Group(gid.clone()),
            _ => GroupRef::Ungrouped,
        }
    }

    /// Ordered record ids of one bucket, derived from the flat order.
    pub fn record_ids_in(&self, group: &GroupRef) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| self.effective_group(r) == *group)
            .map(|r| r.id.clone())
            .collect()
    }

    fn group_exists(&self, id: &str) -> bool {
        self.groups.iter().any(|g| g.id == id)
    }

    /// Membership value for a drop on the given bucket; `None` when the
    /// bucket does not resolve to anything assignable.
    fn membership_for(&self, group: &GroupRef) -> Option<Option<String>> {
        match group {
            GroupRef::Ungrouped => Some(None),
            GroupRef::Group(gid) if self.group_exists(gid) => Some(Some(gid.clone())),
            GroupRef::Group(_) => None,
        }
    }

    // ----------------------------------------------------------------- CRUD

    /// Create a placeholder record, appended to the flat list.
    pub fn add_record(&mut self, record_id: String, group: Option<String>) {
        let mut record = WorkRecord::new(record_id, PLACEHOLDER_RECORD_TITLE);
        record.group_id = group.filter(|gid| self.group_exists(gid));
        self.records.push(record);
    }

    /// Replace an existing record or append a new one (the editor saves
    /// whole records).
    pub fn upsert_record(&mut self, record: WorkRecord) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    #[track_caller]
    pub fn delete_record(&mut self, record_id: &str) -> CoreErrorResult<()> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id == record_id)
            .ok_or_else(|| CoreError::UnknownRecord {
                id: record_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        self.records.remove(idx);
        Ok(())
    }

    pub fn add_group(&mut self, group_id: String) {
        self.groups
            .push(WorkRecordGroup::new(group_id, PLACEHOLDER_GROUP_TITLE));
    }

    #[track_caller]
    pub fn rename_group(&mut self, group_id: &str, title: String) -> CoreErrorResult<()> {
        match self.groups.iter_mut().find(|g| g.id == group_id) {
            Some(group) => {
                group.title = title;
                Ok(())
            }
            None => Err(CoreError::UnknownGroup {
                id: group_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Delete a group; its records become ungrouped.
    #[track_caller]
    pub fn delete_group(&mut self, group_id: &str) -> CoreErrorResult<()> {
        let idx = self
            .groups
            .iter()
            .position(|g| g.id == group_id)
            .ok_or_else(|| CoreError::UnknownGroup {
                id: group_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        self.groups.remove(idx);
        for record in &mut self.records {
            if record.group_id.as_deref() == Some(group_id) {
                record.group_id = None;
            }
        }
        Ok(())
    }
}

/// Resolve a records-board drag gesture.
pub fn resolve_record_drag(
    set: &mut RecordSet,
    active: &RecordDragSource,
    over: Option<&RecordDropTarget>,
) -> RecordDragOutcome {
    let Some(over) = over else {
        return RecordDragOutcome::Unchanged;
    };

    match active {
        RecordDragSource::GroupHeader { group } => resolve_group_header_drag(set, group, over),
        RecordDragSource::Record { id } => resolve_record_item_drag(set, id, over),
    }
}

/// Group headers reorder only against other group headers, and the implicit
/// ungrouped bucket takes part in neither end of that axis.
fn resolve_group_header_drag(
    set: &mut RecordSet,
    active: &GroupRef,
    over: &RecordDropTarget,
) -> RecordDragOutcome {
    let RecordDropTarget::GroupHeader { group: over_group } = over else {
        return RecordDragOutcome::Unchanged;
    };
    let (GroupRef::Group(active_id), GroupRef::Group(over_id)) = (active, over_group) else {
        return RecordDragOutcome::Unchanged;
    };
    if active_id == over_id {
        return RecordDragOutcome::Unchanged;
    }

    let Some(from) = set.groups.iter().position(|g| g.id == *active_id) else {
        return RecordDragOutcome::Unchanged;
    };
    let Some(to) = set.groups.iter().position(|g| g.id == *over_id) else {
        return RecordDragOutcome::Unchanged;
    };
    let group = set.groups.remove(from);
    set.groups.insert(to, group);
    RecordDragOutcome::GroupsChanged
}

fn resolve_record_item_drag(
    set: &mut RecordSet,
    active_id: &str,
    over: &RecordDropTarget,
) -> RecordDragOutcome {
    match over {
        RecordDropTarget::GroupHeader { .. } => RecordDragOutcome::Unchanged,

        // Dropping on a group's content area assigns membership directly; no
        // anchor record is needed, so this works for empty groups too.
        RecordDropTarget::GroupContent { group } => {
            let Some(membership) = set.membership_for(group) else {
                return RecordDragOutcome::Unchanged;
            };
            assign_membership(set, active_id, membership)
        }

        RecordDropTarget::Record { id: over_id } => {
            if over_id == active_id {
                return RecordDragOutcome::Unchanged;
            }
            let Some(active_record) = set.records.iter().find(|r| r.id == active_id) else {
                return RecordDragOutcome::Unchanged;
            };
            let Some(over_record) = set.records.iter().find(|r| r.id == *over_id) else {
                return RecordDragOutcome::Unchanged;
            };

            let active_group = set.effective_group(active_record);
            let over_group = set.effective_group(over_record);

            if active_group == over_group {
                reorder_within_group(set, &active_group, active_id, over_id)
            } else {
                // Cross-group record drops reassign membership only; the
                // record keeps its flat-list slot.
                let Some(membership) = set.membership_for(&over_group) else {
                    return RecordDragOutcome::Unchanged;
                };
                assign_membership(set, active_id, membership)
            }
        }
    }
}

fn assign_membership(
    set: &mut RecordSet,
    record_id: &str,
    membership: Option<String>,
) -> RecordDragOutcome {
    let Some(record) = set.records.iter_mut().find(|r| r.id == record_id) else {
        return RecordDragOutcome::Unchanged;
    };
    if record.group_id == membership {
        return RecordDragOutcome::Unchanged;
    }
    record.group_id = membership;
    RecordDragOutcome::RecordsChanged
}

/// Stable reorder within one bucket. The bucket's records are reordered and
/// spliced back into the flat list at the bucket's original index slots, so
/// records of every other bucket keep their flat positions.
fn reorder_within_group(
    set: &mut RecordSet,
    group: &GroupRef,
    active_id: &str,
    over_id: &str,
) -> RecordDragOutcome {
    let slots: Vec<usize> = set
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| set.effective_group(r) == *group)
        .map(|(i, _)| i)
        .collect();

    let mut bucket: Vec<WorkRecord> = slots.iter().map(|&i| set.records[i].clone()).collect();
    let Some(from) = bucket.iter().position(|r| r.id == active_id) else {
        return RecordDragOutcome::Unchanged;
    };
    let Some(to) = bucket.iter().position(|r| r.id == over_id) else {
        return RecordDragOutcome::Unchanged;
    };
    if from == to {
        return RecordDragOutcome::Unchanged;
    }
    let record = bucket.remove(from);
    bucket.insert(to, record);

    for (slot, record) in slots.into_iter().zip(bucket) {
        set.records[slot] = record;
    }
    RecordDragOutcome::RecordsChanged
}
