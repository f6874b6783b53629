pub mod resolver;

use crate::models::container_id::ContainerId;
use crate::models::handover::HandoverItem;
use crate::models::shift::ShiftSection;
use crate::models::status::StatusConfig;
use crate::models::task::{Task, TaskPatch};
use crate::models::trash::TrashedItem;
use crate::{CoreError, Result as CoreErrorResult};

use std::collections::BTreeMap;
use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Label given to freshly created tasks; clients put them straight into edit
/// mode.
pub const PLACEHOLDER_LABEL: &str = "New item";

/// The whole duty board.
///
/// All sibling containers live in one owned aggregate so a gesture that
/// touches two containers mutates them under a single borrow: there is no
/// observable state in which a task exists in neither or both lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub basic_tasks: Vec<Task>,
    pub shift_sections: Vec<ShiftSection>,
    pub handover_items: Vec<HandoverItem>,
    pub status_configs: Vec<StatusConfig>,
    /// Checkbox state. Basic tasks are keyed `"{shift_id}::{task_id}"` so
    /// completion is tracked per shift window; shift tasks use the raw id.
    pub checked_items: BTreeMap<String, bool>,
    pub trashed_items: Vec<TrashedItem>,
}

/// What `set_handover_status` did, so callers know which sections changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoverStatusChange {
    /// Status updated in place; only the handover list changed.
    Updated,
    /// Done status: the item moved from the handover list to the trash.
    Archived,
}

/// Checkbox-state key for a task. Identity is never namespaced; only the
/// completion flag is.
pub fn namespaced_check_key(shift_id: &str, task_id: &str) -> String {
    format!("{shift_id}::{task_id}")
}

impl BoardState {
    /// A board seeded with the built-in statuses, shift windows and basic
    /// tasks.
    pub fn with_defaults() -> Self {
        Self {
            basic_tasks: crate::defaults::default_basic_tasks(),
            shift_sections: crate::defaults::default_shift_sections(),
            handover_items: Vec::new(),
            status_configs: crate::defaults::default_statuses(),
            checked_items: BTreeMap::new(),
            trashed_items: Vec::new(),
        }
    }

    // ---------------------------------------------------------------- lookup

    /// The container currently holding the task, if any.
    pub fn find_container(&self, task_id: &str) -> Option<ContainerId> {
        if self.basic_tasks.iter().any(|t| t.id == task_id) {
            return Some(ContainerId::Basic);
        }
        if self.handover_items.iter().any(|i| i.id() == task_id) {
            return Some(ContainerId::Handover);
        }
        self.shift_sections
            .iter()
            .find(|s| s.tasks.iter().any(|t| t.id == task_id))
            .map(|s| ContainerId::Shift(s.id.clone()))
    }

    pub fn container_exists(&self, container: &ContainerId) -> bool {
        match container {
            ContainerId::Basic | ContainerId::Handover => true,
            ContainerId::Shift(id) => self.shift_sections.iter().any(|s| s.id == *id),
        }
    }

    pub fn shift_section(&self, shift_id: &str) -> Option<&ShiftSection> {
        self.shift_sections.iter().find(|s| s.id == shift_id)
    }

    fn shift_section_mut(&mut self, shift_id: &str) -> Option<&mut ShiftSection> {
        self.shift_sections.iter_mut().find(|s| s.id == shift_id)
    }

    /// Ordered task ids of a container (handover items included).
    pub fn task_ids(&self, container: &ContainerId) -> Option<Vec<String>> {
        match container {
            ContainerId::Basic => Some(self.basic_tasks.iter().map(|t| t.id.clone()).collect()),
            ContainerId::Handover => Some(
                self.handover_items
                    .iter()
                    .map(|i| i.id().to_string())
                    .collect(),
            ),
            ContainerId::Shift(id) => self
                .shift_section(id)
                .map(|s| s.tasks.iter().map(|t| t.id.clone()).collect()),
        }
    }

    /// Total task count over all containers (trash excluded).
    pub fn task_count(&self) -> usize {
        self.basic_tasks.len()
            + self.handover_items.len()
            + self
                .shift_sections
                .iter()
                .map(|s| s.tasks.len())
                .sum::<usize>()
    }

    // -------------------------------------------- container-level mutation

    /// Index of a plain task within a basic/shift container.
    pub(crate) fn task_index(&self, container: &ContainerId, task_id: &str) -> Option<usize> {
        match container {
            ContainerId::Basic => self.basic_tasks.iter().position(|t| t.id == task_id),
            ContainerId::Shift(id) => self
                .shift_section(id)?
                .tasks
                .iter()
                .position(|t| t.id == task_id),
            ContainerId::Handover => None,
        }
    }

    /// Remove a plain task from a basic/shift container.
    pub(crate) fn remove_task(&mut self, container: &ContainerId, task_id: &str) -> Option<Task> {
        match container {
            ContainerId::Basic => {
                let idx = self.basic_tasks.iter().position(|t| t.id == task_id)?;
                Some(self.basic_tasks.remove(idx))
            }
            ContainerId::Shift(id) => {
                let section = self.shift_section_mut(id)?;
                let idx = section.tasks.iter().position(|t| t.id == task_id)?;
                Some(section.tasks.remove(idx))
            }
            ContainerId::Handover => None,
        }
    }

    /// Insert a plain task into a basic/shift container, appending when no
    /// index is given.
    pub(crate) fn insert_task(
        &mut self,
        container: &ContainerId,
        index: Option<usize>,
        task: Task,
    ) {
        let tasks = match container {
            ContainerId::Basic => &mut self.basic_tasks,
            ContainerId::Shift(id) => match self.shift_section_mut(id) {
                Some(section) => &mut section.tasks,
                None => return,
            },
            ContainerId::Handover => return,
        };
        match index {
            Some(idx) if idx <= tasks.len() => tasks.insert(idx, task),
            _ => tasks.push(task),
        }
    }

    /// Stable single-element move within a container: the active task is
    /// relocated to the over task's index, all other tasks keep their
    /// relative order. Returns false (and leaves the board untouched) when
    /// either id does not resolve in this container.
    pub(crate) fn reorder_in_container(
        &mut self,
        container: &ContainerId,
        active_id: &str,
        over_id: &str,
    ) -> bool {
        match container {
            ContainerId::Basic => {
                stable_move_by(&mut self.basic_tasks, |t| t.id.as_str(), active_id, over_id)
            }
            ContainerId::Handover => stable_move_by(
                &mut self.handover_items,
                |i| i.task.id.as_str(),
                active_id,
                over_id,
            ),
            ContainerId::Shift(id) => match self.shift_section_mut(id) {
                Some(section) => {
                    stable_move_by(&mut section.tasks, |t| t.id.as_str(), active_id, over_id)
                }
                None => false,
            },
        }
    }

    // -------------------------------------------------------- task lifecycle

    /// Create a placeholder task in the container. Handover tasks are
    /// prepended and take the first status; everything else is appended.
    #[track_caller]
    pub fn add_task(&mut self, container: &ContainerId, task_id: String) -> CoreErrorResult<()> {
        let task = Task::new(task_id, PLACEHOLDER_LABEL);
        match container {
            ContainerId::Basic => self.basic_tasks.push(task),
            ContainerId::Handover => {
                let status_id = self
                    .status_configs
                    .first()
                    .map(|s| s.id.clone())
                    .unwrap_or_default();
                self.handover_items.insert(0, HandoverItem::new(task, status_id));
            }
            ContainerId::Shift(id) => match self.shift_section_mut(id) {
                Some(section) => section.tasks.push(task),
                None => {
                    return Err(CoreError::UnknownContainer {
                        container: container.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            },
        }
        Ok(())
    }

    #[track_caller]
    pub fn update_task(
        &mut self,
        container: &ContainerId,
        task_id: &str,
        patch: TaskPatch,
    ) -> CoreErrorResult<()> {
        let task = match container {
            ContainerId::Basic => self.basic_tasks.iter_mut().find(|t| t.id == task_id),
            ContainerId::Handover => self
                .handover_items
                .iter_mut()
                .find(|i| i.task.id == task_id)
                .map(|i| &mut i.task),
            ContainerId::Shift(id) => self
                .shift_section_mut(id)
                .and_then(|s| s.tasks.iter_mut().find(|t| t.id == task_id)),
        };
        match task {
            Some(task) => {
                task.apply_patch(patch);
                Ok(())
            }
            None => Err(CoreError::UnknownTask {
                id: task_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    #[track_caller]
    pub fn delete_task(&mut self, container: &ContainerId, task_id: &str) -> CoreErrorResult<()> {
        let removed = match container {
            ContainerId::Handover => {
                let idx = self.handover_items.iter().position(|i| i.id() == task_id);
                idx.map(|i| {
                    self.handover_items.remove(i);
                })
            }
            _ => self.remove_task(container, task_id).map(|_| ()),
        };
        removed.ok_or_else(|| CoreError::UnknownTask {
            id: task_id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    // -------------------------------------------------- handover and trash

    /// Set a handover item's status. A done status archives the item: it
    /// leaves the handover list and lands at the front of the trash with the
    /// given timestamp.
    #[track_caller]
    pub fn set_handover_status(
        &mut self,
        task_id: &str,
        status_id: &str,
        now: DateTime<Utc>,
    ) -> CoreErrorResult<HandoverStatusChange> {
        let status = self
            .status_configs
            .iter()
            .find(|s| s.id == status_id)
            .ok_or_else(|| CoreError::UnknownStatus {
                id: status_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        let is_done = status.is_done;

        let idx = self
            .handover_items
            .iter()
            .position(|i| i.id() == task_id)
            .ok_or_else(|| CoreError::UnknownTask {
                id: task_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if is_done {
            let mut item = self.handover_items.remove(idx);
            item.status_id = status_id.to_string();
            self.trashed_items.insert(0, TrashedItem::new(item, now));
            Ok(HandoverStatusChange::Archived)
        } else {
            self.handover_items[idx].status_id = status_id.to_string();
            Ok(HandoverStatusChange::Updated)
        }
    }

    /// Return a trashed item to the front of the handover list with the
    /// first non-done status.
    #[track_caller]
    pub fn restore_trashed(&mut self, task_id: &str) -> CoreErrorResult<()> {
        let idx = self
            .trashed_items
            .iter()
            .position(|i| i.id() == task_id)
            .ok_or_else(|| CoreError::UnknownTask {
                id: task_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        let trashed = self.trashed_items.remove(idx);

        let status_id = self
            .status_configs
            .iter()
            .find(|s| !s.is_done)
            .or(self.status_configs.first())
            .map(|s| s.id.clone())
            .unwrap_or_default();

        self.handover_items
            .insert(0, HandoverItem::new(trashed.item.task, status_id));
        Ok(())
    }

    pub fn clear_trash(&mut self) {
        self.trashed_items.clear();
    }

    /// Drop trash entries older than the retention window. Returns how many
    /// were removed.
    pub fn purge_trash(&mut self, now: DateTime<Utc>, retention_days: u32) -> usize {
        let before = self.trashed_items.len();
        self.trashed_items
            .retain(|i| !i.is_expired(now, retention_days));
        before - self.trashed_items.len()
    }

    // ------------------------------------------------------- checkbox state

    /// Checkbox key for a task as seen from the given shift window.
    #[track_caller]
    pub fn check_key(&self, shift_id: &str, task_id: &str) -> CoreErrorResult<String> {
        match self.find_container(task_id) {
            Some(ContainerId::Basic) => Ok(namespaced_check_key(shift_id, task_id)),
            Some(ContainerId::Shift(_)) => Ok(task_id.to_string()),
            _ => Err(CoreError::UnknownTask {
                id: task_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Flip a task's checkbox. Returns the new checked value. Unchecking
    /// removes the entry; absence means unchecked.
    #[track_caller]
    pub fn toggle_check(&mut self, shift_id: &str, task_id: &str) -> CoreErrorResult<bool> {
        let key = self.check_key(shift_id, task_id)?;
        let checked = !self.checked_items.get(&key).copied().unwrap_or(false);
        if checked {
            self.checked_items.insert(key, true);
        } else {
            self.checked_items.remove(&key);
        }
        Ok(checked)
    }

    /// Clear every checkbox of one shift window: the namespaced keys of all
    /// basic tasks plus the raw keys of the shift's own tasks.
    #[track_caller]
    pub fn clear_shift_checks(&mut self, shift_id: &str) -> CoreErrorResult<()> {
        let section = self
            .shift_section(shift_id)
            .ok_or_else(|| CoreError::UnknownContainer {
                container: ContainerId::shift(shift_id).to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        let mut keys: Vec<String> = section.tasks.iter().map(|t| t.id.clone()).collect();
        keys.extend(
            self.basic_tasks
                .iter()
                .map(|t| namespaced_check_key(shift_id, &t.id)),
        );
        for key in keys {
            self.checked_items.remove(&key);
        }
        Ok(())
    }

    // ------------------------------------------------------------- statuses

    /// Whole-list status replacement. The list may never become empty;
    /// handover items referencing a removed status fall back to the first
    /// remaining one.
    #[track_caller]
    pub fn replace_statuses(&mut self, statuses: Vec<StatusConfig>) -> CoreErrorResult<()> {
        if statuses.is_empty() {
            return Err(CoreError::Validation {
                message: "status list cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        let fallback = statuses[0].id.clone();
        self.status_configs = statuses;
        for item in &mut self.handover_items {
            if !self.status_configs.iter().any(|s| s.id == item.status_id) {
                item.status_id = fallback.clone();
            }
        }
        Ok(())
    }

    /// Restore the built-in basic tasks, shift sections and statuses, and
    /// clear the handover list. Checkbox state and trash are kept.
    pub fn reset_config(&mut self) {
        self.basic_tasks = crate::defaults::default_basic_tasks();
        self.shift_sections = crate::defaults::default_shift_sections();
        self.status_configs = crate::defaults::default_statuses();
        self.handover_items.clear();
    }
}

/// `arrayMove`: remove the element matching `active_id` and re-insert it at
/// the index of `over_id`, shifting everything in between by one.
fn stable_move_by<T, F>(items: &mut Vec<T>, key: F, active_id: &str, over_id: &str) -> bool
where
    F: Fn(&T) -> &str,
{
    let Some(from) = items.iter().position(|t| key(t) == active_id) else {
        return false;
    };
    let Some(to) = items.iter().position(|t| key(t) == over_id) else {
        return false;
    };
    if from == to {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}
