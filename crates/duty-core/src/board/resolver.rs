//! Drag-gesture resolution for the board's task containers.
//!
//! A gesture arrives as `(active task id, drop target)` and resolves to a new
//! arrangement of one or two containers, or to no change at all. Unresolvable
//! references are silent no-ops: a failed drag has no remedy beyond trying
//! again, so nothing is reported.

use crate::board::BoardState;
use crate::models::container_id::ContainerId;

use serde::{Deserialize, Serialize};

/// Where a drag was released. Produced once at the interaction boundary;
/// the resolver never parses sentinel strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DropTarget {
    /// Released over another task.
    Task { id: String },
    /// Released over a container's header / empty body.
    ContainerHeader { container: ContainerId },
    /// Released over a shift tab.
    ShiftTab { shift_id: String },
}

/// Result of a resolved gesture, naming the containers whose ordered lists
/// changed so the caller writes each affected container exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    Unchanged,
    Moved { changed: Vec<ContainerId> },
}

impl DragOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    pub fn changed_containers(&self) -> &[ContainerId] {
        match self {
            Self::Unchanged => &[],
            Self::Moved { changed } => changed,
        }
    }
}

/// Resolve a drag gesture against the board.
///
/// Priority order, first match wins:
/// 1. absent or self target: no-op
/// 2. shift-tab drop (forbidden from handover)
/// 3. target container resolution via task lookup or header
/// 4. handover boundary: moves across it are rejected
/// 5. same container: stable reorder to the over task's index
/// 6. cross container: remove from source, insert at the over task's index
///    (append when the anchor does not resolve)
pub fn resolve_drag(
    board: &mut BoardState,
    active_id: &str,
    over: Option<&DropTarget>,
) -> DragOutcome {
    let Some(over) = over else {
        return DragOutcome::Unchanged;
    };
    if let DropTarget::Task { id } = over
        && id == active_id
    {
        return DragOutcome::Unchanged;
    }

    let Some(source) = board.find_container(active_id) else {
        return DragOutcome::Unchanged;
    };

    if let DropTarget::ShiftTab { shift_id } = over {
        return resolve_shift_tab_drop(board, active_id, &source, shift_id);
    }

    let target = match over {
        DropTarget::Task { id } => board.find_container(id),
        DropTarget::ContainerHeader { container } => {
            board.container_exists(container).then(|| container.clone())
        }
        DropTarget::ShiftTab { .. } => unreachable!("handled above"),
    };
    let Some(target) = target else {
        return DragOutcome::Unchanged;
    };

    // Handover items never cross into basic/shift containers, and vice versa.
    if source.is_handover() != target.is_handover() {
        return DragOutcome::Unchanged;
    }

    if source == target {
        // A header drop on the own container has no anchor index: no-op.
        let DropTarget::Task { id: over_id } = over else {
            return DragOutcome::Unchanged;
        };
        if board.reorder_in_container(&source, active_id, over_id) {
            DragOutcome::Moved {
                changed: vec![source],
            }
        } else {
            DragOutcome::Unchanged
        }
    } else {
        // Both halves of the move are derived from the pre-move snapshot:
        // containers are disjoint, so removing from the source cannot shift
        // the target's anchor index.
        let insert_at = match over {
            DropTarget::Task { id } => board.task_index(&target, id),
            _ => None,
        };
        let Some(task) = board.remove_task(&source, active_id) else {
            return DragOutcome::Unchanged;
        };
        board.insert_task(&target, insert_at, task);
        DragOutcome::Moved {
            changed: vec![source, target],
        }
    }
}

/// Dropping on a shift tab appends the task to that shift's list. Handover
/// items may not move into shift containers; a shift-to-its-own-tab drop is
/// a no-op. Both shift lists are updated under one borrow of the aggregate,
/// so no intermediate arrangement is observable.
fn resolve_shift_tab_drop(
    board: &mut BoardState,
    active_id: &str,
    source: &ContainerId,
    shift_id: &str,
) -> DragOutcome {
    if source.is_handover() {
        return DragOutcome::Unchanged;
    }
    let target = ContainerId::shift(shift_id);
    if !board.container_exists(&target) {
        return DragOutcome::Unchanged;
    }
    if *source == target {
        return DragOutcome::Unchanged;
    }

    let Some(task) = board.remove_task(source, active_id) else {
        return DragOutcome::Unchanged;
    };
    board.insert_task(&target, None, task);
    DragOutcome::Moved {
        changed: vec![source.clone(), target],
    }
}
