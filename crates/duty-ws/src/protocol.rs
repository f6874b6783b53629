//! The JSON message protocol spoken over the board WebSocket.
//!
//! Clients send `ClientMessage` text frames and receive `ServerMessage`
//! frames. Change broadcasts carry a whole section (the last-write-wins
//! unit); their `message_id` is the id of the request that caused the
//! change, so the originating client can skip its own echo.

use duty_core::records::RecordSet;
use duty_core::{
    BoardState, ContainerId, DropTarget, HandoverItem, RecordDragSource, RecordDropTarget,
    ShiftSection, StatusConfig, Task, TaskPatch, TrashedItem, WorkRecord, WorkRecordGroup,
};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientMessage {
    #[serde(default)]
    pub message_id: String,
    pub payload: ClientPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientPayload {
    GetBoard,

    // Drag gestures (the resolver surface)
    #[serde(rename_all = "camelCase")]
    DragEnd {
        active_id: String,
        #[serde(default)]
        over: Option<DropTarget>,
    },
    RecordDragEnd {
        active: RecordDragSource,
        #[serde(default)]
        over: Option<RecordDropTarget>,
    },

    // Task lifecycle
    AddTask {
        container: ContainerId,
    },
    #[serde(rename_all = "camelCase")]
    UpdateTask {
        container: ContainerId,
        task_id: String,
        patch: TaskPatch,
    },
    #[serde(rename_all = "camelCase")]
    DeleteTask {
        container: ContainerId,
        task_id: String,
    },

    // Handover and trash
    #[serde(rename_all = "camelCase")]
    SetHandoverStatus {
        task_id: String,
        status_id: String,
    },
    #[serde(rename_all = "camelCase")]
    RestoreTrashed {
        task_id: String,
    },
    ClearTrash,

    // Checkbox state
    #[serde(rename_all = "camelCase")]
    ToggleCheck {
        shift_id: String,
        task_id: String,
    },
    #[serde(rename_all = "camelCase")]
    ClearShiftChecks {
        shift_id: String,
    },

    // Status editor
    ReplaceStatuses {
        statuses: Vec<StatusConfig>,
    },
    ResetConfig,

    // Work records
    #[serde(rename_all = "camelCase")]
    AddRecord {
        #[serde(default)]
        group_id: Option<String>,
    },
    UpdateRecord {
        record: WorkRecord,
    },
    #[serde(rename_all = "camelCase")]
    DeleteRecord {
        record_id: String,
    },
    AddGroup,
    #[serde(rename_all = "camelCase")]
    RenameGroup {
        group_id: String,
        title: String,
    },
    #[serde(rename_all = "camelCase")]
    DeleteGroup {
        group_id: String,
    },

    Ping {
        #[serde(default)]
        timestamp: i64,
    },
}

impl ClientPayload {
    /// Handler name for logging and metrics.
    pub fn handler_name(&self) -> &'static str {
        match self {
            Self::GetBoard => "GetBoard",
            Self::DragEnd { .. } => "DragEnd",
            Self::RecordDragEnd { .. } => "RecordDragEnd",
            Self::AddTask { .. } => "AddTask",
            Self::UpdateTask { .. } => "UpdateTask",
            Self::DeleteTask { .. } => "DeleteTask",
            Self::SetHandoverStatus { .. } => "SetHandoverStatus",
            Self::RestoreTrashed { .. } => "RestoreTrashed",
            Self::ClearTrash => "ClearTrash",
            Self::ToggleCheck { .. } => "ToggleCheck",
            Self::ClearShiftChecks { .. } => "ClearShiftChecks",
            Self::ReplaceStatuses { .. } => "ReplaceStatuses",
            Self::ResetConfig => "ResetConfig",
            Self::AddRecord { .. } => "AddRecord",
            Self::UpdateRecord { .. } => "UpdateRecord",
            Self::DeleteRecord { .. } => "DeleteRecord",
            Self::AddGroup => "AddGroup",
            Self::RenameGroup { .. } => "RenameGroup",
            Self::DeleteGroup { .. } => "DeleteGroup",
            Self::Ping { .. } => "Ping",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerMessage {
    pub message_id: String,
    pub timestamp: i64,
    pub payload: ServerPayload,
}

impl ServerMessage {
    pub fn new(message_id: impl Into<String>, payload: ServerPayload) -> Self {
        Self {
            message_id: message_id.into(),
            timestamp: chrono::Utc::now().timestamp(),
            payload,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerPayload {
    Board {
        board: BoardState,
        records: RecordSet,
    },
    SectionChanged {
        section: SectionPayload,
    },
    /// Direct reply to an operation. A resolver no-op acks with
    /// `changed: false` and nothing is broadcast.
    Ack {
        changed: bool,
    },
    /// Reply to the Add* operations, naming the created entity.
    Created {
        id: String,
    },
    Error(WireError),
    Pong {
        timestamp: i64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireError {
    pub code: String,
    pub message: String,
}

/// One broadcastable board section: the unit of last-write-wins replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "camelCase")]
pub enum SectionPayload {
    #[serde(rename_all = "camelCase")]
    Config {
        basic_tasks: Vec<Task>,
        shift_sections: Vec<ShiftSection>,
        status_configs: Vec<StatusConfig>,
    },
    #[serde(rename_all = "camelCase")]
    State {
        checked_items: BTreeMap<String, bool>,
        handover_items: Vec<HandoverItem>,
    },
    Records {
        records: Vec<WorkRecord>,
    },
    Groups {
        groups: Vec<WorkRecordGroup>,
    },
    #[serde(rename_all = "camelCase")]
    Trash {
        trashed_items: Vec<TrashedItem>,
    },
}

impl SectionPayload {
    pub fn config(board: &BoardState) -> Self {
        Self::Config {
            basic_tasks: board.basic_tasks.clone(),
            shift_sections: board.shift_sections.clone(),
            status_configs: board.status_configs.clone(),
        }
    }

    pub fn state(board: &BoardState) -> Self {
        Self::State {
            checked_items: board.checked_items.clone(),
            handover_items: board.handover_items.clone(),
        }
    }

    pub fn records(set: &RecordSet) -> Self {
        Self::Records {
            records: set.records.clone(),
        }
    }

    pub fn groups(set: &RecordSet) -> Self {
        Self::Groups {
            groups: set.groups.clone(),
        }
    }

    pub fn trash(board: &BoardState) -> Self {
        Self::Trash {
            trashed_items: board.trashed_items.clone(),
        }
    }

    /// Section name for logging and metrics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::State { .. } => "state",
            Self::Records { .. } => "records",
            Self::Groups { .. } => "groups",
            Self::Trash { .. } => "trash",
        }
    }
}
