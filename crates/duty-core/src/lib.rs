pub mod board;
pub mod defaults;
pub mod error;
pub mod models;
pub mod records;

pub use board::resolver::{DragOutcome, DropTarget, resolve_drag};
pub use board::{BoardState, HandoverStatusChange, PLACEHOLDER_LABEL, namespaced_check_key};
pub use error::{CoreError, Result};
pub use models::container_id::ContainerId;
pub use models::handover::HandoverItem;
pub use models::record::WorkRecord;
pub use models::record_group::WorkRecordGroup;
pub use models::shift::ShiftSection;
pub use models::status::StatusConfig;
pub use models::task::{Task, TaskPatch};
pub use models::trash::TrashedItem;
pub use records::{
    GroupRef, RecordDragOutcome, RecordDragSource, RecordDropTarget, RecordSet,
    resolve_record_drag,
};

#[cfg(test)]
mod tests;
