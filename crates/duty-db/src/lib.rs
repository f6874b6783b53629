pub mod board_store;
pub mod connection;
pub mod error;
pub mod repositories;

pub use board_store::BoardStore;
pub use connection::board_pool::{create_memory_pool, create_pool};
pub use error::{DbError, Result};
pub use repositories::checked_item_repository::CheckedItemRepository;
pub use repositories::shift_repository::ShiftRepository;
pub use repositories::status_repository::StatusRepository;
pub use repositories::task_repository::TaskRepository;
pub use repositories::trash_repository::TrashRepository;
pub use repositories::work_record_group_repository::WorkRecordGroupRepository;
pub use repositories::work_record_repository::WorkRecordRepository;
