pub mod admin;
pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::board::{
    BoardResponse, ConfigSectionRequest, GroupsSectionRequest, RecordsSectionRequest,
    SavedResponse, StateSectionRequest, TrashSectionRequest,
};
pub use api::error::{ApiError, Result as ApiResult};
pub use error::{Result, ServerError};
pub use routes::build_router;
