pub mod container_id;
pub mod handover;
pub mod record;
pub mod record_group;
pub mod shift;
pub mod status;
pub mod task;
pub mod trash;
