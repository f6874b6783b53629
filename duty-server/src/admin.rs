//! Administrative endpoints for server management.

use axum::{Json, extract::State, http::StatusCode};
use duty_ws::AppState;
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckpointResponse {
    pub status: String,
    pub message: String,
}

/// Checkpoint WAL to the main database file, ensuring durability before a
/// planned shutdown.
pub async fn checkpoint_handler(
    State(state): State<AppState>,
) -> Result<Json<CheckpointResponse>, (StatusCode, String)> {
    info!("Manual checkpoint requested");

    sqlx::query("PRAGMA wal_checkpoint(TRUNCATE)")
        .execute(state.store.pool())
        .await
        .map_err(|e| {
            log::error!("Checkpoint failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    info!("Database checkpoint completed");

    Ok(Json(CheckpointResponse {
        status: "ok".to_string(),
        message: "Database checkpoint completed".to_string(),
    }))
}

/// Trigger a graceful shutdown: connections drain and the serve loop exits.
pub async fn shutdown_handler(State(state): State<AppState>) -> StatusCode {
    info!("Graceful shutdown requested via HTTP");
    state.shutdown.shutdown();
    StatusCode::ACCEPTED
}
