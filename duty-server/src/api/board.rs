//! The HTTP snapshot mirror: whole-section reads and last-write-wins
//! replacement writes, each followed by a change broadcast to the
//! WebSocket subscribers.

use crate::api::error::{ApiError, Result as ApiResult};

use duty_core::records::RecordSet;
use duty_core::{
    BoardState, HandoverItem, ShiftSection, StatusConfig, Task, TrashedItem, WorkRecord,
    WorkRecordGroup,
};
use duty_ws::AppState;
use duty_ws::protocol::{SectionPayload, ServerMessage, ServerPayload};
use duty_ws::BroadcastMessage;

use std::collections::BTreeMap;

use axum::{Json, extract::State, http::HeaderMap};
use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub board: BoardState,
    pub records: RecordSet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSectionRequest {
    #[serde(default)]
    pub basic_tasks: Vec<Task>,
    #[serde(default)]
    pub shift_sections: Vec<ShiftSection>,
    pub status_configs: Vec<StatusConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSectionRequest {
    #[serde(default)]
    pub checked_items: BTreeMap<String, bool>,
    #[serde(default)]
    pub handover_items: Vec<HandoverItem>,
}

#[derive(Debug, Deserialize)]
pub struct RecordsSectionRequest {
    #[serde(default)]
    pub records: Vec<WorkRecord>,
}

#[derive(Debug, Deserialize)]
pub struct GroupsSectionRequest {
    #[serde(default)]
    pub groups: Vec<WorkRecordGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrashSectionRequest {
    #[serde(default)]
    pub trashed_items: Vec<TrashedItem>,
}

#[derive(Debug, Serialize)]
pub struct SavedResponse {
    pub status: &'static str,
}

const SAVED: SavedResponse = SavedResponse { status: "ok" };

/// GET /api/board - the full board snapshot. Expired trash is purged on the
/// way out, so a reload never shows entries past the retention window.
pub async fn get_board(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<BoardResponse>> {
    require_key(&state, &headers)?;

    let mut board = state.store.load_board().await?;
    let purged = board.purge_trash(Utc::now(), state.trash.retention_days);
    if purged > 0 {
        state.store.save_trash(&board.trashed_items).await?;
        info!("Purged {purged} expired trash entries on load");
    }
    let records = state.store.load_records().await?;

    Ok(Json(BoardResponse { board, records }))
}

/// PUT /api/board/config - replace basic tasks, shift sections and statuses.
pub async fn put_config(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ConfigSectionRequest>,
) -> ApiResult<Json<SavedResponse>> {
    require_key(&state, &headers)?;

    if request.status_configs.is_empty() {
        return Err(ApiError::Validation(
            "statusConfigs cannot be empty".to_string(),
        ));
    }

    state
        .store
        .save_config(
            &request.basic_tasks,
            &request.shift_sections,
            &request.status_configs,
        )
        .await?;

    broadcast(
        &state,
        SectionPayload::Config {
            basic_tasks: request.basic_tasks,
            shift_sections: request.shift_sections,
            status_configs: request.status_configs,
        },
    );

    info!("Replaced config section via HTTP");
    Ok(Json(SAVED))
}

/// PUT /api/board/state - replace the checked map and handover list.
pub async fn put_state(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<StateSectionRequest>,
) -> ApiResult<Json<SavedResponse>> {
    require_key(&state, &headers)?;

    state
        .store
        .save_state(&request.checked_items, &request.handover_items)
        .await?;

    broadcast(
        &state,
        SectionPayload::State {
            checked_items: request.checked_items,
            handover_items: request.handover_items,
        },
    );

    info!("Replaced state section via HTTP");
    Ok(Json(SAVED))
}

/// PUT /api/board/records - replace the flat work-record list.
pub async fn put_records(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<RecordsSectionRequest>,
) -> ApiResult<Json<SavedResponse>> {
    require_key(&state, &headers)?;

    state.store.save_records(&request.records).await?;

    broadcast(
        &state,
        SectionPayload::Records {
            records: request.records,
        },
    );

    info!("Replaced records section via HTTP");
    Ok(Json(SAVED))
}

/// PUT /api/board/groups - replace the record-group list.
pub async fn put_groups(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<GroupsSectionRequest>,
) -> ApiResult<Json<SavedResponse>> {
    require_key(&state, &headers)?;

    state.store.save_groups(&request.groups).await?;

    broadcast(
        &state,
        SectionPayload::Groups {
            groups: request.groups,
        },
    );

    info!("Replaced groups section via HTTP");
    Ok(Json(SAVED))
}

/// PUT /api/board/trash - replace the trash list.
pub async fn put_trash(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<TrashSectionRequest>,
) -> ApiResult<Json<SavedResponse>> {
    require_key(&state, &headers)?;

    state.store.save_trash(&request.trashed_items).await?;

    broadcast(
        &state,
        SectionPayload::Trash {
            trashed_items: request.trashed_items,
        },
    );

    info!("Replaced trash section via HTTP");
    Ok(Json(SAVED))
}

fn require_key(state: &AppState, headers: &HeaderMap) -> ApiResult<()> {
    duty_ws::app_state::authorize(
        headers,
        &Default::default(),
        state.access_key.as_deref(),
    )
    .map_err(|_| ApiError::Unauthorized)
}

fn broadcast(state: &AppState, section: SectionPayload) {
    let name = section.name();
    let message = ServerMessage::new(
        Uuid::new_v4().to_string(),
        ServerPayload::SectionChanged { section },
    );
    match serde_json::to_string(&message) {
        Ok(payload) => {
            state.broadcaster.broadcast(BroadcastMessage::new(payload, name));
            state.metrics.broadcast_sent(name);
        }
        Err(e) => log::error!("Failed to serialize {name} broadcast: {e}"),
    }
}
