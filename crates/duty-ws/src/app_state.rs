use crate::{
    BoardBroadcaster, ConnectionConfig, ConnectionRegistry, Metrics, ShutdownCoordinator,
    WebSocketConnection,
};

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::{HeaderMap, StatusCode},
    response::Response,
};
use duty_auth::AccessKeyValidator;
use duty_config::{TrashConfig, ValidationConfig};
use duty_db::BoardStore;
use log::{debug, error, warn};

/// Shared application state for the WebSocket and HTTP layers
#[derive(Clone)]
pub struct AppState {
    pub store: BoardStore,
    /// None = open access (auth disabled)
    pub access_key: Option<Arc<AccessKeyValidator>>,
    pub rate_limiter_factory: duty_auth::RateLimiterFactory,
    pub registry: ConnectionRegistry,
    pub broadcaster: BoardBroadcaster,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
    pub validation: ValidationConfig,
    pub trash: TrashConfig,
}

/// WebSocket upgrade handler
pub async fn handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    authorize(&headers, &params, state.access_key.as_deref())?;
    debug!("WebSocket upgrade request accepted");

    // Register connection (enforces the connection limit)
    let connection_id = state.registry.register().await.map_err(|e| {
        error!("Failed to register connection: {e}");
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    let rate_limiter = state.rate_limiter_factory.create();

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, connection_id, state, rate_limiter)))
}

async fn handle_socket(
    socket: WebSocket,
    connection_id: crate::ConnectionId,
    state: AppState,
    rate_limiter: duty_auth::ConnectionRateLimiter,
) {
    let shutdown_guard = state.shutdown.subscribe_guard();

    let connection = WebSocketConnection::new(
        connection_id,
        state.config,
        state.metrics.clone(),
        rate_limiter,
        state.broadcaster.clone(),
        state.store.clone(),
        state.validation.clone(),
        state.trash.clone(),
    );

    let result = connection.handle(socket, shutdown_guard).await;

    state.registry.unregister(connection_id).await;

    if let Err(e) = result {
        error!("Connection {connection_id} error: {e}");
    }
}

/// Check the access key from the Authorization header (preferred) or the
/// `key` query parameter (browser WebSocket clients cannot set headers).
pub fn authorize(
    headers: &HeaderMap,
    params: &HashMap<String, String>,
    validator: Option<&AccessKeyValidator>,
) -> Result<(), StatusCode> {
    let Some(validator) = validator else {
        return Ok(());
    };

    let from_header = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));
    let presented = from_header.or_else(|| params.get("key").map(String::as_str));

    let Some(presented) = presented else {
        warn!("Missing access key");
        return Err(StatusCode::UNAUTHORIZED);
    };

    validator.validate(presented).map_err(|e| {
        warn!("Access key validation failed: {e}");
        StatusCode::UNAUTHORIZED
    })
}
