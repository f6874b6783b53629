use crate::{admin, api, health};

use duty_ws::AppState;

use axum::{
    Router,
    routing::{get, post, put},
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, metrics_handle: PrometheusHandle) -> Router {
    Router::new()
        // WebSocket endpoint
        .route("/ws", get(duty_ws::handler))
        // Board snapshot mirror
        .route("/api/board", get(api::board::get_board))
        .route("/api/board/config", put(api::board::put_config))
        .route("/api/board/state", put(api::board::put_state))
        .route("/api/board/records", put(api::board::put_records))
        .route("/api/board/groups", put(api::board::put_groups))
        .route("/api/board/trash", put(api::board::put_trash))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Metrics endpoint
        .route(
            "/metrics",
            get(move || {
                let handle = metrics_handle.clone();
                async move { handle.render() }
            }),
        )
        // Admin endpoints
        .route("/admin/checkpoint", post(admin::checkpoint_handler))
        .route("/admin/shutdown", post(admin::shutdown_handler))
        .with_state(state)
        // CORS middleware (browser clients on other origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
