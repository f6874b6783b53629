#![allow(dead_code)]

use duty_auth::{AccessKeyValidator, RateLimiterFactory};
use duty_db::BoardStore;
use duty_ws::{
    AppState, BoardBroadcaster, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Metrics,
    ShutdownCoordinator,
};

use std::sync::Arc;

use axum_test::TestServer;
use duty_config::{TrashConfig, ValidationConfig};
use metrics_exporter_prometheus::PrometheusBuilder;

pub const TEST_ACCESS_KEY: &str = "engine-bay-7-access";

/// Test server over an in-memory, default-seeded board.
pub struct TestBoardServer {
    pub server: TestServer,
    pub store: BoardStore,
}

pub async fn create_test_server() -> TestBoardServer {
    create_server(None).await
}

/// Server with the access-key gate enabled.
pub async fn create_secured_server() -> TestBoardServer {
    create_server(Some(TEST_ACCESS_KEY)).await
}

async fn create_server(access_key: Option<&str>) -> TestBoardServer {
    let pool = duty_db::create_memory_pool()
        .await
        .expect("Failed to create test pool");
    let store = BoardStore::new(pool);
    store.seed_defaults_if_empty().await.unwrap();

    let app_state = AppState {
        store: store.clone(),
        access_key: access_key.map(|key| Arc::new(AccessKeyValidator::new(key))),
        rate_limiter_factory: RateLimiterFactory::default(),
        registry: ConnectionRegistry::new(ConnectionLimits::default()),
        broadcaster: BoardBroadcaster::new(),
        metrics: Metrics::new(),
        shutdown: ShutdownCoordinator::new(),
        config: ConnectionConfig::default(),
        validation: ValidationConfig::default(),
        trash: TrashConfig::default(),
    };

    // A detached recorder per test; the global exporter belongs to main().
    let metrics_handle = PrometheusBuilder::new().build_recorder().handle();
    let app = duty_server::build_router(app_state, metrics_handle);

    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestBoardServer { server, store }
}
