pub mod admin;
pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

use duty_auth::{AccessKeyValidator, RateLimiterFactory};
use duty_db::BoardStore;
use duty_ws::protocol::{SectionPayload, ServerMessage, ServerPayload};
use duty_ws::{
    AppState, BoardBroadcaster, BroadcastMessage, ConnectionConfig, ConnectionLimits,
    ConnectionRegistry, Metrics, ShutdownCoordinator,
};

use std::error::Error;
use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = duty_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = duty_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting duty-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the board database (runs migrations)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = duty_db::create_pool(&database_path).await?;
    info!("Database connection established");

    let store = BoardStore::new(pool);
    if store.seed_defaults_if_empty().await? {
        info!("Seeded default statuses, shift windows and basic tasks");
    }

    // Install the Prometheus exporter
    let metrics_handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| error::ServerError::Metrics {
            message: e.to_string(),
        })?;

    // Access-key gate (the station's shared password, server side)
    let access_key: Option<Arc<AccessKeyValidator>> = if config.auth.enabled {
        let key = config
            .auth
            .access_key
            .as_deref()
            .unwrap_or_default()
            .to_string();
        info!("Access-key authentication enabled");
        Some(Arc::new(AccessKeyValidator::new(key)))
    } else {
        warn!("Authentication DISABLED - running in open desktop mode");
        None
    };

    let rate_limiter_factory = RateLimiterFactory::new(duty_auth::RateLimitConfig {
        max_requests: config.rate_limit.max_requests,
        window_secs: config.rate_limit.window_secs,
    });

    let registry = ConnectionRegistry::new(ConnectionLimits {
        max_total: config.server.max_connections,
    });
    let registry_for_idle = registry.clone();

    let broadcaster = BoardBroadcaster::new();
    let metrics = Metrics::new();
    let shutdown = ShutdownCoordinator::new();

    let connection_config = ConnectionConfig::from(&config.websocket);

    let app_state = AppState {
        store: store.clone(),
        access_key,
        rate_limiter_factory,
        registry,
        broadcaster: broadcaster.clone(),
        metrics: metrics.clone(),
        shutdown: shutdown.clone(),
        config: connection_config,
        validation: config.validation.clone(),
        trash: config.trash.clone(),
    };

    let app = routes::build_router(app_state, metrics_handle);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual bound address (matters when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {actual_addr}");

    // Signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {e}");
            }
        }
    });

    // Idle shutdown monitoring (when configured)
    if config.server.idle_shutdown_secs > 0 {
        let idle_timeout = config.server.idle_shutdown_secs;
        let shutdown_for_idle = shutdown.clone();

        info!("Idle shutdown enabled: {idle_timeout}s timeout");

        tokio::spawn(async move {
            let grace_period = idle_timeout.min(60);
            tokio::time::sleep(std::time::Duration::from_secs(grace_period)).await;

            let check_interval = (idle_timeout / 2).max(10);

            loop {
                tokio::time::sleep(std::time::Duration::from_secs(check_interval)).await;

                if registry_for_idle.total_count().await == 0 {
                    tokio::time::sleep(std::time::Duration::from_secs(check_interval)).await;

                    if registry_for_idle.total_count().await == 0 {
                        warn!("No connections for {idle_timeout}s, initiating auto-shutdown");
                        shutdown_for_idle.shutdown();
                        break;
                    }
                }
            }
        });
    }

    // Background trash retention pass
    spawn_trash_cleanup(
        store,
        broadcaster,
        config.trash.retention_days,
        config.trash.cleanup_interval_hours,
    );

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    let mut shutdown_guard = shutdown.subscribe_guard();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_guard.wait().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}

/// Periodically drop trash entries past the retention window; the load path
/// purges too, this keeps an otherwise-idle board bounded.
fn spawn_trash_cleanup(
    store: BoardStore,
    broadcaster: BoardBroadcaster,
    retention_days: u32,
    cleanup_interval_hours: u32,
) {
    let interval =
        std::time::Duration::from_secs(u64::from(cleanup_interval_hours.max(1)) * 3600);

    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;

            let cutoff = Utc::now() - TimeDelta::days(i64::from(retention_days));
            match store.purge_trash_older_than(cutoff).await {
                Ok(0) => {}
                Ok(removed) => {
                    info!("Trash cleanup removed {removed} expired entries");
                    match store.load_board().await {
                        Ok(board) => {
                            let message = ServerMessage::new(
                                uuid::Uuid::new_v4().to_string(),
                                ServerPayload::SectionChanged {
                                    section: SectionPayload::trash(&board),
                                },
                            );
                            if let Ok(payload) = serde_json::to_string(&message) {
                                broadcaster.broadcast(BroadcastMessage::new(payload, "trash"));
                            }
                        }
                        Err(e) => error!("Trash cleanup reload failed: {e}"),
                    }
                }
                Err(e) => error!("Trash cleanup failed: {e}"),
            }
        }
    });
}
