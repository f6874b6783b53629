mod dispatcher;
mod protocol;

use crate::{BoardBroadcaster, HandlerContext, Metrics};

use duty_config::{TrashConfig, ValidationConfig};
use duty_db::BoardStore;

/// A handler context over a seeded in-memory store, plus the broadcaster to
/// subscribe test receivers on.
pub(crate) async fn seeded_context(message_id: &str) -> (HandlerContext, BoardBroadcaster) {
    let pool = duty_db::create_memory_pool().await.unwrap();
    let store = BoardStore::new(pool);
    store.seed_defaults_if_empty().await.unwrap();

    let broadcaster = BoardBroadcaster::new();
    let ctx = HandlerContext::new(
        message_id.to_string(),
        store,
        broadcaster.clone(),
        Metrics::new(),
        ValidationConfig::default(),
        TrashConfig::default(),
        "test-conn".to_string(),
    );
    (ctx, broadcaster)
}
