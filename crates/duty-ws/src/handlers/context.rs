use crate::protocol::{SectionPayload, ServerMessage, ServerPayload};
use crate::{BoardBroadcaster, BroadcastMessage, Metrics, RequestContext};

use duty_config::{TrashConfig, ValidationConfig};
use duty_db::BoardStore;

/// Context passed to all handlers: request metadata plus the resources a
/// handler needs to load, persist and announce board changes.
#[derive(Clone)]
pub struct HandlerContext {
    /// Client message id for request/response correlation
    pub message_id: String,
    pub store: BoardStore,
    pub broadcaster: BoardBroadcaster,
    pub metrics: Metrics,
    pub validation: ValidationConfig,
    pub trash: TrashConfig,
    pub request_ctx: RequestContext,
}

impl HandlerContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        message_id: String,
        store: BoardStore,
        broadcaster: BoardBroadcaster,
        metrics: Metrics,
        validation: ValidationConfig,
        trash: TrashConfig,
        connection_id: String,
    ) -> Self {
        let request_ctx = RequestContext::new(connection_id, &message_id);
        Self {
            message_id,
            store,
            broadcaster,
            metrics,
            validation,
            trash,
            request_ctx,
        }
    }

    pub fn log_prefix(&self) -> String {
        self.request_ctx.log_prefix()
    }

    /// Announce a committed section change to every subscriber. The
    /// broadcast carries the originating message id so the caller can skip
    /// its own echo.
    pub fn broadcast_section(&self, section: SectionPayload) {
        let name = section.name();
        let message = ServerMessage::new(
            self.message_id.clone(),
            ServerPayload::SectionChanged { section },
        );
        match serde_json::to_string(&message) {
            Ok(payload) => {
                self.broadcaster
                    .broadcast(BroadcastMessage::new(payload, name));
                self.metrics.broadcast_sent(name);
            }
            Err(e) => {
                log::error!("{} Failed to serialize {name} broadcast: {e}", self.log_prefix());
            }
        }
    }
}

impl std::fmt::Debug for HandlerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerContext")
            .field("message_id", &self.message_id)
            .field("correlation_id", &self.request_ctx.correlation_id)
            .finish()
    }
}
