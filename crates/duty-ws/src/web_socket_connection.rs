use crate::handlers::response_builder::build_error_response;
use crate::handlers::{HandlerContext, dispatch, error_codes};
use crate::protocol::{ClientMessage, ServerMessage, WireError};
use crate::{
    BoardBroadcaster, ConnectionConfig, ConnectionId, Metrics, Result as WsErrorResult, ShutdownGuard,
    WsError,
};

use std::panic::Location;

use axum::extract::ws::{Message, WebSocket};
use duty_auth::ConnectionRateLimiter;
use duty_config::{TrashConfig, ValidationConfig};
use duty_db::BoardStore;
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;

/// Manages a single WebSocket connection: client operations in, board
/// change broadcasts out.
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    config: ConnectionConfig,
    metrics: Metrics,
    rate_limiter: ConnectionRateLimiter,
    broadcaster: BoardBroadcaster,
    store: BoardStore,
    validation: ValidationConfig,
    trash: TrashConfig,
}

impl WebSocketConnection {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        connection_id: ConnectionId,
        config: ConnectionConfig,
        metrics: Metrics,
        rate_limiter: ConnectionRateLimiter,
        broadcaster: BoardBroadcaster,
        store: BoardStore,
        validation: ValidationConfig,
        trash: TrashConfig,
    ) -> Self {
        Self {
            connection_id,
            config,
            metrics,
            rate_limiter,
            broadcaster,
            store,
            validation,
            trash,
        }
    }

    /// Handle the connection lifecycle until the client disconnects or the
    /// server shuts down.
    pub async fn handle(
        self,
        socket: WebSocket,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        log::info!("WebSocket connection {} established", self.connection_id);
        self.metrics.connection_established();

        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Bounded channel for outgoing messages (backpressure handling)
        let (tx, mut rx) = mpsc::channel::<Message>(self.config.send_buffer_size);

        let mut broadcast_rx = self.broadcaster.subscribe().await;

        let send_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if ws_sender.send(msg).await.is_err() {
                    break;
                }
            }
        });

        let result = loop {
            tokio::select! {
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(msg)) => {
                            if let Err(e) = self.handle_client_message(msg, &tx).await {
                                log::error!(
                                    "Error handling message on connection {}: {}",
                                    self.connection_id,
                                    e
                                );
                                self.metrics.error_occurred("message_handling");
                                break Err(e);
                            }
                        }
                        Some(Err(e)) => {
                            log::error!(
                                "WebSocket error on connection {}: {}",
                                self.connection_id,
                                e
                            );
                            break Err(WsError::ConnectionClosed {
                                reason: format!("WebSocket error: {e}"),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                        None => {
                            log::info!("Connection {} closed by client", self.connection_id);
                            break Ok(());
                        }
                    }
                }

                broadcast_msg = broadcast_rx.recv() => {
                    match broadcast_msg {
                        Ok(msg) => {
                            let message_type = msg.message_type;
                            if tx.send(Message::Text(msg.payload.into())).await.is_err() {
                                self.metrics.error_occurred("slow_client");
                                break Err(WsError::SendBufferFull {
                                    location: ErrorLocation::from(Location::caller()),
                                });
                            }
                            self.metrics.message_sent(message_type);
                        }
                        Err(tokio::sync::broadcast::error::RecvError::Lagged(missed)) => {
                            log::warn!(
                                "Connection {} lagged, missed {} broadcasts",
                                self.connection_id,
                                missed
                            );
                            self.metrics.error_occurred("broadcast_lagged");
                        }
                        Err(_) => {
                            log::info!(
                                "Broadcast channel closed for connection {}",
                                self.connection_id
                            );
                            break Ok(());
                        }
                    }
                }

                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {} gracefully", self.connection_id);
                    break Ok(());
                }
            }
        };

        self.broadcaster.unsubscribe().await;
        drop(tx);
        let _ = send_task.await;

        self.metrics
            .connection_closed(if result.is_ok() { "normal" } else { "error" });
        log::info!("WebSocket connection {} closed", self.connection_id);

        result
    }

    /// Handle one frame from the client. Protocol-level problems (rate
    /// limit, undecodable message) are answered with an error frame; only
    /// transport failures end the connection.
    async fn handle_client_message(
        &self,
        msg: Message,
        tx: &mpsc::Sender<Message>,
    ) -> WsErrorResult<()> {
        match msg {
            Message::Text(text) => self.handle_text_message(text.as_str(), tx).await,
            Message::Binary(data) => {
                log::debug!(
                    "Ignoring binary message ({} bytes) on connection {}",
                    data.len(),
                    self.connection_id
                );
                Ok(())
            }
            Message::Ping(data) => {
                tx.send(Message::Pong(data))
                    .await
                    .map_err(|_| WsError::SendBufferFull {
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                Ok(())
            }
            Message::Pong(_) => Ok(()),
            Message::Close(_) => {
                log::info!("Received close frame from connection {}", self.connection_id);
                Ok(())
            }
        }
    }

    async fn handle_text_message(
        &self,
        text: &str,
        tx: &mpsc::Sender<Message>,
    ) -> WsErrorResult<()> {
        if self.rate_limiter.check().is_err() {
            log::warn!("Rate limit exceeded on connection {}", self.connection_id);
            self.metrics.error_occurred("rate_limited");
            let response = build_error_response(
                "",
                WireError {
                    code: error_codes::RATE_LIMITED.to_string(),
                    message: "Too many requests, slow down.".to_string(),
                },
            );
            return self.send_response(tx, &response).await;
        }

        let parsed: ClientMessage = match serde_json::from_str(text) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!(
                    "Undecodable message on connection {}: {}",
                    self.connection_id,
                    e
                );
                self.metrics.error_occurred("decode");
                let response = build_error_response(
                    "",
                    WireError {
                        code: error_codes::INVALID_MESSAGE.to_string(),
                        message: format!("Invalid message: {e}"),
                    },
                );
                return self.send_response(tx, &response).await;
            }
        };

        self.metrics.message_received(parsed.payload.handler_name());

        let ctx = HandlerContext::new(
            parsed.message_id.clone(),
            self.store.clone(),
            self.broadcaster.clone(),
            self.metrics.clone(),
            self.validation.clone(),
            self.trash.clone(),
            self.connection_id.to_string(),
        );

        let response = dispatch(parsed, ctx).await;
        self.send_response(tx, &response).await
    }

    async fn send_response(
        &self,
        tx: &mpsc::Sender<Message>,
        response: &ServerMessage,
    ) -> WsErrorResult<()> {
        let payload = serde_json::to_string(response)?;
        tx.send(Message::Text(payload.into()))
            .await
            .map_err(|_| WsError::SendBufferFull {
                location: ErrorLocation::from(Location::caller()),
            })?;
        Ok(())
    }
}
