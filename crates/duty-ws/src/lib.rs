pub mod app_state;
pub mod board_broadcaster;
pub mod broadcast_message;
pub mod connection_config;
pub mod connection_id;
pub mod connection_info;
pub mod connection_limits;
pub mod connection_registry;
pub mod error;
pub mod handlers;
pub mod message_validator;
pub mod metrics;
pub mod protocol;
pub mod request_context;
pub mod shutdown;
pub mod web_socket_connection;

pub use app_state::{AppState, handler};
pub use board_broadcaster::BoardBroadcaster;
pub use broadcast_message::BroadcastMessage;
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_info::ConnectionInfo;
pub use connection_limits::ConnectionLimits;
pub use connection_registry::ConnectionRegistry;
pub use error::{Result, WsError};
pub use handlers::{HandlerContext, dispatch};
pub use message_validator::MessageValidator;
pub use metrics::Metrics;
pub use request_context::RequestContext;
pub use shutdown::{ShutdownCoordinator, ShutdownGuard};
pub use web_socket_connection::WebSocketConnection;

#[cfg(test)]
mod tests;
