use crate::BroadcastMessage;

use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};

const CHANNEL_CAPACITY: usize = 256;

/// Fan-out channel for board change notifications.
///
/// One board, one channel: every connected client subscribes on upgrade and
/// receives every committed section change.
pub struct BoardBroadcaster {
    sender: broadcast::Sender<BroadcastMessage>,
    subscriber_count: Arc<RwLock<usize>>,
}

impl BoardBroadcaster {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            sender,
            subscriber_count: Arc::new(RwLock::new(0)),
        }
    }

    pub async fn subscribe(&self) -> broadcast::Receiver<BroadcastMessage> {
        let mut count = self.subscriber_count.write().await;
        *count += 1;
        log::debug!("Client subscribed to board broadcast ({} total)", *count);
        self.sender.subscribe()
    }

    pub async fn unsubscribe(&self) {
        let mut count = self.subscriber_count.write().await;
        *count = count.saturating_sub(1);
        log::debug!("Client unsubscribed from board broadcast ({} remaining)", *count);
    }

    /// Broadcast a message to all subscribers; returns the receiver count.
    pub fn broadcast(&self, message: BroadcastMessage) -> usize {
        match self.sender.send(message) {
            Ok(receiver_count) => {
                log::debug!("Broadcast board change ({receiver_count} receivers)");
                receiver_count
            }
            Err(_) => {
                // No active receivers; the change is persisted either way.
                log::debug!("Broadcast had no active receivers");
                0
            }
        }
    }

    pub async fn subscriber_count(&self) -> usize {
        *self.subscriber_count.read().await
    }
}

impl Default for BoardBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BoardBroadcaster {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            subscriber_count: Arc::clone(&self.subscriber_count),
        }
    }
}
