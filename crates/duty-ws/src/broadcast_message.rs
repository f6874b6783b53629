/// A change notification ready to fan out to clients: the ServerMessage is
/// serialized once, then cloned per receiver.
#[derive(Debug, Clone)]
pub struct BroadcastMessage {
    pub payload: String,
    /// Section or message kind, for metrics and logging.
    pub message_type: &'static str,
}

impl BroadcastMessage {
    pub fn new(payload: String, message_type: &'static str) -> Self {
        Self {
            payload,
            message_type,
        }
    }
}
