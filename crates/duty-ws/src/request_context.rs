use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Request context for correlation and latency tracking
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlation id for this request (the client's message id when given)
    pub correlation_id: String,
    /// Sequence number within this server instance
    pub request_seq: u64,
    /// Connection the request arrived on
    pub connection_id: String,
    pub started_at: std::time::Instant,
}

impl RequestContext {
    pub fn new(connection_id: String, message_id: &str) -> Self {
        let request_seq = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);

        let correlation_id = if message_id.is_empty() {
            format!("req-{}-{}", request_seq, Uuid::new_v4().as_simple())
        } else {
            message_id.to_string()
        };

        Self {
            correlation_id,
            request_seq,
            connection_id,
            started_at: std::time::Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Log prefix for structured logging
    pub fn log_prefix(&self) -> String {
        format!(
            "[req={} conn={}]",
            &self.correlation_id[..8.min(self.correlation_id.len())],
            &self.connection_id[..8.min(self.connection_id.len())]
        )
    }
}
