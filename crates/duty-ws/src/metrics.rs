use metrics::counter;

/// Counter wrapper over the metrics facade. The server installs the
/// Prometheus exporter; without one these are no-ops.
#[derive(Clone, Default)]
pub struct Metrics;

impl Metrics {
    pub fn new() -> Self {
        Self
    }

    pub fn connection_established(&self) {
        counter!("dutyboard_connections_established_total").increment(1);
    }

    pub fn connection_closed(&self, outcome: &'static str) {
        counter!("dutyboard_connections_closed_total", "outcome" => outcome).increment(1);
    }

    pub fn message_received(&self, message_type: &'static str) {
        counter!("dutyboard_messages_received_total", "type" => message_type).increment(1);
    }

    pub fn message_sent(&self, message_type: &'static str) {
        counter!("dutyboard_messages_sent_total", "type" => message_type).increment(1);
    }

    pub fn broadcast_sent(&self, section: &'static str) {
        counter!("dutyboard_broadcasts_total", "section" => section).increment(1);
    }

    pub fn error_occurred(&self, kind: &'static str) {
        counter!("dutyboard_errors_total", "kind" => kind).increment(1);
    }
}
