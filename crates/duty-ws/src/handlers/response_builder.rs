use crate::protocol::{ServerMessage, ServerPayload, WireError};

use duty_core::BoardState;
use duty_core::records::RecordSet;

pub fn build_board_response(
    message_id: &str,
    board: BoardState,
    records: RecordSet,
) -> ServerMessage {
    ServerMessage::new(message_id, ServerPayload::Board { board, records })
}

pub fn build_ack_response(message_id: &str, changed: bool) -> ServerMessage {
    ServerMessage::new(message_id, ServerPayload::Ack { changed })
}

pub fn build_created_response(message_id: &str, id: String) -> ServerMessage {
    ServerMessage::new(message_id, ServerPayload::Created { id })
}

pub fn build_error_response(message_id: &str, error: WireError) -> ServerMessage {
    ServerMessage::new(message_id, ServerPayload::Error(error))
}
