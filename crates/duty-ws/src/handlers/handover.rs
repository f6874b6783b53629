use crate::HandlerContext;
use crate::Result as WsErrorResult;
use crate::handlers::response_builder::build_ack_response;
use crate::protocol::{SectionPayload, ServerMessage};

use duty_core::HandoverStatusChange;

use chrono::Utc;
use log::{debug, info};

/// Set a handover item's status. A done status archives the item into the
/// trash; both list writes commit together.
pub async fn handle_set_handover_status(
    task_id: String,
    status_id: String,
    ctx: HandlerContext,
) -> WsErrorResult<ServerMessage> {
    debug!(
        "{} SetHandoverStatus {task_id} -> {status_id}",
        ctx.log_prefix()
    );

    let mut board = ctx.store.load_board().await?;
    let change = board.set_handover_status(&task_id, &status_id, Utc::now())?;

    match change {
        HandoverStatusChange::Updated => {
            ctx.store.save_handover(&board.handover_items).await?;
            ctx.broadcast_section(SectionPayload::state(&board));
            info!("{} Updated status of {task_id}", ctx.log_prefix());
        }
        HandoverStatusChange::Archived => {
            ctx.store
                .save_handover_and_trash(&board.handover_items, &board.trashed_items)
                .await?;
            ctx.broadcast_section(SectionPayload::state(&board));
            ctx.broadcast_section(SectionPayload::trash(&board));
            info!("{} Archived {task_id} to trash", ctx.log_prefix());
        }
    }

    Ok(build_ack_response(&ctx.message_id, true))
}
