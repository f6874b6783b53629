use crate::HandlerContext;
use crate::Result as WsErrorResult;
use crate::handlers::response_builder::build_ack_response;
use crate::protocol::{SectionPayload, ServerMessage};

use log::{debug, info};

/// Return a trashed item to the handover list.
pub async fn handle_restore_trashed(
    task_id: String,
    ctx: HandlerContext,
) -> WsErrorResult<ServerMessage> {
    debug!("{} RestoreTrashed {task_id}", ctx.log_prefix());

    let mut board = ctx.store.load_board().await?;
    board.restore_trashed(&task_id)?;

    ctx.store
        .save_handover_and_trash(&board.handover_items, &board.trashed_items)
        .await?;
    ctx.broadcast_section(SectionPayload::state(&board));
    ctx.broadcast_section(SectionPayload::trash(&board));

    info!("{} Restored {task_id} from trash", ctx.log_prefix());
    Ok(build_ack_response(&ctx.message_id, true))
}

pub async fn handle_clear_trash(ctx: HandlerContext) -> WsErrorResult<ServerMessage> {
    debug!("{} ClearTrash", ctx.log_prefix());

    let mut board = ctx.store.load_board().await?;
    board.clear_trash();

    ctx.store.save_trash(&board.trashed_items).await?;
    ctx.broadcast_section(SectionPayload::trash(&board));

    info!("{} Emptied trash", ctx.log_prefix());
    Ok(build_ack_response(&ctx.message_id, true))
}
