use crate::HandlerContext;
use crate::Result as WsErrorResult;
use crate::handlers::response_builder::build_board_response;
use crate::protocol::ServerMessage;

use chrono::Utc;
use log::{debug, info};

/// Full board load. Expired trash entries are dropped on the way out, so a
/// client never sees entries past the retention window.
pub async fn handle_get_board(ctx: HandlerContext) -> WsErrorResult<ServerMessage> {
    debug!("{} GetBoard starting", ctx.log_prefix());

    let mut board = ctx.store.load_board().await?;

    let purged = board.purge_trash(Utc::now(), ctx.trash.retention_days);
    if purged > 0 {
        ctx.store.save_trash(&board.trashed_items).await?;
        info!(
            "{} Purged {} expired trash entries on load",
            ctx.log_prefix(),
            purged
        );
    }

    let records = ctx.store.load_records().await?;

    info!(
        "{} Loaded board ({} tasks, {} records)",
        ctx.log_prefix(),
        board.task_count(),
        records.records.len()
    );

    Ok(build_board_response(&ctx.message_id, board, records))
}
