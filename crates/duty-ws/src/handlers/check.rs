use crate::HandlerContext;
use crate::Result as WsErrorResult;
use crate::handlers::response_builder::build_ack_response;
use crate::protocol::{SectionPayload, ServerMessage};

use log::{debug, info};

/// Flip one checkbox. Basic tasks are tracked per shift window via the
/// namespaced key; shift tasks use their raw id.
pub async fn handle_toggle_check(
    shift_id: String,
    task_id: String,
    ctx: HandlerContext,
) -> WsErrorResult<ServerMessage> {
    debug!("{} ToggleCheck {task_id} (shift {shift_id})", ctx.log_prefix());

    let mut board = ctx.store.load_board().await?;
    let key = board.check_key(&shift_id, &task_id)?;
    let checked = board.toggle_check(&shift_id, &task_id)?;

    ctx.store.set_checked(&key, checked).await?;
    ctx.broadcast_section(SectionPayload::state(&board));

    info!(
        "{} {} {key}",
        ctx.log_prefix(),
        if checked { "Checked" } else { "Unchecked" }
    );
    Ok(build_ack_response(&ctx.message_id, true))
}

/// Reset every checkbox of one shift window.
pub async fn handle_clear_shift_checks(
    shift_id: String,
    ctx: HandlerContext,
) -> WsErrorResult<ServerMessage> {
    debug!("{} ClearShiftChecks {shift_id}", ctx.log_prefix());

    let mut board = ctx.store.load_board().await?;
    board.clear_shift_checks(&shift_id)?;

    ctx.store.save_checked(&board.checked_items).await?;
    ctx.broadcast_section(SectionPayload::state(&board));

    info!("{} Cleared checks for shift {shift_id}", ctx.log_prefix());
    Ok(build_ack_response(&ctx.message_id, true))
}
