use crate::Result as WsErrorResult;
use crate::handlers::response_builder::build_ack_response;
use crate::protocol::{SectionPayload, ServerMessage};
use crate::{HandlerContext, MessageValidator};

use duty_core::StatusConfig;

use log::{debug, info};

/// Whole-list status replacement from the status editor. Re-pointed
/// handover items commit together with the new list.
pub async fn handle_replace_statuses(
    statuses: Vec<StatusConfig>,
    ctx: HandlerContext,
) -> WsErrorResult<ServerMessage> {
    debug!(
        "{} ReplaceStatuses ({} statuses)",
        ctx.log_prefix(),
        statuses.len()
    );

    MessageValidator::validate_statuses(&statuses, &ctx.validation)?;

    let mut board = ctx.store.load_board().await?;
    board.replace_statuses(statuses)?;

    ctx.store
        .save_statuses_and_handover(&board.status_configs, &board.handover_items)
        .await?;
    ctx.broadcast_section(SectionPayload::config(&board));
    ctx.broadcast_section(SectionPayload::state(&board));

    info!("{} Replaced status list", ctx.log_prefix());
    Ok(build_ack_response(&ctx.message_id, true))
}

/// Restore the built-in defaults (tasks, shifts, statuses) and clear the
/// handover list.
pub async fn handle_reset_config(ctx: HandlerContext) -> WsErrorResult<ServerMessage> {
    debug!("{} ResetConfig", ctx.log_prefix());

    let mut board = ctx.store.load_board().await?;
    board.reset_config();

    ctx.store.save_board(&board).await?;
    ctx.broadcast_section(SectionPayload::config(&board));
    ctx.broadcast_section(SectionPayload::state(&board));

    info!("{} Reset board config to defaults", ctx.log_prefix());
    Ok(build_ack_response(&ctx.message_id, true))
}
