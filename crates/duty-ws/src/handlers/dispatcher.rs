use crate::handlers::board::handle_get_board;
use crate::handlers::check::{handle_clear_shift_checks, handle_toggle_check};
use crate::handlers::drag::{handle_drag_end, handle_record_drag_end};
use crate::handlers::handover::handle_set_handover_status;
use crate::handlers::record::{
    handle_add_group, handle_add_record, handle_delete_group, handle_delete_record,
    handle_rename_group, handle_update_record,
};
use crate::handlers::response_builder::build_error_response;
use crate::handlers::status::{handle_replace_statuses, handle_reset_config};
use crate::handlers::task::{handle_add_task, handle_delete_task, handle_update_task};
use crate::handlers::trash::{handle_clear_trash, handle_restore_trashed};
use crate::handlers::{error_codes, HandlerContext};
use crate::protocol::{ClientMessage, ClientPayload, ServerMessage, ServerPayload, WireError};

use log::{debug, error, info, warn};

const HANDLER_TIMEOUT_SECS: u64 = 30;

/// Dispatch an incoming message to its handler, with correlation logging,
/// timeout protection and error-to-wire mapping.
pub async fn dispatch(msg: ClientMessage, ctx: HandlerContext) -> ServerMessage {
    let message_id = msg.message_id.clone();
    let handler_name = msg.payload.handler_name();

    debug!("{} -> {} handler", ctx.log_prefix(), handler_name);

    let response = tokio::time::timeout(
        std::time::Duration::from_secs(HANDLER_TIMEOUT_SECS),
        dispatch_inner(msg, ctx.clone()),
    )
    .await;

    let final_response = match response {
        Ok(resp) => resp,
        Err(_elapsed) => {
            error!(
                "{} Handler {} timed out after {}s",
                ctx.log_prefix(),
                handler_name,
                HANDLER_TIMEOUT_SECS
            );
            build_error_response(
                &message_id,
                WireError {
                    code: error_codes::TIMEOUT.to_string(),
                    message: "Request timed out. Please try again.".to_string(),
                },
            )
        }
    };

    info!(
        "{} <- {} completed in {}ms",
        ctx.log_prefix(),
        handler_name,
        ctx.request_ctx.elapsed_ms()
    );

    final_response
}

async fn dispatch_inner(msg: ClientMessage, ctx: HandlerContext) -> ServerMessage {
    let message_id = msg.message_id.clone();
    let handler_name = msg.payload.handler_name();
    let log_prefix = ctx.log_prefix();

    let result = match msg.payload {
        ClientPayload::GetBoard => handle_get_board(ctx).await,

        ClientPayload::DragEnd { active_id, over } => {
            handle_drag_end(active_id, over, ctx).await
        }
        ClientPayload::RecordDragEnd { active, over } => {
            handle_record_drag_end(active, over, ctx).await
        }

        ClientPayload::AddTask { container } => handle_add_task(container, ctx).await,
        ClientPayload::UpdateTask {
            container,
            task_id,
            patch,
        } => handle_update_task(container, task_id, patch, ctx).await,
        ClientPayload::DeleteTask { container, task_id } => {
            handle_delete_task(container, task_id, ctx).await
        }

        ClientPayload::SetHandoverStatus { task_id, status_id } => {
            handle_set_handover_status(task_id, status_id, ctx).await
        }
        ClientPayload::RestoreTrashed { task_id } => handle_restore_trashed(task_id, ctx).await,
        ClientPayload::ClearTrash => handle_clear_trash(ctx).await,

        ClientPayload::ToggleCheck { shift_id, task_id } => {
            handle_toggle_check(shift_id, task_id, ctx).await
        }
        ClientPayload::ClearShiftChecks { shift_id } => {
            handle_clear_shift_checks(shift_id, ctx).await
        }

        ClientPayload::ReplaceStatuses { statuses } => {
            handle_replace_statuses(statuses, ctx).await
        }
        ClientPayload::ResetConfig => handle_reset_config(ctx).await,

        ClientPayload::AddRecord { group_id } => handle_add_record(group_id, ctx).await,
        ClientPayload::UpdateRecord { record } => handle_update_record(record, ctx).await,
        ClientPayload::DeleteRecord { record_id } => handle_delete_record(record_id, ctx).await,
        ClientPayload::AddGroup => handle_add_group(ctx).await,
        ClientPayload::RenameGroup { group_id, title } => {
            handle_rename_group(group_id, title, ctx).await
        }
        ClientPayload::DeleteGroup { group_id } => handle_delete_group(group_id, ctx).await,

        ClientPayload::Ping { timestamp } => {
            return ServerMessage::new(message_id, ServerPayload::Pong { timestamp });
        }
    };

    match result {
        Ok(response) => response,
        Err(e) => {
            let wire_error = e.to_wire_error();
            warn!(
                "{} Handler {} failed: {} (code: {})",
                log_prefix, handler_name, e, wire_error.code
            );
            build_error_response(&message_id, wire_error)
        }
    }
}
