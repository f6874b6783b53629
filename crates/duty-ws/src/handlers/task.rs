use crate::Result as WsErrorResult;
use crate::handlers::response_builder::{build_ack_response, build_created_response};
use crate::protocol::{SectionPayload, ServerMessage};
use crate::{HandlerContext, MessageValidator};

use duty_core::{ContainerId, TaskPatch};

use log::{debug, info};
use uuid::Uuid;

/// Create a placeholder task; the client puts it straight into edit mode.
pub async fn handle_add_task(
    container: ContainerId,
    ctx: HandlerContext,
) -> WsErrorResult<ServerMessage> {
    debug!("{} AddTask in {container}", ctx.log_prefix());

    let mut board = ctx.store.load_board().await?;
    if let Some(ids) = board.task_ids(&container) {
        MessageValidator::validate_container_capacity(ids.len(), &ctx.validation)?;
    }

    let task_id = format!("task_{}", Uuid::new_v4().as_simple());
    board.add_task(&container, task_id.clone())?;
    ctx.store
        .save_containers(&board, std::slice::from_ref(&container))
        .await?;

    broadcast_container_section(&ctx, &container, &board);

    info!("{} Added task {task_id} to {container}", ctx.log_prefix());
    Ok(build_created_response(&ctx.message_id, task_id))
}

pub async fn handle_update_task(
    container: ContainerId,
    task_id: String,
    patch: TaskPatch,
    ctx: HandlerContext,
) -> WsErrorResult<ServerMessage> {
    debug!("{} UpdateTask {task_id} in {container}", ctx.log_prefix());

    MessageValidator::validate_task_patch(&patch, &ctx.validation)?;

    let mut board = ctx.store.load_board().await?;
    board.update_task(&container, &task_id, patch)?;
    ctx.store
        .save_containers(&board, std::slice::from_ref(&container))
        .await?;

    broadcast_container_section(&ctx, &container, &board);

    info!("{} Updated task {task_id}", ctx.log_prefix());
    Ok(build_ack_response(&ctx.message_id, true))
}

pub async fn handle_delete_task(
    container: ContainerId,
    task_id: String,
    ctx: HandlerContext,
) -> WsErrorResult<ServerMessage> {
    debug!("{} DeleteTask {task_id} in {container}", ctx.log_prefix());

    let mut board = ctx.store.load_board().await?;
    board.delete_task(&container, &task_id)?;
    ctx.store
        .save_containers(&board, std::slice::from_ref(&container))
        .await?;

    broadcast_container_section(&ctx, &container, &board);

    info!("{} Deleted task {task_id}", ctx.log_prefix());
    Ok(build_ack_response(&ctx.message_id, true))
}

fn broadcast_container_section(
    ctx: &HandlerContext,
    container: &ContainerId,
    board: &duty_core::BoardState,
) {
    if container.is_handover() {
        ctx.broadcast_section(SectionPayload::state(board));
    } else {
        ctx.broadcast_section(SectionPayload::config(board));
    }
}
