use crate::HandlerContext;
use crate::Result as WsErrorResult;
use crate::handlers::response_builder::build_ack_response;
use crate::protocol::{SectionPayload, ServerMessage};

use duty_core::records::{RecordDragOutcome, RecordDragSource, RecordDropTarget};
use duty_core::{ContainerId, DragOutcome, DropTarget, resolve_drag, resolve_record_drag};

use log::{debug, info};

/// A board drag gesture. Unresolvable gestures ack `changed: false` and are
/// not broadcast; that silence is the intended behavior for a failed drop.
pub async fn handle_drag_end(
    active_id: String,
    over: Option<DropTarget>,
    ctx: HandlerContext,
) -> WsErrorResult<ServerMessage> {
    debug!(
        "{} DragEnd: active={} over={:?}",
        ctx.log_prefix(),
        active_id,
        over
    );

    let mut board = ctx.store.load_board().await?;
    let outcome = resolve_drag(&mut board, &active_id, over.as_ref());

    match &outcome {
        DragOutcome::Unchanged => {
            debug!("{} DragEnd resolved to no-op", ctx.log_prefix());
            Ok(build_ack_response(&ctx.message_id, false))
        }
        DragOutcome::Moved { changed } => {
            ctx.store.save_containers(&board, changed).await?;

            let (config_changed, state_changed) = sections_for(changed);
            if config_changed {
                ctx.broadcast_section(SectionPayload::config(&board));
            }
            if state_changed {
                ctx.broadcast_section(SectionPayload::state(&board));
            }

            info!(
                "{} Moved task {} across {} container(s)",
                ctx.log_prefix(),
                active_id,
                changed.len()
            );
            Ok(build_ack_response(&ctx.message_id, true))
        }
    }
}

/// A records-board drag gesture (record reorder/regroup or group reorder).
pub async fn handle_record_drag_end(
    active: RecordDragSource,
    over: Option<RecordDropTarget>,
    ctx: HandlerContext,
) -> WsErrorResult<ServerMessage> {
    debug!(
        "{} RecordDragEnd: active={:?} over={:?}",
        ctx.log_prefix(),
        active,
        over
    );

    let mut set = ctx.store.load_records().await?;
    let outcome = resolve_record_drag(&mut set, &active, over.as_ref());

    match outcome {
        RecordDragOutcome::Unchanged => {
            debug!("{} RecordDragEnd resolved to no-op", ctx.log_prefix());
            Ok(build_ack_response(&ctx.message_id, false))
        }
        RecordDragOutcome::RecordsChanged => {
            ctx.store.save_records(&set.records).await?;
            ctx.broadcast_section(SectionPayload::records(&set));
            info!("{} Rearranged work records", ctx.log_prefix());
            Ok(build_ack_response(&ctx.message_id, true))
        }
        RecordDragOutcome::GroupsChanged => {
            ctx.store.save_groups(&set.groups).await?;
            ctx.broadcast_section(SectionPayload::groups(&set));
            info!("{} Reordered record groups", ctx.log_prefix());
            Ok(build_ack_response(&ctx.message_id, true))
        }
    }
}

/// Basic and shift task lists travel in the config section; the handover
/// list travels in the state section.
fn sections_for(containers: &[ContainerId]) -> (bool, bool) {
    let mut config_changed = false;
    let mut state_changed = false;
    for container in containers {
        if container.is_handover() {
            state_changed = true;
        } else {
            config_changed = true;
        }
    }
    (config_changed, state_changed)
}
