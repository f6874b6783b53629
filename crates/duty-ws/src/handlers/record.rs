use crate::Result as WsErrorResult;
use crate::handlers::response_builder::{build_ack_response, build_created_response};
use crate::protocol::{SectionPayload, ServerMessage};
use crate::{HandlerContext, MessageValidator};

use duty_core::WorkRecord;

use log::{debug, info};
use uuid::Uuid;

pub async fn handle_add_record(
    group_id: Option<String>,
    ctx: HandlerContext,
) -> WsErrorResult<ServerMessage> {
    debug!("{} AddRecord (group {group_id:?})", ctx.log_prefix());

    let mut set = ctx.store.load_records().await?;
    MessageValidator::validate_container_capacity(set.records.len(), &ctx.validation)?;

    let record_id = format!("wr_{}", Uuid::new_v4().as_simple());
    set.add_record(record_id.clone(), group_id);
    ctx.store.save_records(&set.records).await?;
    ctx.broadcast_section(SectionPayload::records(&set));

    info!("{} Added work record {record_id}", ctx.log_prefix());
    Ok(build_created_response(&ctx.message_id, record_id))
}

/// The record editor saves whole records: replace when known, append when
/// new.
pub async fn handle_update_record(
    record: WorkRecord,
    ctx: HandlerContext,
) -> WsErrorResult<ServerMessage> {
    debug!("{} UpdateRecord {}", ctx.log_prefix(), record.id);

    MessageValidator::validate_record(&record, &ctx.validation)?;

    let mut set = ctx.store.load_records().await?;
    let record_id = record.id.clone();
    set.upsert_record(record);
    ctx.store.save_records(&set.records).await?;
    ctx.broadcast_section(SectionPayload::records(&set));

    info!("{} Saved work record {record_id}", ctx.log_prefix());
    Ok(build_ack_response(&ctx.message_id, true))
}

pub async fn handle_delete_record(
    record_id: String,
    ctx: HandlerContext,
) -> WsErrorResult<ServerMessage> {
    debug!("{} DeleteRecord {record_id}", ctx.log_prefix());

    let mut set = ctx.store.load_records().await?;
    set.delete_record(&record_id)?;
    ctx.store.save_records(&set.records).await?;
    ctx.broadcast_section(SectionPayload::records(&set));

    info!("{} Deleted work record {record_id}", ctx.log_prefix());
    Ok(build_ack_response(&ctx.message_id, true))
}

pub async fn handle_add_group(ctx: HandlerContext) -> WsErrorResult<ServerMessage> {
    debug!("{} AddGroup", ctx.log_prefix());

    let mut set = ctx.store.load_records().await?;
    let group_id = format!("wg_{}", Uuid::new_v4().as_simple());
    set.add_group(group_id.clone());
    ctx.store.save_groups(&set.groups).await?;
    ctx.broadcast_section(SectionPayload::groups(&set));

    info!("{} Added record group {group_id}", ctx.log_prefix());
    Ok(build_created_response(&ctx.message_id, group_id))
}

pub async fn handle_rename_group(
    group_id: String,
    title: String,
    ctx: HandlerContext,
) -> WsErrorResult<ServerMessage> {
    debug!("{} RenameGroup {group_id}", ctx.log_prefix());

    MessageValidator::validate_string(&title, "title", ctx.validation.max_label_length)?;

    let mut set = ctx.store.load_records().await?;
    set.rename_group(&group_id, title)?;
    ctx.store.save_groups(&set.groups).await?;
    ctx.broadcast_section(SectionPayload::groups(&set));

    info!("{} Renamed record group {group_id}", ctx.log_prefix());
    Ok(build_ack_response(&ctx.message_id, true))
}

/// Deleting a group ungroups its records; both lists are rewritten together.
pub async fn handle_delete_group(
    group_id: String,
    ctx: HandlerContext,
) -> WsErrorResult<ServerMessage> {
    debug!("{} DeleteGroup {group_id}", ctx.log_prefix());

    let mut set = ctx.store.load_records().await?;
    set.delete_group(&group_id)?;
    ctx.store.save_record_set(&set).await?;
    ctx.broadcast_section(SectionPayload::groups(&set));
    ctx.broadcast_section(SectionPayload::records(&set));

    info!("{} Deleted record group {group_id}", ctx.log_prefix());
    Ok(build_ack_response(&ctx.message_id, true))
}
