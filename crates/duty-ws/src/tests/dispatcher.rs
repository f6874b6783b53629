use super::seeded_context;
use crate::dispatch;
use crate::protocol::{ClientMessage, ClientPayload, ServerPayload};

use duty_core::{ContainerId, DropTarget};

use googletest::prelude::*;

fn message(id: &str, payload: ClientPayload) -> ClientMessage {
    ClientMessage {
        message_id: id.to_string(),
        payload,
    }
}

#[tokio::test]
async fn given_seeded_store_when_get_board_dispatched_then_board_returned() {
    let (ctx, _broadcaster) = seeded_context("msg-1").await;

    let response = dispatch(message("msg-1", ClientPayload::GetBoard), ctx).await;

    assert_that!(response.message_id, eq("msg-1"));
    match response.payload {
        ServerPayload::Board { board, records } => {
            assert_that!(board.status_configs, len(eq(4)));
            assert_that!(board.shift_sections, len(eq(4)));
            assert_that!(records.records, is_empty());
        }
        other => panic!("expected Board payload, got {other:?}"),
    }
}

#[tokio::test]
async fn given_reorder_gesture_when_dispatched_then_persisted_and_broadcast() {
    let (ctx, broadcaster) = seeded_context("msg-2").await;
    let mut rx = broadcaster.subscribe().await;

    let board = ctx.store.load_board().await.unwrap();
    let first = board.basic_tasks[0].id.clone();
    let second = board.basic_tasks[1].id.clone();

    let response = dispatch(
        message(
            "msg-2",
            ClientPayload::DragEnd {
                active_id: first.clone(),
                over: Some(DropTarget::Task { id: second.clone() }),
            },
        ),
        ctx.clone(),
    )
    .await;

    assert_that!(
        matches!(response.payload, ServerPayload::Ack { changed: true }),
        eq(true)
    );

    // The move is persisted...
    let reloaded = ctx.store.load_board().await.unwrap();
    assert_that!(reloaded.basic_tasks[0].id, eq(&second));
    assert_that!(reloaded.basic_tasks[1].id, eq(&first));

    // ...and announced as a config-section change tagged with the request id.
    let broadcast = rx.try_recv().unwrap();
    assert_that!(broadcast.message_type, eq("config"));
    assert_that!(broadcast.payload.contains("\"msg-2\""), eq(true));
}

#[tokio::test]
async fn given_self_drop_gesture_when_dispatched_then_noop_and_silent() {
    let (ctx, broadcaster) = seeded_context("msg-3").await;
    let mut rx = broadcaster.subscribe().await;

    let board = ctx.store.load_board().await.unwrap();
    let task_id = board.basic_tasks[0].id.clone();

    let response = dispatch(
        message(
            "msg-3",
            ClientPayload::DragEnd {
                active_id: task_id.clone(),
                over: Some(DropTarget::Task { id: task_id }),
            },
        ),
        ctx,
    )
    .await;

    assert_that!(
        matches!(response.payload, ServerPayload::Ack { changed: false }),
        eq(true)
    );
    assert_that!(rx.try_recv().is_err(), eq(true));
}

#[tokio::test]
async fn given_cancelled_gesture_when_dispatched_then_noop() {
    let (ctx, _broadcaster) = seeded_context("msg-4").await;
    let board = ctx.store.load_board().await.unwrap();

    let response = dispatch(
        message(
            "msg-4",
            ClientPayload::DragEnd {
                active_id: board.basic_tasks[0].id.clone(),
                over: None,
            },
        ),
        ctx,
    )
    .await;

    assert_that!(
        matches!(response.payload, ServerPayload::Ack { changed: false }),
        eq(true)
    );
}

#[tokio::test]
async fn given_unknown_task_when_deleted_then_not_found_error() {
    let (ctx, _broadcaster) = seeded_context("msg-5").await;

    let response = dispatch(
        message(
            "msg-5",
            ClientPayload::DeleteTask {
                container: ContainerId::Basic,
                task_id: "ghost".to_string(),
            },
        ),
        ctx,
    )
    .await;

    match response.payload {
        ServerPayload::Error(error) => assert_that!(error.code, eq("NOT_FOUND")),
        other => panic!("expected Error payload, got {other:?}"),
    }
}

#[tokio::test]
async fn given_add_task_when_dispatched_then_created_and_stored() {
    let (ctx, _broadcaster) = seeded_context("msg-6").await;
    let before = ctx.store.load_board().await.unwrap().basic_tasks.len();

    let response = dispatch(
        message(
            "msg-6",
            ClientPayload::AddTask {
                container: ContainerId::Basic,
            },
        ),
        ctx.clone(),
    )
    .await;

    let created_id = match response.payload {
        ServerPayload::Created { id } => id,
        other => panic!("expected Created payload, got {other:?}"),
    };

    let board = ctx.store.load_board().await.unwrap();
    assert_that!(board.basic_tasks, len(eq(before + 1)));
    assert_that!(
        board.find_container(&created_id),
        some(eq(&ContainerId::Basic))
    );
}

#[tokio::test]
async fn given_done_status_when_set_then_item_archived_and_trash_broadcast() {
    let (ctx, broadcaster) = seeded_context("msg-7").await;

    // Create a handover item first.
    let response = dispatch(
        message(
            "msg-7",
            ClientPayload::AddTask {
                container: ContainerId::Handover,
            },
        ),
        ctx.clone(),
    )
    .await;
    let item_id = match response.payload {
        ServerPayload::Created { id } => id,
        other => panic!("expected Created payload, got {other:?}"),
    };

    let mut rx = broadcaster.subscribe().await;
    let response = dispatch(
        message(
            "msg-8",
            ClientPayload::SetHandoverStatus {
                task_id: item_id.clone(),
                status_id: "status_done".to_string(),
            },
        ),
        ctx.clone(),
    )
    .await;
    assert_that!(
        matches!(response.payload, ServerPayload::Ack { changed: true }),
        eq(true)
    );

    let board = ctx.store.load_board().await.unwrap();
    assert_that!(board.handover_items, is_empty());
    assert_that!(board.trashed_items, len(eq(1)));
    assert_that!(board.trashed_items[0].id(), eq(item_id.as_str()));

    let kinds: Vec<&str> = [rx.try_recv().unwrap(), rx.try_recv().unwrap()]
        .iter()
        .map(|b| b.message_type)
        .collect();
    assert_that!(kinds.contains(&"state"), eq(true));
    assert_that!(kinds.contains(&"trash"), eq(true));
}

#[tokio::test]
async fn given_handover_item_when_dragged_onto_shift_tab_then_noop() {
    let (ctx, _broadcaster) = seeded_context("msg-9").await;

    let response = dispatch(
        message(
            "msg-9",
            ClientPayload::AddTask {
                container: ContainerId::Handover,
            },
        ),
        ctx.clone(),
    )
    .await;
    let item_id = match response.payload {
        ServerPayload::Created { id } => id,
        other => panic!("expected Created payload, got {other:?}"),
    };

    let response = dispatch(
        message(
            "msg-10",
            ClientPayload::DragEnd {
                active_id: item_id.clone(),
                over: Some(DropTarget::ShiftTab {
                    shift_id: duty_core::defaults::SHIFT_MORNING.to_string(),
                }),
            },
        ),
        ctx.clone(),
    )
    .await;

    assert_that!(
        matches!(response.payload, ServerPayload::Ack { changed: false }),
        eq(true)
    );
    let board = ctx.store.load_board().await.unwrap();
    assert_that!(board.handover_items, len(eq(1)));
}

#[tokio::test]
async fn given_ping_when_dispatched_then_pong_echoes_timestamp() {
    let (ctx, _broadcaster) = seeded_context("msg-11").await;

    let response = dispatch(
        message("msg-11", ClientPayload::Ping { timestamp: 1234 }),
        ctx,
    )
    .await;

    assert_that!(
        matches!(response.payload, ServerPayload::Pong { timestamp: 1234 }),
        eq(true)
    );
}

#[tokio::test]
async fn given_oversized_label_when_task_updated_then_validation_error() {
    let (ctx, _broadcaster) = seeded_context("msg-12").await;
    let board = ctx.store.load_board().await.unwrap();

    let response = dispatch(
        message(
            "msg-12",
            ClientPayload::UpdateTask {
                container: ContainerId::Basic,
                task_id: board.basic_tasks[0].id.clone(),
                patch: duty_core::TaskPatch {
                    label: Some("x".repeat(500)),
                    ..Default::default()
                },
            },
        ),
        ctx,
    )
    .await;

    match response.payload {
        ServerPayload::Error(error) => assert_that!(error.code, eq("VALIDATION_ERROR")),
        other => panic!("expected Error payload, got {other:?}"),
    }
}

#[tokio::test]
async fn given_record_workflow_when_dispatched_then_sections_update() {
    let (ctx, _broadcaster) = seeded_context("msg-13").await;

    let response = dispatch(message("msg-13", ClientPayload::AddGroup), ctx.clone()).await;
    let group_id = match response.payload {
        ServerPayload::Created { id } => id,
        other => panic!("expected Created payload, got {other:?}"),
    };

    let response = dispatch(
        message(
            "msg-14",
            ClientPayload::AddRecord {
                group_id: Some(group_id.clone()),
            },
        ),
        ctx.clone(),
    )
    .await;
    let record_id = match response.payload {
        ServerPayload::Created { id } => id,
        other => panic!("expected Created payload, got {other:?}"),
    };

    let set = ctx.store.load_records().await.unwrap();
    assert_that!(set.records, len(eq(1)));
    assert_that!(set.records[0].id, eq(&record_id));
    assert_that!(set.records[0].group_id.as_deref(), some(eq(group_id.as_str())));

    // Deleting the group ungroups the record.
    dispatch(
        message("msg-15", ClientPayload::DeleteGroup { group_id }),
        ctx.clone(),
    )
    .await;
    let set = ctx.store.load_records().await.unwrap();
    assert_that!(set.groups, is_empty());
    assert_that!(set.records[0].group_id, none());
}
