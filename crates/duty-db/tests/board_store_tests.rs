mod common;

use common::{create_test_store, now_millis, sample_board, store_sample_board};

use duty_core::{ContainerId, DropTarget, HandoverItem, Task, TrashedItem, resolve_drag};

use chrono::TimeDelta;
use googletest::prelude::*;

#[tokio::test]
async fn given_saved_board_when_loaded_then_every_section_round_trips() {
    let store = create_test_store().await;
    let mut board = sample_board();
    board.checked_items.insert("x".to_string(), true);
    board.trashed_items.push(TrashedItem::new(
        HandoverItem::new(Task::new("h9", "Archived"), "status_done"),
        now_millis(),
    ));

    store_sample_board(&store, &board).await;
    let loaded = store.load_board().await.unwrap();

    assert_that!(loaded, eq(&board));
}

#[tokio::test]
async fn given_empty_database_when_loaded_then_board_is_empty() {
    let store = create_test_store().await;

    let loaded = store.load_board().await.unwrap();

    assert_that!(loaded.basic_tasks, is_empty());
    assert_that!(loaded.shift_sections, is_empty());
    assert_that!(loaded.status_configs, is_empty());
}

#[tokio::test]
async fn given_resolved_gesture_when_affected_containers_saved_then_reload_matches() {
    let store = create_test_store().await;
    let mut board = sample_board();
    store_sample_board(&store, &board).await;

    // Drag x from s1 onto s2's tab, then persist exactly the containers the
    // outcome names.
    let outcome = resolve_drag(
        &mut board,
        "x",
        Some(&DropTarget::ShiftTab {
            shift_id: "s2".to_string(),
        }),
    );
    assert_that!(outcome.is_changed(), eq(true));
    store
        .save_containers(&board, outcome.changed_containers())
        .await
        .unwrap();

    let loaded = store.load_board().await.unwrap();
    assert_that!(loaded.shift_section("s1").unwrap().tasks, len(eq(1)));
    assert_that!(
        loaded.shift_section("s1").unwrap().tasks[0].id.as_str(),
        eq("y")
    );
    assert_that!(loaded.shift_section("s2").unwrap().tasks, len(eq(1)));
    assert_that!(
        loaded.shift_section("s2").unwrap().tasks[0].id.as_str(),
        eq("x")
    );
}

#[tokio::test]
async fn given_reordered_container_when_saved_then_positions_persist() {
    let store = create_test_store().await;
    let mut board = sample_board();
    store_sample_board(&store, &board).await;

    board.basic_tasks.swap(0, 1);
    store
        .save_containers(&board, &[ContainerId::Basic])
        .await
        .unwrap();

    let loaded = store.load_board().await.unwrap();
    let ids: Vec<&str> = loaded.basic_tasks.iter().map(|t| t.id.as_str()).collect();
    assert_that!(ids[0], eq("b"));
    assert_that!(ids[1], eq("a"));
}

#[tokio::test]
async fn given_shift_removed_from_config_when_saved_then_its_tasks_are_gone() {
    let store = create_test_store().await;
    let mut board = sample_board();
    store_sample_board(&store, &board).await;

    // Drop s1 (which owns tasks) from the shift list.
    board.shift_sections.remove(0);
    store
        .save_config(
            &board.basic_tasks,
            &board.shift_sections,
            &board.status_configs,
        )
        .await
        .unwrap();

    let loaded = store.load_board().await.unwrap();
    assert_that!(loaded.shift_sections, len(eq(1)));
    // The orphaned s1 task rows were dropped with it, so x/y are nowhere.
    assert_that!(loaded.find_container("x"), none());
    assert_that!(loaded.find_container("y"), none());
}

#[tokio::test]
async fn given_checkbox_fast_path_when_toggled_then_only_true_entries_survive() {
    let store = create_test_store().await;
    let board = sample_board();
    store_sample_board(&store, &board).await;

    store.set_checked("s1::a", true).await.unwrap();
    store.set_checked("x", true).await.unwrap();
    store.set_checked("x", false).await.unwrap();

    let loaded = store.load_board().await.unwrap();
    assert_that!(loaded.checked_items.get("s1::a").copied(), some(eq(true)));
    assert_that!(loaded.checked_items.contains_key("x"), eq(false));
}

#[tokio::test]
async fn given_trash_entries_when_purged_by_cutoff_then_only_old_rows_removed() {
    let store = create_test_store().await;
    let now = now_millis();
    let board = sample_board();
    store_sample_board(&store, &board).await;

    store
        .save_trash(&[
            TrashedItem::new(
                HandoverItem::new(Task::new("old", "Old"), "status_done"),
                now - TimeDelta::days(31),
            ),
            TrashedItem::new(
                HandoverItem::new(Task::new("fresh", "Fresh"), "status_done"),
                now - TimeDelta::days(2),
            ),
        ])
        .await
        .unwrap();

    let removed = store
        .purge_trash_older_than(now - TimeDelta::days(30))
        .await
        .unwrap();

    assert_that!(removed, eq(1));
    let loaded = store.load_board().await.unwrap();
    assert_that!(loaded.trashed_items, len(eq(1)));
    assert_that!(loaded.trashed_items[0].id(), eq("fresh"));
}

#[tokio::test]
async fn given_new_database_when_seeded_then_defaults_exist_and_seeding_is_once() {
    let store = create_test_store().await;

    let seeded = store.seed_defaults_if_empty().await.unwrap();
    assert_that!(seeded, eq(true));

    let loaded = store.load_board().await.unwrap();
    assert_that!(loaded.status_configs, len(eq(4)));
    assert_that!(loaded.shift_sections, len(eq(4)));
    assert_that!(loaded.basic_tasks, not(is_empty()));

    let second = store.seed_defaults_if_empty().await.unwrap();
    assert_that!(second, eq(false));
}
