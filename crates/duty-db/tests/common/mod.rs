#![allow(dead_code)]

use duty_core::{BoardState, HandoverItem, ShiftSection, StatusConfig, Task};

use chrono::{DateTime, Utc};
use duty_db::BoardStore;

/// An in-memory store with migrations run.
pub async fn create_test_store() -> BoardStore {
    let pool = duty_db::create_memory_pool()
        .await
        .expect("Failed to create test pool");
    BoardStore::new(pool)
}

/// Millisecond-precision "now": the store keeps timestamps as unix millis.
pub fn now_millis() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(Utc::now().timestamp_millis()).unwrap()
}

/// basic = [a, b], s1 = [x, y], s2 = [], handover = [h1]
pub fn sample_board() -> BoardState {
    let mut s1 = ShiftSection::new("s1", "08-12 duty", "08:00 - 12:00", "#2563eb");
    s1.tasks = vec![Task::new("x", "X"), Task::new("y", "Y")];
    let s2 = ShiftSection::new("s2", "12-18 duty", "12:00 - 18:00", "#16a34a");

    let mut subtexted = Task::new("b", "B");
    subtexted.subtext = Some("with details".to_string());
    subtexted.show_on_days = Some(vec![1, 3]);
    subtexted.show_in_months = Some(vec![10, 11, 12]);

    BoardState {
        basic_tasks: vec![Task::new("a", "A"), subtexted],
        shift_sections: vec![s1, s2],
        handover_items: vec![HandoverItem::new(Task::new("h1", "H1"), "status_pending")],
        status_configs: vec![
            StatusConfig::new("status_pending", "Pending", "#94a3b8"),
            StatusConfig::done("status_done", "Done", "#10b981"),
        ],
        checked_items: Default::default(),
        trashed_items: Vec::new(),
    }
}

/// Persist every section of the sample board.
pub async fn store_sample_board(store: &BoardStore, board: &BoardState) {
    store
        .save_config(
            &board.basic_tasks,
            &board.shift_sections,
            &board.status_configs,
        )
        .await
        .unwrap();
    store
        .save_state(&board.checked_items, &board.handover_items)
        .await
        .unwrap();
    store.save_trash(&board.trashed_items).await.unwrap();
}
