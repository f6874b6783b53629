mod resolver;

use crate::{BoardState, HandoverItem, ShiftSection, StatusConfig, Task};

/// A board with three basic tasks, two shifts and two handover items:
///
/// basic    = [a, b, c]
/// shift S1 = [x, y]
/// shift S2 = []
/// handover = [h1, h2]
pub(crate) fn sample_board() -> BoardState {
    let mut s1 = ShiftSection::new("s1", "08-12 duty", "08:00 - 12:00", "#2563eb");
    s1.tasks = vec![Task::new("x", "X"), Task::new("y", "Y")];
    let s2 = ShiftSection::new("s2", "12-18 duty", "12:00 - 18:00", "#16a34a");

    BoardState {
        basic_tasks: vec![Task::new("a", "A"), Task::new("b", "B"), Task::new("c", "C")],
        shift_sections: vec![s1, s2],
        handover_items: vec![
            HandoverItem::new(Task::new("h1", "H1"), "status_pending"),
            HandoverItem::new(Task::new("h2", "H2"), "status_pending"),
        ],
        status_configs: vec![
            StatusConfig::new("status_pending", "Pending", "#94a3b8"),
            StatusConfig::new("status_progress", "In progress", "#3b82f6"),
            StatusConfig::done("status_done", "Done", "#10b981"),
        ],
        checked_items: Default::default(),
        trashed_items: Vec::new(),
    }
}

pub(crate) fn basic_ids(board: &BoardState) -> Vec<&str> {
    board.basic_tasks.iter().map(|t| t.id.as_str()).collect()
}

pub(crate) fn shift_ids<'a>(board: &'a BoardState, shift: &str) -> Vec<&'a str> {
    board
        .shift_section(shift)
        .map(|s| s.tasks.iter().map(|t| t.id.as_str()).collect())
        .unwrap_or_default()
}

pub(crate) fn handover_ids(board: &BoardState) -> Vec<&str> {
    board.handover_items.iter().map(|i| i.id()).collect()
}
