use super::{basic_ids, handover_ids, sample_board, shift_ids};
use crate::{ContainerId, DragOutcome, DropTarget, resolve_drag};

fn task(id: &str) -> DropTarget {
    DropTarget::Task { id: id.to_string() }
}

fn header(container: ContainerId) -> DropTarget {
    DropTarget::ContainerHeader { container }
}

fn shift_tab(id: &str) -> DropTarget {
    DropTarget::ShiftTab {
        shift_id: id.to_string(),
    }
}

#[test]
fn given_drag_within_basic_when_dropped_on_later_task_then_stable_move() {
    let mut board = sample_board();

    let outcome = resolve_drag(&mut board, "b", Some(&task("c")));

    assert_eq!(basic_ids(&board), vec!["a", "c", "b"]);
    assert_eq!(
        outcome,
        DragOutcome::Moved {
            changed: vec![ContainerId::Basic]
        }
    );
}

#[test]
fn given_drag_within_basic_when_dropped_on_earlier_task_then_stable_move() {
    let mut board = sample_board();

    resolve_drag(&mut board, "c", Some(&task("a")));

    assert_eq!(basic_ids(&board), vec!["c", "a", "b"]);
}

#[test]
fn given_drag_when_released_without_target_then_no_change() {
    let mut board = sample_board();
    let before = board.clone();

    let outcome = resolve_drag(&mut board, "b", None);

    assert_eq!(outcome, DragOutcome::Unchanged);
    assert_eq!(board, before);
}

#[test]
fn given_drag_when_dropped_on_itself_then_no_change() {
    let mut board = sample_board();
    let before = board.clone();

    let outcome = resolve_drag(&mut board, "b", Some(&task("b")));

    assert_eq!(outcome, DragOutcome::Unchanged);
    assert_eq!(board, before);
}

#[test]
fn given_unknown_active_task_when_resolved_then_no_change() {
    let mut board = sample_board();
    let before = board.clone();

    let outcome = resolve_drag(&mut board, "ghost", Some(&task("a")));

    assert_eq!(outcome, DragOutcome::Unchanged);
    assert_eq!(board, before);
}

#[test]
fn given_unknown_over_task_when_resolved_then_no_change() {
    let mut board = sample_board();
    let before = board.clone();

    let outcome = resolve_drag(&mut board, "a", Some(&task("ghost")));

    assert_eq!(outcome, DragOutcome::Unchanged);
    assert_eq!(board, before);
}

#[test]
fn given_shift_task_when_dropped_on_empty_shift_tab_then_moved_atomically() {
    let mut board = sample_board();
    let count_before = board.task_count();

    let outcome = resolve_drag(&mut board, "x", Some(&shift_tab("s2")));

    assert_eq!(shift_ids(&board, "s1"), vec!["y"]);
    assert_eq!(shift_ids(&board, "s2"), vec!["x"]);
    assert_eq!(board.task_count(), count_before);
    assert_eq!(
        outcome,
        DragOutcome::Moved {
            changed: vec![ContainerId::shift("s1"), ContainerId::shift("s2")]
        }
    );
}

#[test]
fn given_basic_task_when_dropped_on_shift_tab_then_appended_to_shift() {
    let mut board = sample_board();

    resolve_drag(&mut board, "a", Some(&shift_tab("s1")));

    assert_eq!(basic_ids(&board), vec!["b", "c"]);
    assert_eq!(shift_ids(&board, "s1"), vec!["x", "y", "a"]);
}

#[test]
fn given_shift_task_when_dropped_on_its_own_tab_then_no_change() {
    let mut board = sample_board();
    let before = board.clone();

    let outcome = resolve_drag(&mut board, "x", Some(&shift_tab("s1")));

    assert_eq!(outcome, DragOutcome::Unchanged);
    assert_eq!(board, before);
}

#[test]
fn given_handover_item_when_dropped_on_any_shift_tab_then_no_change() {
    let mut board = sample_board();
    let before = board.clone();

    for tab in ["s1", "s2"] {
        let outcome = resolve_drag(&mut board, "h1", Some(&shift_tab(tab)));
        assert_eq!(outcome, DragOutcome::Unchanged);
    }
    assert_eq!(board, before);
}

#[test]
fn given_unknown_shift_tab_when_resolved_then_no_change() {
    let mut board = sample_board();
    let before = board.clone();

    let outcome = resolve_drag(&mut board, "a", Some(&shift_tab("s9")));

    assert_eq!(outcome, DragOutcome::Unchanged);
    assert_eq!(board, before);
}

#[test]
fn given_handover_item_when_dropped_on_basic_task_then_no_change() {
    let mut board = sample_board();
    let before = board.clone();

    let outcome = resolve_drag(&mut board, "h1", Some(&task("a")));

    assert_eq!(outcome, DragOutcome::Unchanged);
    assert_eq!(board, before);
}

#[test]
fn given_basic_task_when_dropped_on_handover_header_then_no_change() {
    let mut board = sample_board();
    let before = board.clone();

    let outcome = resolve_drag(&mut board, "a", Some(&header(ContainerId::Handover)));

    assert_eq!(outcome, DragOutcome::Unchanged);
    assert_eq!(board, before);
}

#[test]
fn given_handover_items_when_reordered_within_handover_then_stable_move() {
    let mut board = sample_board();

    let outcome = resolve_drag(&mut board, "h2", Some(&task("h1")));

    assert_eq!(handover_ids(&board), vec!["h2", "h1"]);
    assert_eq!(
        outcome,
        DragOutcome::Moved {
            changed: vec![ContainerId::Handover]
        }
    );
}

#[test]
fn given_basic_task_when_dropped_on_shift_task_then_inserted_at_its_index() {
    let mut board = sample_board();

    let outcome = resolve_drag(&mut board, "b", Some(&task("y")));

    assert_eq!(basic_ids(&board), vec!["a", "c"]);
    assert_eq!(shift_ids(&board, "s1"), vec!["x", "b", "y"]);
    assert_eq!(
        outcome,
        DragOutcome::Moved {
            changed: vec![ContainerId::Basic, ContainerId::shift("s1")]
        }
    );
}

#[test]
fn given_shift_task_when_dropped_on_empty_container_header_then_appended() {
    let mut board = sample_board();

    resolve_drag(
        &mut board,
        "y",
        Some(&header(ContainerId::shift("s2"))),
    );

    assert_eq!(shift_ids(&board, "s1"), vec!["x"]);
    assert_eq!(shift_ids(&board, "s2"), vec!["y"]);
}

#[test]
fn given_drag_when_dropped_on_own_container_header_then_no_change() {
    let mut board = sample_board();
    let before = board.clone();

    let outcome = resolve_drag(&mut board, "b", Some(&header(ContainerId::Basic)));

    assert_eq!(outcome, DragOutcome::Unchanged);
    assert_eq!(board, before);
}

#[test]
fn given_any_resolved_move_when_applied_then_total_task_count_is_invariant() {
    let gestures: Vec<(&str, DropTarget)> = vec![
        ("b", task("c")),
        ("a", shift_tab("s1")),
        ("x", shift_tab("s2")),
        ("b", task("y")),
        ("h1", task("h2")),
        ("y", header(ContainerId::Basic)),
    ];

    let mut board = sample_board();
    let expected = board.task_count();
    for (active, over) in gestures {
        resolve_drag(&mut board, active, Some(&over));
        assert_eq!(board.task_count(), expected);
    }
}
