use super::*;

#[test]
fn start_moves_idle_to_dragging() {
    let mut drag = DragState::default();
    assert_eq!(drag, DragState::Idle);

    assert!(drag.start(1, 3));
    assert_eq!(drag, DragState::Dragging { source: 1 });
    assert_eq!(drag.source(), Some(1));
}

#[test]
fn start_outside_rows_stays_idle() {
    let mut drag = DragState::Idle;
    assert!(!drag.start(3, 3));
    assert!(!drag.start(0, 0));
    assert_eq!(drag, DragState::Idle);
}

#[test]
fn start_while_dragging_replaces_source() {
    let mut drag = DragState::Dragging { source: 0 };
    assert!(drag.start(2, 3));
    assert_eq!(drag.source(), Some(2));
}

#[test]
fn over_accepts_rows_without_transition() {
    let drag = DragState::Dragging { source: 0 };
    assert!(drag.over(2, 3));
    assert!(!drag.over(3, 3));
    assert_eq!(drag, DragState::Dragging { source: 0 });

    assert!(!DragState::Idle.over(0, 3));
}

#[test]
fn drop_reorders_and_returns_to_idle() {
    let mut habits = HabitList::from_names(["A", "B", "C"]);
    let mut drag = DragState::Idle;
    drag.start(0, habits.len());

    assert_eq!(drag.drop_on(2, &mut habits), (true, true));

    assert_eq!(drag, DragState::Idle);
    assert_eq!(habits.names(), vec!["B", "C", "A"]);
}

#[test]
fn drop_on_source_row_leaves_order_unchanged() {
    let mut habits = HabitList::from_names(["A", "B", "C"]);
    let mut drag = DragState::Dragging { source: 1 };

    assert_eq!(drag.drop_on(1, &mut habits), (true, false));

    assert_eq!(drag, DragState::Idle);
    assert_eq!(habits.names(), vec!["A", "B", "C"]);
}

#[test]
fn stray_drop_without_source_is_ignored() {
    let mut habits = HabitList::from_names(["A", "B", "C"]);
    let mut drag = DragState::Idle;

    assert_eq!(drag.drop_on(0, &mut habits), (false, false));
    assert_eq!(habits.names(), vec!["A", "B", "C"]);
}

#[test]
fn drop_with_stale_source_is_ignored_by_the_list() {
    let mut habits = HabitList::from_names(["A"]);
    let mut drag = DragState::Dragging { source: 4 };

    assert_eq!(drag.drop_on(0, &mut habits), (true, false));
    assert_eq!(drag, DragState::Idle);
    assert_eq!(habits.names(), vec!["A"]);
}

#[test]
fn cancel_reports_whether_a_drag_was_abandoned() {
    let mut drag = DragState::Dragging { source: 0 };
    assert!(drag.cancel());
    assert!(!drag.cancel());
    assert_eq!(drag, DragState::Idle);
}
