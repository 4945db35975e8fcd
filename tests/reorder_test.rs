//! Integration tests for drag-placement geometry.

use fitdash::tracker::types::StatId;
use fitdash::ui::reorder::{apply_drag, insertion_index, DragState};

#[test]
fn test_insertion_targets_first_midpoint_below_pointer() {
    // Siblings with midpoints 50/150/250; pointer at 120 selects the
    // sibling at 150.
    assert_eq!(insertion_index(120.0, &[50.0, 150.0, 250.0]), Some(1));
}

#[test]
fn test_pointer_below_all_midpoints_appends() {
    assert_eq!(insertion_index(260.0, &[50.0, 150.0, 250.0]), None);
}

#[test]
fn test_full_reorder_gesture() {
    let mut order = vec![
        StatId::Steps,
        StatId::Calories,
        StatId::Distance,
        StatId::ActiveMinutes,
        StatId::HeartRate,
    ];
    let mut drag = DragState::new();

    drag.start(StatId::HeartRate);
    assert!(drag.is_dragging(StatId::HeartRate));

    // Remaining siblings sit at 50/150/250/350; pointer at 120 puts the
    // dragged card before Calories.
    apply_drag(
        &mut order,
        StatId::HeartRate,
        120.0,
        &[50.0, 150.0, 250.0, 350.0],
    );
    assert_eq!(
        order,
        vec![
            StatId::Steps,
            StatId::HeartRate,
            StatId::Calories,
            StatId::Distance,
            StatId::ActiveMinutes,
        ]
    );

    drag.clear();
    assert_eq!(drag.dragged(), None);
}

#[test]
fn test_drag_without_crossing_keeps_order() {
    let mut order = vec![StatId::Steps, StatId::Calories, StatId::Distance];

    // Pointer still above the other midpoints: Steps stays first.
    apply_drag(&mut order, StatId::Steps, 40.0, &[150.0, 250.0]);
    assert_eq!(
        order,
        vec![StatId::Steps, StatId::Calories, StatId::Distance]
    );
}

#[test]
fn test_drop_below_container_appends() {
    let mut order = vec![StatId::Steps, StatId::Calories, StatId::Distance];

    apply_drag(&mut order, StatId::Steps, 1000.0, &[150.0, 250.0]);
    assert_eq!(
        order,
        vec![StatId::Calories, StatId::Distance, StatId::Steps]
    );
}
