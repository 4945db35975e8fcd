//! Integration tests for the tracker state and its derived views.

use chrono::NaiveDate;
use fitdash::tracker::store::CollectionStore;
use fitdash::tracker::types::{Meal, StatEntry, StatId, Workout, WorkoutCategory, WorkoutFilter};
use fitdash::tracker::TrackerState;

fn june() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn workout(name: &str, category: WorkoutCategory) -> Workout {
    Workout {
        id: 0,
        name: name.to_string(),
        category,
    }
}

fn meal(name: &str) -> Meal {
    Meal {
        id: 0,
        name: name.to_string(),
        calories: 400,
        protein: 20,
        carbs: 30,
        fats: 10,
    }
}

#[test]
fn test_add_grows_by_one_with_fresh_id() {
    let mut store = CollectionStore::new();
    let mut ids = Vec::new();

    for i in 0..5 {
        let before = store.len();
        let id = store.add(workout(&format!("w{i}"), WorkoutCategory::Cardio));
        assert_eq!(store.len(), before + 1);
        assert!(!ids.contains(&id));
        ids.push(id);
    }
}

#[test]
fn test_remove_absent_id_changes_nothing() {
    let mut store = CollectionStore::new();
    store.add(workout("Morning Run", WorkoutCategory::Cardio));
    store.add(workout("Weight Lifting", WorkoutCategory::Strength));

    let before: Vec<Workout> = store.items().to_vec();
    store.remove(u64::MAX);

    assert_eq!(store.len(), 2);
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn test_filter_by_category_preserves_order() {
    let mut state = TrackerState::with_demo_data(june());
    state.add_workout("Evening Run".to_string(), WorkoutCategory::Cardio);

    let cardio = state.filtered_workouts(WorkoutFilter::Category(WorkoutCategory::Cardio));
    let names: Vec<&str> = cardio.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, ["Morning Run", "Evening Run"]);

    // The underlying collection is untouched.
    assert_eq!(state.workouts().len(), 4);
    assert_eq!(state.workouts()[0].name, "Morning Run");
}

#[test]
fn test_achievement_relock_renotifies() {
    let mut state = TrackerState::with_demo_data(june());

    // Cross the steps threshold: one unlock event.
    let events = state.set_stat_value(StatId::Steps, 11000.0);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "10k Steps");

    // Holding above the threshold emits nothing new.
    let events = state.set_stat_value(StatId::Steps, 11500.0);
    assert!(events.is_empty());

    // Falling below re-locks silently.
    let events = state.set_stat_value(StatId::Steps, 9000.0);
    assert!(events.is_empty());
    assert!(!state.is_unlocked(1));

    // Crossing again emits a fresh event.
    let events = state.set_stat_value(StatId::Steps, 10000.0);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, 1);
}

#[test]
fn test_calendar_keys_for_workouts_and_meals() {
    let mut state = TrackerState::with_demo_data(june());
    // Demo data has 3 workouts (days 3, 7, 11) and 2 meals (days 7, 12).
    let expect_marked = [(6, 3), (6, 7), (6, 11), (6, 12)];
    for (month, day) in expect_marked {
        let date = NaiveDate::from_ymd_opt(2024, month, day).unwrap();
        assert!(
            state.calendar().activities_on(date).is_some(),
            "expected marker on 2024-{month:02}-{day:02}"
        );
    }

    // A fourth meal at index 3 lands on day 7 + 5*3 = 22.
    state.add_meal(meal("Snack"));
    state.add_meal(meal("Dinner"));
    let day22 = NaiveDate::from_ymd_opt(2024, 6, 22).unwrap();
    assert!(state.calendar().activities_on(day22).is_some());
}

#[test]
fn test_progress_percentage_rounds_and_clamps() {
    let near = StatEntry::new(StatId::Steps, "Steps", "🥾", 9050.0, 10000.0);
    assert_eq!(near.progress(), 91);

    let over = StatEntry::new(StatId::Steps, "Steps", "🥾", 12000.0, 10000.0);
    assert_eq!(over.progress(), 100);
}

#[test]
fn test_workout_mutations_rebuild_calendar() {
    let mut state = TrackerState::with_demo_data(june());
    let first_id = state.workouts()[0].id;

    state.remove_workout(first_id);
    // Two workouts remain: markers on days 3 and 7 only.
    let day11 = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
    assert!(state.calendar().activities_on(day11).is_none());
}

#[test]
fn test_remove_meal_then_remove_again_is_noop() {
    let mut state = TrackerState::with_demo_data(june());
    let id = state.meals()[0].id;

    state.remove_meal(id);
    assert_eq!(state.meals().len(), 1);

    state.remove_meal(id);
    assert_eq!(state.meals().len(), 1);
}
