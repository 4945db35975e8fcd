//! Central application state and the mutation operations on it.
//!
//! All mutable collections live here and change only through these methods.
//! Every mutation synchronously recomputes the derived state (achievement
//! unlocks and calendar markers) before returning, so a caller never observes
//! a collection ahead of its derived views.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::achievements::{all_achievements, recompute_unlocks, Achievement};
use super::calendar::{CalendarIndex, DisplayedMonth};
use super::demo;
use super::store::CollectionStore;
use super::types::{
    DailyActivity, Meal, StatEntry, StatId, Workout, WorkoutCategory, WorkoutFilter,
};

/// Owner of all tracked collections and their derived state.
pub struct TrackerState {
    stats: Vec<StatEntry>,
    workouts: CollectionStore<Workout>,
    meals: CollectionStore<Meal>,
    achievements: Vec<Achievement>,
    unlocked: HashSet<u32>,
    timeline: Vec<DailyActivity>,
    month: DisplayedMonth,
    calendar: CalendarIndex,
}

impl TrackerState {
    /// State seeded with the demo collections, showing the month of `today`.
    pub fn with_demo_data(today: NaiveDate) -> Self {
        let mut state = Self {
            stats: demo::demo_stats(),
            workouts: CollectionStore::with_items(demo::demo_workouts()),
            meals: CollectionStore::with_items(demo::demo_meals()),
            achievements: all_achievements(),
            unlocked: HashSet::new(),
            timeline: demo::demo_timeline(),
            month: DisplayedMonth::containing(today),
            calendar: CalendarIndex::new(),
        };
        // Initial derive; the demo stats sit below every unlock threshold.
        state.recompute();
        state
    }

    /// Re-derive achievements and calendar markers from the collections.
    ///
    /// Returns achievements that became unlocked during this pass.
    fn recompute(&mut self) -> Vec<Achievement> {
        let newly_unlocked =
            recompute_unlocks(&self.achievements, &self.stats, &mut self.unlocked);
        self.calendar
            .rebuild(self.month, self.workouts.items(), self.meals.items());
        newly_unlocked
    }

    /// Add a workout. Returns achievements newly unlocked by the recompute.
    pub fn add_workout(&mut self, name: String, category: WorkoutCategory) -> Vec<Achievement> {
        let id = self.workouts.add(Workout { id: 0, name, category });
        tracing::debug!("Added workout {}", id);
        self.recompute()
    }

    /// Remove a workout by id (no-op if absent).
    pub fn remove_workout(&mut self, id: u64) -> Vec<Achievement> {
        self.workouts.remove(id);
        tracing::debug!("Removed workout {}", id);
        self.recompute()
    }

    /// Add a meal. Returns achievements newly unlocked by the recompute.
    pub fn add_meal(&mut self, meal: Meal) -> Vec<Achievement> {
        let id = self.meals.add(meal);
        tracing::debug!("Added meal {}", id);
        self.recompute()
    }

    /// Remove a meal by id (no-op if absent).
    pub fn remove_meal(&mut self, id: u64) -> Vec<Achievement> {
        self.meals.remove(id);
        tracing::debug!("Removed meal {}", id);
        self.recompute()
    }

    /// Set a stat's current value, clamped to non-negative.
    pub fn set_stat_value(&mut self, id: StatId, value: f64) -> Vec<Achievement> {
        if let Some(stat) = self.stats.iter_mut().find(|s| s.id == id) {
            stat.value = value.max(0.0);
        }
        self.recompute()
    }

    /// Show the previous month on the calendar.
    pub fn prev_month(&mut self) -> Vec<Achievement> {
        self.month.prev();
        self.recompute()
    }

    /// Show the next month on the calendar.
    pub fn next_month(&mut self) -> Vec<Achievement> {
        self.month.next();
        self.recompute()
    }

    /// Current stat entries in canonical order.
    pub fn stats(&self) -> &[StatEntry] {
        &self.stats
    }

    /// A single stat entry.
    pub fn stat(&self, id: StatId) -> Option<&StatEntry> {
        self.stats.iter().find(|s| s.id == id)
    }

    /// All workouts in insertion order.
    pub fn workouts(&self) -> &[Workout] {
        self.workouts.items()
    }

    /// Workouts matching a filter, in insertion order.
    pub fn filtered_workouts(&self, filter: WorkoutFilter) -> Vec<Workout> {
        self.workouts.filter(|w| filter.matches(w))
    }

    /// All meals in insertion order.
    pub fn meals(&self) -> &[Meal] {
        self.meals.items()
    }

    /// The achievement catalog.
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Whether an achievement is currently unlocked.
    pub fn is_unlocked(&self, achievement_id: u32) -> bool {
        self.unlocked.contains(&achievement_id)
    }

    /// The fixed daily activity timeline.
    pub fn timeline(&self) -> &[DailyActivity] {
        &self.timeline
    }

    /// The displayed calendar month.
    pub fn month(&self) -> DisplayedMonth {
        self.month
    }

    /// The derived calendar activity index.
    pub fn calendar(&self) -> &CalendarIndex {
        &self.calendar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_demo_state_unlocks_nothing() {
        let state = TrackerState::with_demo_data(june_2024());
        assert_eq!(state.workouts().len(), 3);
        assert_eq!(state.meals().len(), 2);
        for achievement in state.achievements() {
            assert!(!state.is_unlocked(achievement.id));
        }
    }

    #[test]
    fn test_mutation_updates_calendar_before_returning() {
        let mut state = TrackerState::with_demo_data(june_2024());
        // 3 demo workouts on days 3/7/11, 2 demo meals on days 7/12.
        assert_eq!(state.calendar().len(), 4);

        state.add_meal(Meal {
            id: 0,
            name: "Dinner".to_string(),
            calories: 500,
            protein: 30,
            carbs: 45,
            fats: 15,
        });
        // Third meal lands on day 17.
        let day = NaiveDate::from_ymd_opt(2024, 6, 17).unwrap();
        assert!(state.calendar().activities_on(day).is_some());
    }

    #[test]
    fn test_stat_mutation_drives_unlock_and_relock() {
        let mut state = TrackerState::with_demo_data(june_2024());

        let events = state.set_stat_value(StatId::Steps, 10500.0);
        assert_eq!(events.len(), 1);
        assert!(state.is_unlocked(1));

        let events = state.set_stat_value(StatId::Steps, 9000.0);
        assert!(events.is_empty());
        assert!(!state.is_unlocked(1));

        let events = state.set_stat_value(StatId::Steps, 10000.0);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_month_navigation_rekeys_markers() {
        let mut state = TrackerState::with_demo_data(june_2024());
        state.next_month();
        assert_eq!((state.month().year, state.month().month), (2024, 7));

        let july_day = NaiveDate::from_ymd_opt(2024, 7, 3).unwrap();
        let june_day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert!(state.calendar().activities_on(july_day).is_some());
        assert!(state.calendar().activities_on(june_day).is_none());
    }
}
