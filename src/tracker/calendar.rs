//! Calendar activity index derived from the workout and meal collections.
//!
//! Workouts and meals carry no real dates, so markers use a positional
//! placeholder scheme: the i-th workout lands on day `min(28, 3 + 4*i)` of the
//! displayed month, the i-th meal on `min(28, 7 + 5*i)`. The index is fully
//! rebuilt on every change rather than updated incrementally.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use super::types::{Meal, Workout};

/// Kind of activity marked on a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Workout,
    Nutrition,
}

impl ActivityKind {
    /// Label shown in the day tooltip.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Workout => "Workout",
            ActivityKind::Nutrition => "Nutrition",
        }
    }
}

/// The year-month currently shown on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayedMonth {
    /// Calendar year
    pub year: i32,
    /// Month 1-12
    pub month: u32,
}

impl DisplayedMonth {
    /// Month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Step back one month, wrapping the year.
    pub fn prev(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }

    /// Step forward one month, wrapping the year.
    pub fn next(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // Month is always 1-12 by construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap_or_default())
    }

    /// Number of days in the month.
    pub fn day_count(&self) -> u32 {
        let first = self.first_day();
        let next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        match next_month {
            Some(next) => next.signed_duration_since(first).num_days() as u32,
            None => 31,
        }
    }

    /// Display header, e.g. "June 2024".
    pub fn title(&self) -> String {
        format!("{} {}", self.first_day().format("%B"), self.year)
    }
}

/// Mapping from calendar dates to the activities marked on them.
#[derive(Debug, Default)]
pub struct CalendarIndex {
    days: BTreeMap<NaiveDate, Vec<ActivityKind>>,
}

impl CalendarIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the index from scratch for the displayed month.
    pub fn rebuild(&mut self, month: DisplayedMonth, workouts: &[Workout], meals: &[Meal]) {
        self.days.clear();

        for (i, _) in workouts.iter().enumerate() {
            let day = (3 + i as u32 * 4).min(28);
            self.mark(month, day, ActivityKind::Workout);
        }

        for (i, _) in meals.iter().enumerate() {
            let day = (7 + i as u32 * 5).min(28);
            self.mark(month, day, ActivityKind::Nutrition);
        }
    }

    fn mark(&mut self, month: DisplayedMonth, day: u32, kind: ActivityKind) {
        if let Some(date) = NaiveDate::from_ymd_opt(month.year, month.month, day) {
            self.days.entry(date).or_default().push(kind);
        }
    }

    /// Activities on a given date, if any.
    pub fn activities_on(&self, date: NaiveDate) -> Option<&[ActivityKind]> {
        self.days.get(&date).map(|kinds| kinds.as_slice())
    }

    /// All marked dates in order.
    pub fn marked_dates(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<ActivityKind>)> {
        self.days.iter()
    }

    /// Number of marked dates.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no date is marked.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::types::WorkoutCategory;

    fn workout(name: &str) -> Workout {
        Workout {
            id: 0,
            name: name.to_string(),
            category: WorkoutCategory::Cardio,
        }
    }

    fn meal(name: &str) -> Meal {
        Meal {
            id: 0,
            name: name.to_string(),
            calories: 300,
            protein: 10,
            carbs: 40,
            fats: 8,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_workout_day_assignment() {
        let month = DisplayedMonth {
            year: 2024,
            month: 6,
        };
        let workouts = vec![workout("a"), workout("b"), workout("c")];
        let mut index = CalendarIndex::new();
        index.rebuild(month, &workouts, &[]);

        assert_eq!(index.len(), 3);
        assert!(index.activities_on(date(2024, 6, 3)).is_some());
        assert!(index.activities_on(date(2024, 6, 7)).is_some());
        assert!(index.activities_on(date(2024, 6, 11)).is_some());
    }

    #[test]
    fn test_meal_day_assignment() {
        let month = DisplayedMonth {
            year: 2024,
            month: 6,
        };
        let meals = vec![meal("a"), meal("b"), meal("c"), meal("d")];
        let mut index = CalendarIndex::new();
        index.rebuild(month, &[], &meals);

        // 7 + 5*3 = 22 for the fourth meal.
        let kinds = index.activities_on(date(2024, 6, 22)).unwrap();
        assert_eq!(kinds, &[ActivityKind::Nutrition]);
    }

    #[test]
    fn test_day_clamps_at_28() {
        let month = DisplayedMonth {
            year: 2024,
            month: 2,
        };
        let workouts: Vec<Workout> = (0..10).map(|i| workout(&format!("w{i}"))).collect();
        let mut index = CalendarIndex::new();
        index.rebuild(month, &workouts, &[]);

        // Workouts 7..10 all collapse onto day 28.
        let kinds = index.activities_on(date(2024, 2, 28)).unwrap();
        assert_eq!(kinds.len(), 4);
        assert!(index.activities_on(date(2024, 2, 29)).is_none());
    }

    #[test]
    fn test_rebuild_clears_previous_markers() {
        let month = DisplayedMonth {
            year: 2024,
            month: 6,
        };
        let mut index = CalendarIndex::new();
        index.rebuild(month, &[workout("a")], &[]);
        assert_eq!(index.len(), 1);

        index.rebuild(month, &[], &[]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_month_navigation_wraps() {
        let mut month = DisplayedMonth {
            year: 2024,
            month: 1,
        };
        month.prev();
        assert_eq!((month.year, month.month), (2023, 12));
        month.next();
        assert_eq!((month.year, month.month), (2024, 1));

        let mut dec = DisplayedMonth {
            year: 2024,
            month: 12,
        };
        dec.next();
        assert_eq!((dec.year, dec.month), (2025, 1));
    }

    #[test]
    fn test_day_count() {
        assert_eq!(
            DisplayedMonth {
                year: 2024,
                month: 2
            }
            .day_count(),
            29
        );
        assert_eq!(
            DisplayedMonth {
                year: 2024,
                month: 6
            }
            .day_count(),
            30
        );
        assert_eq!(
            DisplayedMonth {
                year: 2024,
                month: 12
            }
            .day_count(),
            31
        );
    }
}
