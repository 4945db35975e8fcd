//! Core data types for tracked fitness state.

use std::fmt;

/// Identifier for a tracked daily metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatId {
    /// Step count
    Steps,
    /// Calories burned
    Calories,
    /// Distance covered in km
    Distance,
    /// Minutes of activity
    ActiveMinutes,
    /// Current heart rate in bpm
    HeartRate,
}

impl StatId {
    /// All stats in default dashboard order.
    pub const ALL: [StatId; 5] = [
        StatId::Steps,
        StatId::Calories,
        StatId::Distance,
        StatId::ActiveMinutes,
        StatId::HeartRate,
    ];
}

/// A tracked metric with a current value and a goal.
#[derive(Debug, Clone, PartialEq)]
pub struct StatEntry {
    /// Which metric this is
    pub id: StatId,
    /// Display label
    pub label: String,
    /// Glyph shown next to the label
    pub icon: &'static str,
    /// Current value (non-negative)
    pub value: f64,
    /// Goal value (non-negative)
    pub goal: f64,
}

impl StatEntry {
    /// Create a stat entry.
    pub fn new(id: StatId, label: &str, icon: &'static str, value: f64, goal: f64) -> Self {
        Self {
            id,
            label: label.to_string(),
            icon,
            value,
            goal,
        }
    }

    /// Progress toward the goal as an integer percentage, clamped to 100.
    ///
    /// A zero goal yields 0 rather than dividing by zero.
    pub fn progress(&self) -> u8 {
        if self.goal <= 0.0 {
            return 0;
        }
        ((self.value / self.goal) * 100.0).round().min(100.0) as u8
    }
}

/// Workout category (fixed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCategory {
    Cardio,
    Strength,
    Flexibility,
}

impl WorkoutCategory {
    /// All categories, in filter-button order.
    pub const ALL: [WorkoutCategory; 3] = [
        WorkoutCategory::Cardio,
        WorkoutCategory::Strength,
        WorkoutCategory::Flexibility,
    ];
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutCategory::Cardio => write!(f, "Cardio"),
            WorkoutCategory::Strength => write!(f, "Strength"),
            WorkoutCategory::Flexibility => write!(f, "Flexibility"),
        }
    }
}

/// Workout list filter: everything or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkoutFilter {
    #[default]
    All,
    Category(WorkoutCategory),
}

impl WorkoutFilter {
    /// Whether a workout passes this filter.
    pub fn matches(&self, workout: &Workout) -> bool {
        match self {
            WorkoutFilter::All => true,
            WorkoutFilter::Category(c) => workout.category == *c,
        }
    }

    /// Display label for the filter button.
    pub fn label(&self) -> String {
        match self {
            WorkoutFilter::All => "All".to_string(),
            WorkoutFilter::Category(c) => c.to_string(),
        }
    }
}

/// A logged workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    /// Unique id, assigned by the store
    pub id: u64,
    /// Non-empty display name
    pub name: String,
    /// Category
    pub category: WorkoutCategory,
}

/// A logged meal with macro breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    /// Unique id, assigned by the store
    pub id: u64,
    /// Non-empty display name
    pub name: String,
    /// Calories in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fats in grams
    pub fats: u32,
}

/// A fixed entry on the daily activity timeline.
#[derive(Debug, Clone)]
pub struct DailyActivity {
    /// Time of day, "HH:MM"
    pub time: &'static str,
    /// What happened
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_rounds_and_clamps() {
        let steps = StatEntry::new(StatId::Steps, "Steps", "🥾", 9050.0, 10000.0);
        assert_eq!(steps.progress(), 91);

        let over = StatEntry::new(StatId::Steps, "Steps", "🥾", 12000.0, 10000.0);
        assert_eq!(over.progress(), 100);
    }

    #[test]
    fn test_progress_zero_goal() {
        let stat = StatEntry::new(StatId::HeartRate, "Heart Rate", "❤", 75.0, 0.0);
        assert_eq!(stat.progress(), 0);
    }

    #[test]
    fn test_workout_filter() {
        let workout = Workout {
            id: 1,
            name: "Morning Run".to_string(),
            category: WorkoutCategory::Cardio,
        };

        assert!(WorkoutFilter::All.matches(&workout));
        assert!(WorkoutFilter::Category(WorkoutCategory::Cardio).matches(&workout));
        assert!(!WorkoutFilter::Category(WorkoutCategory::Strength).matches(&workout));
    }
}
