//! Built-in demo data the dashboard starts with.

use super::types::{DailyActivity, Meal, StatEntry, StatId, Workout, WorkoutCategory};

/// Starting stat cards.
pub fn demo_stats() -> Vec<StatEntry> {
    vec![
        StatEntry::new(StatId::Steps, "Steps", "🥾", 9050.0, 10000.0),
        StatEntry::new(StatId::Calories, "Calories", "🔥", 480.0, 600.0),
        StatEntry::new(StatId::Distance, "Distance (km)", "📏", 6.3, 8.0),
        StatEntry::new(StatId::ActiveMinutes, "Active Minutes", "⏱️", 42.0, 60.0),
        StatEntry::new(StatId::HeartRate, "Heart Rate", "❤", 75.0, 130.0),
    ]
}

/// Starting workouts (ids are assigned by the store).
pub fn demo_workouts() -> Vec<Workout> {
    vec![
        Workout {
            id: 0,
            name: "Morning Run".to_string(),
            category: WorkoutCategory::Cardio,
        },
        Workout {
            id: 0,
            name: "Weight Lifting".to_string(),
            category: WorkoutCategory::Strength,
        },
        Workout {
            id: 0,
            name: "Yoga Stretch".to_string(),
            category: WorkoutCategory::Flexibility,
        },
    ]
}

/// Starting meals (ids are assigned by the store).
pub fn demo_meals() -> Vec<Meal> {
    vec![
        Meal {
            id: 0,
            name: "Breakfast - Oatmeal".to_string(),
            calories: 320,
            protein: 12,
            carbs: 54,
            fats: 5,
        },
        Meal {
            id: 0,
            name: "Lunch - Grilled Chicken Salad".to_string(),
            calories: 450,
            protein: 40,
            carbs: 20,
            fats: 10,
        },
    ]
}

/// The fixed daily activity timeline.
pub fn demo_timeline() -> Vec<DailyActivity> {
    vec![
        DailyActivity {
            time: "07:00",
            description: "Woke up",
        },
        DailyActivity {
            time: "07:30",
            description: "Morning run - 3 km",
        },
        DailyActivity {
            time: "09:00",
            description: "Breakfast: Oatmeal",
        },
        DailyActivity {
            time: "12:30",
            description: "Lunch: Grilled Chicken Salad",
        },
        DailyActivity {
            time: "16:00",
            description: "Yoga session 30 mins",
        },
        DailyActivity {
            time: "19:00",
            description: "Dinner - Light meal",
        },
        DailyActivity {
            time: "22:00",
            description: "Sleep",
        },
    ]
}

/// Weekly steps series for the progress chart.
pub fn weekly_steps() -> (Vec<&'static str>, Vec<f64>) {
    (
        vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        vec![8000.0, 10000.0, 7500.0, 12000.0, 9000.0, 11000.0, 8500.0],
    )
}

/// Monthly calories-burned series for the progress chart.
pub fn monthly_calories() -> (Vec<&'static str>, Vec<f64>) {
    (
        vec!["Week 1", "Week 2", "Week 3", "Week 4"],
        vec![2800.0, 3100.0, 2650.0, 3000.0],
    )
}
