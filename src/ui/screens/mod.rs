//! UI screens for the application.

pub mod achievements;
pub mod calendar;
pub mod dashboard;
pub mod nutrition;
pub mod progress;
pub mod timeline;
pub mod workouts;

pub use achievements::AchievementsScreen;
pub use calendar::{CalendarAction, CalendarScreen};
pub use dashboard::{DashboardAction, DashboardScreen};
pub use nutrition::{NutritionAction, NutritionScreen};
pub use progress::ProgressScreen;
pub use timeline::TimelineScreen;
pub use workouts::{WorkoutsAction, WorkoutsScreen};

/// Sidebar navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Stat cards overview
    #[default]
    Dashboard,
    /// Workout list and form
    Workouts,
    /// Meal cards and form
    Nutrition,
    /// Trend charts
    Progress,
    /// Achievement badges
    Achievements,
    /// Daily activity timeline
    Timeline,
    /// Activity calendar
    Calendar,
}

impl Section {
    /// All sections in sidebar order.
    pub const ALL: [Section; 7] = [
        Section::Dashboard,
        Section::Workouts,
        Section::Nutrition,
        Section::Progress,
        Section::Achievements,
        Section::Timeline,
        Section::Calendar,
    ];

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Workouts => "Workouts",
            Section::Nutrition => "Nutrition",
            Section::Progress => "Progress",
            Section::Achievements => "Achievements",
            Section::Timeline => "Timeline",
            Section::Calendar => "Calendar",
        }
    }
}
