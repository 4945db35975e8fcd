//! Tracked fitness state: collections, derived views, and demo data.

pub mod achievements;
pub mod calendar;
pub mod demo;
pub mod state;
pub mod store;
pub mod types;

pub use achievements::{Achievement, UnlockRule};
pub use calendar::{ActivityKind, CalendarIndex, DisplayedMonth};
pub use state::TrackerState;
pub use store::{CollectionStore, IdGenerator, Record};
pub use types::{
    DailyActivity, Meal, StatEntry, StatId, Workout, WorkoutCategory, WorkoutFilter,
};
