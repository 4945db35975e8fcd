//! FitDash - Fitness Tracker Dashboard
//!
//! A desktop fitness dashboard built in Rust. Renders reorderable stat
//! cards, workout and meal tracking with derived achievement and calendar
//! state, progress charts, and transient notifications, all from in-memory
//! demo data.

pub mod storage;
pub mod tracker;
pub mod ui;

// Re-export commonly used types
pub use storage::config::AppConfig;
pub use tracker::TrackerState;
pub use ui::theme::Theme;
pub use ui::widgets::ToastCenter;
