//! UI module for the egui-based user interface.

pub mod reorder;
pub mod screens;
pub mod theme;
pub mod widgets;

pub use theme::Theme;
