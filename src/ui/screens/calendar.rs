//! Calendar screen: month navigation around the grid widget.

use chrono::NaiveDate;
use egui::{RichText, Ui};

use crate::tracker::TrackerState;
use crate::ui::theme::Theme;
use crate::ui::widgets::CalendarGrid;

/// Action reported back to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    /// Show the previous month
    PrevMonth,
    /// Show the next month
    NextMonth,
}

/// Calendar screen.
#[derive(Default)]
pub struct CalendarScreen;

impl CalendarScreen {
    /// Create the screen.
    pub fn new() -> Self {
        Self
    }

    /// Render the screen.
    pub fn show(
        &self,
        ui: &mut Ui,
        state: &TrackerState,
        today: NaiveDate,
        theme: Theme,
    ) -> Option<CalendarAction> {
        let mut action = None;

        ui.heading("Calendar");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                action = Some(CalendarAction::PrevMonth);
            }
            ui.label(RichText::new(state.month().title()).strong().size(16.0));
            if ui.button("▶").clicked() {
                action = Some(CalendarAction::NextMonth);
            }
        });

        ui.add_space(8.0);

        CalendarGrid::new(state.month(), state.calendar(), today, theme).show(ui);

        ui.add_space(8.0);
        ui.label(
            RichText::new("Dots mark days with logged workouts or meals.")
                .weak()
                .small(),
        );

        action
    }
}
