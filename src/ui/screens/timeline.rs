//! Timeline screen: the fixed daily activity list.

use egui::{RichText, Ui};

use crate::tracker::types::DailyActivity;

/// Daily activity timeline screen.
#[derive(Default)]
pub struct TimelineScreen;

impl TimelineScreen {
    /// Create the screen.
    pub fn new() -> Self {
        Self
    }

    /// Render the screen.
    pub fn show(&self, ui: &mut Ui, timeline: &[DailyActivity]) {
        ui.heading("Daily Activity");
        ui.add_space(8.0);

        for entry in timeline {
            ui.horizontal(|ui| {
                ui.label(RichText::new(entry.time).monospace().strong());
                ui.label("—");
                ui.label(entry.description);
            });
            ui.add_space(2.0);
        }
    }
}
