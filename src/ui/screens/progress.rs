//! Progress screen: weekly and monthly trend charts.

use egui::{Color32, RichText, Ui};

use crate::tracker::demo;
use crate::ui::widgets::TrendChart;

/// Progress screen. The chart datasets are fixed demo series.
#[derive(Default)]
pub struct ProgressScreen;

impl ProgressScreen {
    /// Create the screen.
    pub fn new() -> Self {
        Self
    }

    /// Render the screen.
    pub fn show(&self, ui: &mut Ui) {
        ui.heading("Progress");
        ui.add_space(8.0);

        let (week_labels, week_values) = demo::weekly_steps();
        ui.label(RichText::new("Steps this week").strong());
        TrendChart::new("weekly_steps", "Steps", &week_labels, &week_values)
            .color(Color32::from_rgb(76, 175, 80))
            .show(ui);

        ui.add_space(16.0);

        let (month_labels, month_values) = demo::monthly_calories();
        ui.label(RichText::new("Calories burned this month").strong());
        TrendChart::new(
            "monthly_calories",
            "Calories Burned",
            &month_labels,
            &month_values,
        )
        .color(Color32::from_rgb(129, 199, 132))
        .show(ui);
    }
}
