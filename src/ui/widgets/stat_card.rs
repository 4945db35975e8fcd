//! Dashboard stat card widget.

use egui::{Id, Rect, RichText, Sense, Ui};

use crate::tracker::types::StatEntry;
use crate::ui::theme::{accent, Theme};

/// What happened to a stat card this frame.
pub struct StatCardResponse {
    /// The card's screen rectangle
    pub rect: Rect,
    /// A drag gesture started on the card body
    pub drag_started: bool,
    /// A drag gesture on the card body ended
    pub drag_released: bool,
    /// The user adjusted the current value
    pub new_value: Option<f64>,
}

/// A draggable card showing one stat with its goal progress.
pub struct StatCard<'a> {
    stat: &'a StatEntry,
    theme: Theme,
    dragging: bool,
}

impl<'a> StatCard<'a> {
    /// Create a card for a stat.
    pub fn new(stat: &'a StatEntry, theme: Theme) -> Self {
        Self {
            stat,
            theme,
            dragging: false,
        }
    }

    /// Render the card faded while it is being dragged.
    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    /// Show the card.
    pub fn show(self, ui: &mut Ui) -> StatCardResponse {
        let mut new_value = None;

        let fill = if self.dragging {
            ui.visuals().faint_bg_color.linear_multiply(0.6)
        } else {
            ui.visuals().faint_bg_color
        };

        let frame = egui::Frame::new()
            .fill(fill)
            .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
            .inner_margin(12.0)
            .corner_radius(6.0);

        let inner = frame.show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(RichText::new(self.stat.icon).size(18.0));
                ui.label(RichText::new(&self.stat.label).strong());
            });

            // Displayed value eases toward the target instead of jumping.
            let shown = ui.ctx().animate_value_with_time(
                Id::new(("stat_value", self.stat.id)),
                self.stat.value as f32,
                1.0,
            );
            ui.label(
                RichText::new(format_value(shown as f64))
                    .size(28.0)
                    .color(accent(self.theme)),
            );

            let progress = self.stat.progress();
            ui.add(
                egui::ProgressBar::new(progress as f32 / 100.0)
                    .fill(accent(self.theme))
                    .desired_height(6.0),
            );

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("Goal: {}", format_value(self.stat.goal))).weak(),
                );
                ui.label(RichText::new(format!("{}%", progress)).weak().small());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut value = self.stat.value;
                    let drag = ui.add(
                        egui::DragValue::new(&mut value)
                            .range(0.0..=f64::MAX)
                            .speed(self.stat.goal.max(1.0) / 100.0),
                    );
                    if drag.changed() {
                        new_value = Some(value);
                    }
                });
            });
        });

        let rect = inner.response.rect;
        // Interact after the contents so interior widgets win pointer priority.
        let drag = ui.interact(
            rect,
            Id::new(("stat_card", self.stat.id)),
            Sense::click_and_drag(),
        );

        if self.dragging {
            // Outline the card while it travels.
            ui.painter().rect_stroke(
                rect,
                6.0,
                egui::Stroke::new(1.5, accent(self.theme)),
                egui::StrokeKind::Outside,
            );
        }

        ui.add_space(8.0);

        StatCardResponse {
            rect,
            drag_started: drag.drag_started(),
            drag_released: drag.drag_stopped(),
            new_value,
        }
    }
}

/// Format a stat value the way the dashboard displays numbers: one decimal
/// place, trimmed when it is `.0`.
pub fn format_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract().abs() < f64::EPSILON {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_trims_trailing_zero() {
        assert_eq!(format_value(9050.0), "9050");
        assert_eq!(format_value(6.3), "6.3");
        assert_eq!(format_value(6.0), "6");
    }

    #[test]
    fn test_format_value_rounds_to_one_decimal() {
        assert_eq!(format_value(6.349), "6.3");
        assert_eq!(format_value(6.95), "7");
    }
}
