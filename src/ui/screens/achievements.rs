//! Achievements screen: badge row with unlocked highlighting.

use egui::{RichText, Ui};

use crate::tracker::TrackerState;
use crate::ui::theme::{accent, Theme};

/// Achievements screen. Badges always render; unlock state only changes the
/// styling and drives the toasts emitted on recompute.
#[derive(Default)]
pub struct AchievementsScreen;

impl AchievementsScreen {
    /// Create the screen.
    pub fn new() -> Self {
        Self
    }

    /// Render the screen.
    pub fn show(&self, ui: &mut Ui, state: &TrackerState, theme: Theme) {
        ui.heading("Achievements");
        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for achievement in state.achievements() {
                let unlocked = state.is_unlocked(achievement.id);

                let frame = egui::Frame::new()
                    .fill(ui.visuals().faint_bg_color)
                    .stroke(if unlocked {
                        egui::Stroke::new(2.0, accent(theme))
                    } else {
                        ui.visuals().widgets.noninteractive.bg_stroke
                    })
                    .inner_margin(16.0)
                    .corner_radius(8.0);

                frame.show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(achievement.icon).size(32.0));
                        ui.label(RichText::new(achievement.name).strong());
                        if unlocked {
                            ui.label(
                                RichText::new("Unlocked").small().color(accent(theme)),
                            );
                        } else {
                            ui.label(RichText::new("Locked").small().weak());
                        }
                    });
                });

                ui.add_space(8.0);
            }
        });
    }
}
