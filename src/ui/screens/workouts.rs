//! Workouts screen: filterable list and add form.

use egui::{Align, Layout, RichText, Ui};

use crate::tracker::types::{Workout, WorkoutCategory, WorkoutFilter};
use crate::ui::theme::{error_color, Theme};

/// Action reported back to the app.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutsAction {
    /// Add a workout with a validated name and category
    Add {
        name: String,
        category: WorkoutCategory,
    },
    /// Remove the workout with this id
    Remove(u64),
}

/// Workouts screen state.
#[derive(Default)]
pub struct WorkoutsScreen {
    /// Active list filter
    pub filter: WorkoutFilter,
    /// Name field of the add form
    name_input: String,
    /// Category field of the add form
    category_input: Option<WorkoutCategory>,
    /// Validation alert, blocking until dismissed
    alert: Option<String>,
}

impl WorkoutsScreen {
    /// Create the screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the screen.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        workouts: &[Workout],
        theme: Theme,
    ) -> Option<WorkoutsAction> {
        let mut action = None;

        ui.heading("Workouts");
        ui.add_space(8.0);

        // Filter buttons.
        ui.horizontal(|ui| {
            let mut filters = vec![WorkoutFilter::All];
            filters.extend(WorkoutCategory::ALL.map(WorkoutFilter::Category));

            for filter in filters {
                let selected = self.filter == filter;
                if ui.selectable_label(selected, filter.label()).clicked() {
                    self.filter = filter;
                }
            }
        });

        ui.add_space(8.0);
        ui.separator();

        // List.
        let visible: Vec<&Workout> = workouts.iter().filter(|w| self.filter.matches(w)).collect();

        if visible.is_empty() {
            ui.label(RichText::new("No workouts found.").weak());
        } else {
            egui::ScrollArea::vertical()
                .max_height(ui.available_height() - 120.0)
                .show(ui, |ui| {
                    for workout in visible {
                        let frame = egui::Frame::new()
                            .fill(ui.visuals().faint_bg_color)
                            .inner_margin(10.0)
                            .corner_radius(4.0);

                        frame.show(ui, |ui| {
                            ui.set_min_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&workout.name).strong());
                                ui.label(
                                    RichText::new(format!("({})", workout.category)).weak(),
                                );

                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    if ui
                                        .small_button("✖")
                                        .on_hover_text("Remove Workout")
                                        .clicked()
                                    {
                                        action = Some(WorkoutsAction::Remove(workout.id));
                                    }
                                });
                            });
                        });
                        ui.add_space(4.0);
                    }
                });
        }

        ui.add_space(12.0);
        ui.separator();

        // Add form.
        ui.label(RichText::new("Add Workout").strong());
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut self.name_input);

            ui.label("Category:");
            egui::ComboBox::from_id_salt("workout_category")
                .selected_text(
                    self.category_input
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "Select...".to_string()),
                )
                .show_ui(ui, |ui| {
                    for category in WorkoutCategory::ALL {
                        ui.selectable_value(
                            &mut self.category_input,
                            Some(category),
                            category.to_string(),
                        );
                    }
                });

            if ui.button("Add").clicked() {
                match self.validate() {
                    Ok((name, category)) => {
                        self.name_input.clear();
                        self.category_input = None;
                        action = Some(WorkoutsAction::Add { name, category });
                    }
                    Err(message) => self.alert = Some(message),
                }
            }
        });

        self.show_alert(ui, theme);

        action
    }

    /// Check the form fields; nothing is mutated on failure.
    fn validate(&self) -> Result<(String, WorkoutCategory), String> {
        let name = self.name_input.trim();
        if name.is_empty() {
            return Err("Please enter a workout name.".to_string());
        }
        let Some(category) = self.category_input else {
            return Err("Please choose a workout category.".to_string());
        };
        Ok((name.to_string(), category))
    }

    /// Blocking validation alert, in the style of a browser alert box.
    fn show_alert(&mut self, ui: &mut Ui, theme: Theme) {
        let Some(message) = self.alert.clone() else {
            return;
        };

        egui::Window::new("Invalid Workout")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ui.ctx(), |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(20.0).color(error_color(theme)));
                    ui.label(&message);
                });
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        self.alert = None;
                    }
                });
            });

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.alert = None;
        }
    }

    /// Whether the validation alert is showing (for the app's modal check).
    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }
}

/// Count label for the status bar, e.g. "3 workouts".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 workout".to_string()
    } else {
        format!("{} workouts", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_name() {
        let screen = WorkoutsScreen {
            name_input: "   ".to_string(),
            category_input: Some(WorkoutCategory::Cardio),
            ..Default::default()
        };
        assert!(screen.validate().is_err());
    }

    #[test]
    fn test_validate_requires_category() {
        let screen = WorkoutsScreen {
            name_input: "Morning Run".to_string(),
            category_input: None,
            ..Default::default()
        };
        assert!(screen.validate().is_err());
    }

    #[test]
    fn test_validate_trims_name() {
        let screen = WorkoutsScreen {
            name_input: "  Morning Run ".to_string(),
            category_input: Some(WorkoutCategory::Cardio),
            ..Default::default()
        };
        let (name, category) = screen.validate().unwrap();
        assert_eq!(name, "Morning Run");
        assert_eq!(category, WorkoutCategory::Cardio);
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(1), "1 workout");
        assert_eq!(count_label(3), "3 workouts");
    }
}
