//! Nutrition screen: meal cards and add form with numeric validation.

use egui::{Align, Layout, RichText, Ui};

use crate::tracker::types::Meal;
use crate::ui::theme::{error_color, Theme};

/// Action reported back to the app.
#[derive(Debug, Clone, PartialEq)]
pub enum NutritionAction {
    /// Add a validated meal
    Add(Meal),
    /// Remove the meal with this id
    Remove(u64),
}

/// Nutrition screen state. Numeric fields are free-form text parsed on
/// submit, mirroring number inputs on a form.
#[derive(Default)]
pub struct NutritionScreen {
    name_input: String,
    calories_input: String,
    protein_input: String,
    carbs_input: String,
    fats_input: String,
    alert: Option<String>,
}

impl NutritionScreen {
    /// Create the screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the screen.
    pub fn show(&mut self, ui: &mut Ui, meals: &[Meal], theme: Theme) -> Option<NutritionAction> {
        let mut action = None;

        ui.heading("Nutrition");
        ui.add_space(8.0);

        if meals.is_empty() {
            ui.label(RichText::new("No meals logged.").weak());
        } else {
            egui::ScrollArea::vertical()
                .max_height(ui.available_height() - 160.0)
                .show(ui, |ui| {
                    for meal in meals {
                        let frame = egui::Frame::new()
                            .fill(ui.visuals().faint_bg_color)
                            .inner_margin(12.0)
                            .corner_radius(4.0);

                        frame.show(ui, |ui| {
                            ui.set_min_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(&meal.name).strong());
                                    ui.horizontal(|ui| {
                                        ui.label(format!("🔥 {} kcal", meal.calories));
                                        ui.label(format!("💪 {} g Protein", meal.protein));
                                        ui.label(format!("🍞 {} g Carbs", meal.carbs));
                                        ui.label(format!("🥑 {} g Fats", meal.fats));
                                    });
                                });

                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    if ui
                                        .small_button("✖")
                                        .on_hover_text("Remove meal")
                                        .clicked()
                                    {
                                        action = Some(NutritionAction::Remove(meal.id));
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
        ui.label(RichText::new("Log a Meal").strong());
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.add(
                egui::TextEdit::singleline(&mut self.name_input).desired_width(180.0),
            );
        });
        ui.horizontal(|ui| {
            for (label, field) in [
                ("Calories:", &mut self.calories_input),
                ("Protein:", &mut self.protein_input),
                ("Carbs:", &mut self.carbs_input),
                ("Fats:", &mut self.fats_input),
            ] {
                ui.label(label);
                ui.add(egui::TextEdit::singleline(field).desired_width(60.0));
            }
        });

        ui.add_space(4.0);
        if ui.button("Add Meal").clicked() {
            match self.validate() {
                Ok(meal) => {
                    self.clear_form();
                    action = Some(NutritionAction::Add(meal));
                }
                Err(message) => self.alert = Some(message),
            }
        }

        self.show_alert(ui, theme);

        action
    }

    /// Parse the form; any empty name or non-numeric field aborts the
    /// submission with nothing mutated.
    fn validate(&self) -> Result<Meal, String> {
        let name = self.name_input.trim();
        let parsed = (
            self.calories_input.trim().parse::<u32>(),
            self.protein_input.trim().parse::<u32>(),
            self.carbs_input.trim().parse::<u32>(),
            self.fats_input.trim().parse::<u32>(),
        );

        match (name.is_empty(), parsed) {
            (false, (Ok(calories), Ok(protein), Ok(carbs), Ok(fats))) => Ok(Meal {
                id: 0,
                name: name.to_string(),
                calories,
                protein,
                carbs,
                fats,
            }),
            _ => Err("Please fill all the fields correctly.".to_string()),
        }
    }

    fn clear_form(&mut self) {
        self.name_input.clear();
        self.calories_input.clear();
        self.protein_input.clear();
        self.carbs_input.clear();
        self.fats_input.clear();
    }

    /// Blocking validation alert.
    fn show_alert(&mut self, ui: &mut Ui, theme: Theme) {
        let Some(message) = self.alert.clone() else {
            return;
        };

        egui::Window::new("Invalid Meal")
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

    /// Whether the validation alert is showing.
    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_screen() -> NutritionScreen {
        NutritionScreen {
            name_input: "Dinner - Salmon".to_string(),
            calories_input: "520".to_string(),
            protein_input: "35".to_string(),
            carbs_input: "12".to_string(),
            fats_input: "30".to_string(),
            alert: None,
        }
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        let meal = filled_screen().validate().unwrap();
        assert_eq!(meal.name, "Dinner - Salmon");
        assert_eq!(meal.calories, 520);
        assert_eq!(meal.fats, 30);
    }

    #[test]
    fn test_validate_rejects_non_numeric_field() {
        let mut screen = filled_screen();
        screen.protein_input = "lots".to_string();
        assert!(screen.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_field() {
        let mut screen = filled_screen();
        screen.carbs_input.clear();
        assert!(screen.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut screen = filled_screen();
        screen.name_input = "  ".to_string();
        assert!(screen.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_numbers() {
        let mut screen = filled_screen();
        screen.calories_input = "-10".to_string();
        assert!(screen.validate().is_err());
    }
}
