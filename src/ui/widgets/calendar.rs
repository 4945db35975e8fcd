//! Month grid widget with activity markers.

use chrono::{Datelike, NaiveDate};
use egui::{Align2, Color32, FontId, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::tracker::calendar::{CalendarIndex, DisplayedMonth};
use crate::ui::theme::{accent, Theme};

const CELL_SIZE: f32 = 44.0;
const CELL_GAP: f32 = 6.0;

/// Renders one month as a 7-column grid.
///
/// Leading cells before the first weekday are blank, today gets a ring, and
/// days with derived activity show a marker dot plus a hover tooltip listing
/// the activity kinds.
pub struct CalendarGrid<'a> {
    month: DisplayedMonth,
    index: &'a CalendarIndex,
    today: NaiveDate,
    theme: Theme,
}

impl<'a> CalendarGrid<'a> {
    /// Create a grid for the displayed month.
    pub fn new(
        month: DisplayedMonth,
        index: &'a CalendarIndex,
        today: NaiveDate,
        theme: Theme,
    ) -> Self {
        Self {
            month,
            index,
            today,
            theme,
        }
    }

    /// Show the grid.
    pub fn show(self, ui: &mut Ui) {
        // Weekday header row, Sunday first like the source dashboard.
        ui.horizontal(|ui| {
            for name in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
                let (rect, _) =
                    ui.allocate_exact_size(Vec2::new(CELL_SIZE, 20.0), Sense::hover());
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    name,
                    FontId::proportional(12.0),
                    ui.visuals().weak_text_color(),
                );
                ui.add_space(CELL_GAP);
            }
        });
        ui.add_space(4.0);

        let start_offset = self.month.first_day().weekday().num_days_from_sunday();
        let day_count = self.month.day_count();

        let mut day = 1u32;
        let total_cells = start_offset + day_count;
        let rows = total_cells.div_ceil(7);

        for row in 0..rows {
            ui.horizontal(|ui| {
                for col in 0..7 {
                    let cell = row * 7 + col;
                    let (rect, response) = ui.allocate_exact_size(
                        Vec2::new(CELL_SIZE, CELL_SIZE),
                        Sense::hover(),
                    );

                    if cell >= start_offset && day <= day_count {
                        self.paint_day(ui, rect, response, day);
                        day += 1;
                    }

                    ui.add_space(CELL_GAP);
                }
            });
            ui.add_space(CELL_GAP);
        }
    }

    fn paint_day(&self, ui: &Ui, rect: Rect, response: egui::Response, day: u32) {
        let date = NaiveDate::from_ymd_opt(self.month.year, self.month.month, day);
        let activities = date.and_then(|d| self.index.activities_on(d));
        let is_today = date == Some(self.today);

        let painter = ui.painter();
        painter.rect_filled(rect, 4.0, ui.visuals().faint_bg_color);

        if is_today {
            painter.rect_stroke(
                rect,
                4.0,
                Stroke::new(2.0, accent(self.theme)),
                StrokeKind::Inside,
            );
        }

        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            day.to_string(),
            FontId::proportional(14.0),
            ui.visuals().text_color(),
        );

        if let Some(kinds) = activities {
            let dot = rect.center_bottom() - Vec2::new(0.0, 7.0);
            painter.circle_filled(dot, 3.0, marker_color(self.theme));

            let labels: Vec<&str> = kinds.iter().map(|k| k.label()).collect();
            response.on_hover_text(format!("Activities: {}", labels.join(", ")));
        }
    }
}

fn marker_color(theme: Theme) -> Color32 {
    match theme {
        Theme::Dark => Color32::from_rgb(129, 199, 132),
        Theme::Light => Color32::from_rgb(56, 142, 60),
    }
}
