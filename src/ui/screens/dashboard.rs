//! Dashboard screen: reorderable stat cards.

use egui::Ui;

use crate::tracker::types::{StatEntry, StatId};
use crate::ui::reorder::{self, DragState};
use crate::ui::theme::Theme;
use crate::ui::widgets::StatCard;

/// Action reported back to the app.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardAction {
    /// The user adjusted a stat's current value
    SetStatValue(StatId, f64),
}

/// Dashboard screen state.
///
/// The card order is presentation-only: it lives here, not in the stat
/// collection, and resets whenever the screen state is rebuilt.
pub struct DashboardScreen {
    order: Vec<StatId>,
    drag: DragState<StatId>,
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardScreen {
    /// Create the screen with the default card order.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            drag: DragState::new(),
        }
    }

    /// Current display order (for tests and the app).
    pub fn order(&self) -> &[StatId] {
        &self.order
    }

    /// Render the screen.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        stats: &[StatEntry],
        theme: Theme,
    ) -> Option<DashboardAction> {
        self.sync_order(stats);

        let mut action = None;

        ui.heading("Dashboard");
        ui.label(
            egui::RichText::new("Drag cards to rearrange. Adjust a value to see goals react.")
                .weak(),
        );
        ui.add_space(8.0);

        let mut drag_started = None;
        let mut drag_released = false;
        // Midpoints of the non-dragged cards, in display order.
        let mut midpoints = Vec::new();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for id in self.order.clone() {
                let Some(stat) = stats.iter().find(|s| s.id == id) else {
                    continue;
                };

                let response = StatCard::new(stat, theme)
                    .dragging(self.drag.is_dragging(id))
                    .show(ui);

                if response.drag_started {
                    drag_started = Some(id);
                }
                if response.drag_released {
                    drag_released = true;
                }
                if let Some(value) = response.new_value {
                    action = Some(DashboardAction::SetStatValue(id, value));
                }
                if !self.drag.is_dragging(id) {
                    midpoints.push(response.rect.center().y);
                }
            }
        });

        if let Some(id) = drag_started {
            self.drag.start(id);
        }

        if let Some(dragged) = self.drag.dragged() {
            // Reposition on every frame of the gesture, like a drag-over
            // handler. A missing pointer position leaves the order alone.
            if let Some(pos) =
                ui.input(|i| i.pointer.hover_pos().or_else(|| i.pointer.interact_pos()))
            {
                reorder::apply_drag(&mut self.order, dragged, pos.y, &midpoints);
            }
            if drag_released {
                // Drop finalizes wherever the last reposition put the card,
                // even if the pointer left the container.
                self.drag.clear();
            }
        }

        action
    }

    /// Reset the order to match the stat set when cards appear or vanish.
    fn sync_order(&mut self, stats: &[StatEntry]) {
        let in_sync = self.order.len() == stats.len()
            && stats.iter().all(|s| self.order.contains(&s.id));
        if !in_sync {
            self.order = stats.iter().map(|s| s.id).collect();
            self.drag.clear();
        }
    }
}
