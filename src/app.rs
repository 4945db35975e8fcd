//! Main application state and egui integration.

use std::time::Instant;

use chrono::{Local, NaiveDate};
use eframe::egui;

use fitdash::storage::config::{load_config, save_config, AppConfig};
use fitdash::tracker::achievements::Achievement;
use fitdash::tracker::TrackerState;
use fitdash::ui::screens::{
    AchievementsScreen, CalendarAction, CalendarScreen, DashboardAction, DashboardScreen,
    NutritionAction, NutritionScreen, ProgressScreen, Section, TimelineScreen, WorkoutsAction,
    WorkoutsScreen,
};
use fitdash::ui::theme::Theme;
use fitdash::ui::widgets::toast::{ToastCenter, UNLOCK_TIMEOUT};

/// Main application state.
pub struct FitDashApp {
    /// Active sidebar section
    section: Section,
    /// UI theme
    theme: Theme,
    /// All tracked collections and derived state
    tracker: TrackerState,
    /// Live notification toasts
    toasts: ToastCenter,
    /// Dashboard screen state
    dashboard_screen: DashboardScreen,
    /// Workouts screen state
    workouts_screen: WorkoutsScreen,
    /// Nutrition screen state
    nutrition_screen: NutritionScreen,
    /// Progress screen state
    progress_screen: ProgressScreen,
    /// Achievements screen state
    achievements_screen: AchievementsScreen,
    /// Timeline screen state
    timeline_screen: TimelineScreen,
    /// Calendar screen state
    calendar_screen: CalendarScreen,
    /// Today, fixed at startup for calendar highlighting
    today: NaiveDate,
}

impl FitDashApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load the persisted theme preference; fall back to the system theme.
        let config = load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}", e);
            AppConfig::from_system()
        });

        let theme = config.theme;
        cc.egui_ctx.set_visuals(theme.visuals());

        let today = Local::now().date_naive();

        Self {
            section: Section::Dashboard,
            theme,
            tracker: TrackerState::with_demo_data(today),
            toasts: ToastCenter::new(),
            dashboard_screen: DashboardScreen::new(),
            workouts_screen: WorkoutsScreen::new(),
            nutrition_screen: NutritionScreen::new(),
            progress_screen: ProgressScreen::new(),
            achievements_screen: AchievementsScreen::new(),
            timeline_screen: TimelineScreen::new(),
            calendar_screen: CalendarScreen::new(),
            today,
        }
    }

    /// Switch to a different section.
    fn navigate(&mut self, section: Section) {
        tracing::debug!("Navigating from {:?} to {:?}", self.section, section);
        self.section = section;
    }

    /// Toggle the theme between dark and light and persist the choice.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());

        let config = AppConfig { theme: self.theme };
        if let Err(e) = save_config(&config) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    }

    /// Toast every achievement unlocked by a mutation.
    fn notify_unlocks(&mut self, unlocked: Vec<Achievement>, now: Instant) {
        for achievement in unlocked {
            self.toasts.push_with_timeout(
                format!(
                    "Achievement unlocked: {} {}",
                    achievement.name, achievement.icon
                ),
                UNLOCK_TIMEOUT,
                now,
            );
        }
    }

    /// Render the sidebar and return the clicked section, if any.
    fn show_sidebar(&self, ui: &mut egui::Ui) -> Option<Section> {
        let mut clicked = None;

        ui.add_space(8.0);
        ui.heading("FitDash");
        ui.add_space(12.0);

        for section in Section::ALL {
            let selected = self.section == section;
            if ui.selectable_label(selected, section.label()).clicked() {
                clicked = Some(section);
            }
        }

        clicked
    }
}

impl eframe::App for FitDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Advance toast lifecycles before drawing them.
        self.toasts.tick(now);

        // Top panel with title and theme toggle.
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Fitness Tracker");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(self.theme.icon())
                        .on_hover_text("Toggle theme")
                        .clicked()
                    {
                        self.toggle_theme(ctx);
                    }
                    ui.label(egui::RichText::new(self.theme.to_string()).weak());
                });
            });
        });

        // Sidebar navigation.
        let mut nav_target = None;
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(160.0)
            .show(ctx, |ui| {
                nav_target = self.show_sidebar(ui);
            });
        if let Some(section) = nav_target {
            self.navigate(section);
        }

        // Status bar at bottom.
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                ui.label(fitdash::ui::screens::workouts::count_label(
                    self.tracker.workouts().len(),
                ));
                ui.separator();
                ui.label(format!("{} meals", self.tracker.meals().len()));
            });
        });

        // Main content area.
        egui::CentralPanel::default().show(ctx, |ui| match self.section {
            Section::Dashboard => {
                if let Some(DashboardAction::SetStatValue(id, value)) =
                    self.dashboard_screen.show(ui, self.tracker.stats(), self.theme)
                {
                    let unlocked = self.tracker.set_stat_value(id, value);
                    self.notify_unlocks(unlocked, now);
                }
            }
            Section::Workouts => {
                match self
                    .workouts_screen
                    .show(ui, self.tracker.workouts(), self.theme)
                {
                    Some(WorkoutsAction::Add { name, category }) => {
                        let unlocked = self.tracker.add_workout(name, category);
                        self.toasts.push("Workout added", now);
                        self.notify_unlocks(unlocked, now);
                    }
                    Some(WorkoutsAction::Remove(id)) => {
                        let unlocked = self.tracker.remove_workout(id);
                        self.toasts.push("Workout removed", now);
                        self.notify_unlocks(unlocked, now);
                    }
                    None => {}
                }
            }
            Section::Nutrition => {
                match self
                    .nutrition_screen
                    .show(ui, self.tracker.meals(), self.theme)
                {
                    Some(NutritionAction::Add(meal)) => {
                        let unlocked = self.tracker.add_meal(meal);
                        self.toasts.push("Meal added", now);
                        self.notify_unlocks(unlocked, now);
                    }
                    Some(NutritionAction::Remove(id)) => {
                        let unlocked = self.tracker.remove_meal(id);
                        self.toasts.push("Meal removed", now);
                        self.notify_unlocks(unlocked, now);
                    }
                    None => {}
                }
            }
            Section::Progress => self.progress_screen.show(ui),
            Section::Achievements => {
                self.achievements_screen.show(ui, &self.tracker, self.theme)
            }
            Section::Timeline => self.timeline_screen.show(ui, self.tracker.timeline()),
            Section::Calendar => {
                match self
                    .calendar_screen
                    .show(ui, &self.tracker, self.today, self.theme)
                {
                    Some(CalendarAction::PrevMonth) => {
                        let unlocked = self.tracker.prev_month();
                        self.notify_unlocks(unlocked, now);
                    }
                    Some(CalendarAction::NextMonth) => {
                        let unlocked = self.tracker.next_month();
                        self.notify_unlocks(unlocked, now);
                    }
                    None => {}
                }
            }
        });

        // Toast overlay, drawn above everything.
        self.toasts.show(ctx, self.theme, now);
    }
}
