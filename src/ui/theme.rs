//! UI theme definitions.

use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

/// Theme preference for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme (default)
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }

    /// The opposite theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon for the theme toggle button.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀",
        }
    }

    /// Theme matching the operating system preference, light when unknown.
    pub fn system_default() -> Theme {
        match dark_light::detect() {
            dark_light::Mode::Dark => Theme::Dark,
            dark_light::Mode::Light | dark_light::Mode::Default => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "Dark"),
            Theme::Light => write!(f, "Light"),
        }
    }
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(18, 20, 18);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(28, 32, 28);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(38, 44, 38);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 245, 240);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 170, 160);
    /// Accent color (green)
    pub const ACCENT: Color32 = Color32::from_rgb(76, 175, 80);
    /// Soft accent for filled areas
    pub const ACCENT_SOFT: Color32 = Color32::from_rgb(129, 199, 132);
    /// Warning color
    pub const WARNING: Color32 = Color32::from_rgb(251, 188, 4);
    /// Error color (red)
    pub const ERROR: Color32 = Color32::from_rgb(234, 67, 53);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(60, 70, 60);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 252, 250);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(243, 248, 243);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(32, 36, 32);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(96, 104, 96);
    /// Accent color (green)
    pub const ACCENT: Color32 = Color32::from_rgb(56, 142, 60);
    /// Soft accent for filled areas
    pub const ACCENT_SOFT: Color32 = Color32::from_rgb(129, 199, 132);
    /// Warning color
    pub const WARNING: Color32 = Color32::from_rgb(234, 160, 0);
    /// Error color (red)
    pub const ERROR: Color32 = Color32::from_rgb(200, 50, 40);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(218, 224, 218);
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::PANEL_BG;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(50, 60, 50);
    visuals.widgets.active.bg_fill = DarkTheme::ACCENT;

    visuals.selection.bg_fill = DarkTheme::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = DarkTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = DarkTheme::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::PANEL_BG;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(230, 238, 230);
    visuals.widgets.active.bg_fill = LightTheme::ACCENT;

    visuals.selection.bg_fill = LightTheme::ACCENT.linear_multiply(0.2);
    visuals.selection.stroke.color = LightTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightTheme::BORDER;

    visuals
}

/// Accent color for the active theme.
pub fn accent(theme: Theme) -> Color32 {
    match theme {
        Theme::Dark => DarkTheme::ACCENT,
        Theme::Light => LightTheme::ACCENT,
    }
}

/// Error color for the active theme.
pub fn error_color(theme: Theme) -> Color32 {
    match theme {
        Theme::Dark => DarkTheme::ERROR,
        Theme::Light => LightTheme::ERROR,
    }
}
