//! Transient notification toasts.
//!
//! Each toast is a small state machine (Created → Visible → FadingOut →
//! Removed) advanced by `ToastCenter::tick` with a caller-supplied instant.
//! The app ticks with `Instant::now()` each frame; tests pass synthetic
//! instants. Toasts are independent of one another and several may be on
//! screen at once.

use std::time::{Duration, Instant};

use egui::{Align2, Color32, Context, Id, RichText};

use crate::ui::theme::{DarkTheme, LightTheme, Theme};

/// Delay between enqueue and the start of the fade-in.
pub const FADE_IN_DELAY: Duration = Duration::from_millis(50);
/// Default visible duration.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);
/// Visible duration for achievement unlock toasts.
pub const UNLOCK_TIMEOUT: Duration = Duration::from_millis(4000);
/// Duration of the fade-out before removal.
pub const FADE_OUT: Duration = Duration::from_millis(400);

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToastPhase {
    /// Enqueued, not yet fading in
    Created,
    /// Fully shown
    Visible,
    /// Fading out
    FadingOut,
    /// Finished; dropped on the next tick
    Removed,
}

/// A single transient notification.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Message text
    pub message: String,
    /// When the toast was enqueued
    spawned_at: Instant,
    /// How long the toast stays visible before fading out
    timeout: Duration,
    /// Current lifecycle phase
    phase: ToastPhase,
}

impl Toast {
    fn new(message: String, timeout: Duration, now: Instant) -> Self {
        Self {
            message,
            spawned_at: now,
            timeout,
            phase: ToastPhase::Created,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Advance the phase to match `now`. Never moves backwards; ticking a
    /// removed toast is a no-op.
    fn advance(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.spawned_at);
        let target = if elapsed < FADE_IN_DELAY {
            ToastPhase::Created
        } else if elapsed < FADE_IN_DELAY + self.timeout {
            ToastPhase::Visible
        } else if elapsed < FADE_IN_DELAY + self.timeout + FADE_OUT {
            ToastPhase::FadingOut
        } else {
            ToastPhase::Removed
        };
        self.phase = self.phase.max(target);
    }

    /// Opacity for rendering, derived from the phase.
    fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            ToastPhase::Created => 0.0,
            ToastPhase::Visible => 1.0,
            ToastPhase::FadingOut => {
                let fade_start = self.spawned_at + FADE_IN_DELAY + self.timeout;
                let into_fade = now.saturating_duration_since(fade_start);
                1.0 - (into_fade.as_secs_f32() / FADE_OUT.as_secs_f32()).min(1.0)
            }
            ToastPhase::Removed => 0.0,
        }
    }
}

/// Owner of all live toasts.
#[derive(Debug, Default)]
pub struct ToastCenter {
    toasts: Vec<Toast>,
}

impl ToastCenter {
    /// Create an empty toast center.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a toast with the default timeout.
    pub fn push(&mut self, message: impl Into<String>, now: Instant) {
        self.push_with_timeout(message, DEFAULT_TIMEOUT, now);
    }

    /// Enqueue a toast with an explicit visible duration.
    pub fn push_with_timeout(
        &mut self,
        message: impl Into<String>,
        timeout: Duration,
        now: Instant,
    ) {
        let message = message.into();
        tracing::debug!("Notification: {}", message);
        self.toasts.push(Toast::new(message, timeout, now));
    }

    /// Advance every toast to `now` and drop the finished ones.
    pub fn tick(&mut self, now: Instant) {
        for toast in &mut self.toasts {
            toast.advance(now);
        }
        self.toasts.retain(|t| t.phase != ToastPhase::Removed);
    }

    /// Live toasts, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Whether any toast is live.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Draw the toast stack in the top-right corner of the window.
    pub fn show(&self, ctx: &Context, theme: Theme, now: Instant) {
        if self.toasts.is_empty() {
            return;
        }

        let (bg, fg) = match theme {
            Theme::Dark => (DarkTheme::CARD_BG, DarkTheme::TEXT_PRIMARY),
            Theme::Light => (LightTheme::TEXT_PRIMARY, LightTheme::PANEL_BG),
        };

        egui::Area::new(Id::new("toast_stack"))
            .anchor(Align2::RIGHT_TOP, [-16.0, 48.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (i, toast) in self.toasts.iter().enumerate() {
                    let opacity = toast.opacity(now);
                    if opacity <= 0.0 {
                        continue;
                    }
                    let alpha = (opacity * 255.0) as u8;

                    egui::Frame::new()
                        .fill(Color32::from_rgba_unmultiplied(
                            bg.r(),
                            bg.g(),
                            bg.b(),
                            alpha,
                        ))
                        .corner_radius(6.0)
                        .inner_margin(12.0)
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(&toast.message).color(
                                    Color32::from_rgba_unmultiplied(
                                        fg.r(),
                                        fg.g(),
                                        fg.b(),
                                        alpha,
                                    ),
                                ),
                            );
                        });

                    if i + 1 < self.toasts.len() {
                        ui.add_space(6.0);
                    }
                }
            });

        // Keep repainting while toasts animate.
        ctx.request_repaint();
    }
}
