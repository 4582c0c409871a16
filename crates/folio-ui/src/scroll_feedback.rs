//! Scroll feedback: top progress bar, back-to-top button, smooth scrolling

use std::time::Instant;

use egui::{vec2, Align2, Context, Rect, Rounding};

use folio_core::navigator::MotionPreference;
use folio_core::scroll::{self, SmoothScroll};

use crate::theme;

/// Paint the thin scroll-progress bar across the top of the screen
pub fn progress_bar(ctx: &Context, fraction: f32) {
    let screen = ctx.screen_rect();
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("scroll_progress"),
    ));
    let dark = ctx.style().visuals.dark_mode;
    let bar = Rect::from_min_size(screen.min, vec2(screen.width() * fraction, 3.0));
    painter.rect_filled(bar, Rounding::ZERO, theme::accent_color(dark));
}

/// Floating back-to-top button plus the smooth-scroll animation shared by
/// the shell's section links
pub struct BackToTop {
    motion: MotionPreference,
    smooth: Option<SmoothScroll>,
}

impl BackToTop {
    pub fn new(motion: MotionPreference) -> Self {
        Self {
            motion,
            smooth: None,
        }
    }

    /// Start a scroll from `from` to `target`
    pub fn scroll_to(&mut self, from: f32, target: f32, now: Instant) {
        self.smooth = Some(match self.motion {
            MotionPreference::Animated => SmoothScroll::new(from, target, now),
            MotionPreference::Instant => SmoothScroll::instant(target, now),
        });
    }

    /// Show the button when past the threshold, advance any running
    /// animation, and return the scroll offset to apply this frame.
    pub fn ui(&mut self, ctx: &Context, offset: f32, now: Instant) -> Option<f32> {
        let mut frame_offset = None;
        if let Some(smooth) = self.smooth.take() {
            match smooth.offset_at(now) {
                Some(o) => {
                    frame_offset = Some(o);
                    self.smooth = Some(smooth);
                    ctx.request_repaint();
                }
                None => frame_offset = Some(smooth.target()),
            }
        }

        let screen = ctx.screen_rect();
        if scroll::back_to_top_visible(offset, screen.width()) {
            egui::Area::new("back_to_top")
                .anchor(Align2::RIGHT_BOTTOM, vec2(-16.0, -16.0))
                .show(ctx, |ui| {
                    let button = ui.add_sized([36.0, 36.0], egui::Button::new("⬆"));
                    if button.on_hover_text("Back to top").clicked() {
                        self.scroll_to(offset, 0.0, now);
                    }
                });
        }

        frame_offset
    }
}
