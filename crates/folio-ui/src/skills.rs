//! Skills section: a two-slide swapper (overview list / proficiency bars)
//! plus per-row activation and a one-time swipe coachmark.

use std::time::{Duration, Instant};

use egui::{vec2, Align2, Color32, Rounding, Sense, Ui};

use folio_content::SkillGroup;
use folio_core::navigator::{MotionPreference, NavigatorConfig};

use crate::carousel::{Carousel, CarouselConfig};
use crate::theme;

/// Storage key remembering that the swipe hint has been shown
pub const COACHMARK_STORAGE_KEY: &str = "seen_skills_swipe_hint";

const COACHMARK_DURATION: Duration = Duration::from_millis(2600);

/// The sidebar skills panel
pub struct SkillsPanel {
    swapper: Carousel,

    /// The single highlighted skill row, `(group, skill)`
    active_skill: Option<(usize, usize)>,

    coachmark_seen: bool,
    coachmark_shown_at: Option<Instant>,
}

impl SkillsPanel {
    pub fn new(motion: MotionPreference, coachmark_seen: bool) -> Self {
        let swapper = Carousel::new(
            "skills_swapper",
            2,
            0,
            NavigatorConfig::swapper().with_motion(motion),
            CarouselConfig {
                show_arrows: false,
                show_dots: true,
                min_height: 140.0,
            },
        );
        Self {
            swapper,
            active_skill: None,
            coachmark_seen,
            coachmark_shown_at: None,
        }
    }

    /// Whether the coachmark has been dismissed; persisted by the app
    pub fn coachmark_seen(&self) -> bool {
        self.coachmark_seen
    }

    pub fn current_slide(&self) -> usize {
        self.swapper.current()
    }

    /// Render the panel. `visible` reports whether the section has entered
    /// the viewport, which is what arms the coachmark.
    pub fn ui(&mut self, ui: &mut Ui, groups: &[SkillGroup], visible: bool) {
        let now = Instant::now();
        self.update_coachmark(now, visible);

        let frame = egui::Frame::group(ui.style()).show(ui, |ui| {
            let Self {
                swapper,
                active_skill,
                ..
            } = self;
            let dark = ui.visuals().dark_mode;
            swapper.ui(ui, |ui, slide_index| match slide_index {
                0 => overview_slide(ui, groups, active_skill),
                _ => bars_slide(ui, groups, active_skill, dark),
            });
        });

        // Leaving the list clears the highlighted row
        if !frame.response.hovered() {
            self.active_skill = None;
        }

        // Any interaction with the swapper dismisses the hint
        if frame.response.hovered()
            && ui.input(|i| i.pointer.any_down() || i.scroll_delta != egui::Vec2::ZERO)
        {
            self.dismiss_coachmark();
        }

        if self.coachmark_shown_at.is_some() {
            self.draw_coachmark(ui, frame.response.rect);
        }
    }

    fn update_coachmark(&mut self, now: Instant, visible: bool) {
        if self.coachmark_seen {
            return;
        }
        match self.coachmark_shown_at {
            None if visible => self.coachmark_shown_at = Some(now),
            Some(shown_at) if now.duration_since(shown_at) >= COACHMARK_DURATION => {
                self.dismiss_coachmark();
            }
            _ => {}
        }
    }

    fn dismiss_coachmark(&mut self) {
        if !self.coachmark_seen {
            tracing::debug!("skills swipe hint dismissed");
        }
        self.coachmark_seen = true;
        self.coachmark_shown_at = None;
    }

    fn draw_coachmark(&self, ui: &Ui, rect: egui::Rect) {
        let painter = ui.ctx().layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("skills_coachmark"),
        ));
        let pos = rect.center_top() + vec2(0.0, 18.0);
        let galley_rect = egui::Rect::from_center_size(pos, vec2(92.0, 24.0));
        painter.rect_filled(
            galley_rect,
            Rounding::same(12.0),
            Color32::from_black_alpha(160),
        );
        painter.text(
            pos,
            Align2::CENTER_CENTER,
            "Swipe ⟶",
            egui::FontId::proportional(13.0),
            Color32::WHITE,
        );
        ui.ctx().request_repaint();
    }
}

/// Slide 0: skill names grouped, hover highlights one row
fn overview_slide(ui: &mut Ui, groups: &[SkillGroup], active: &mut Option<(usize, usize)>) {
    for (gi, group) in groups.iter().enumerate() {
        ui.label(egui::RichText::new(&group.name).strong());
        for (si, skill) in group.skills.iter().enumerate() {
            let is_active = *active == Some((gi, si));
            let resp = ui.selectable_label(is_active, &skill.name);
            if resp.hovered() || resp.has_focus() || resp.clicked() {
                *active = Some((gi, si));
            }
        }
        ui.add_space(6.0);
    }
}

/// Slide 1: proficiency bars
fn bars_slide(ui: &mut Ui, groups: &[SkillGroup], active: &mut Option<(usize, usize)>, dark: bool) {
    let accent = theme::accent_color(dark);
    let track = theme::muted_color(dark).linear_multiply(0.4);

    for (gi, group) in groups.iter().enumerate() {
        ui.label(egui::RichText::new(&group.name).strong());
        for (si, skill) in group.skills.iter().enumerate() {
            let is_active = *active == Some((gi, si));

            let (rect, resp) =
                ui.allocate_exact_size(vec2(ui.available_width(), 22.0), Sense::hover());
            if resp.hovered() {
                *active = Some((gi, si));
            }

            let painter = ui.painter();
            painter.text(
                rect.left_center(),
                Align2::LEFT_CENTER,
                &skill.name,
                egui::FontId::proportional(13.0),
                ui.visuals().text_color(),
            );

            let bar = egui::Rect::from_min_size(
                rect.left_bottom() - vec2(0.0, 6.0),
                vec2(rect.width(), 5.0),
            );
            painter.rect_filled(bar, Rounding::same(2.0), track);
            let fraction = f32::from(skill.level.min(100)) / 100.0;
            let mut fill = bar;
            fill.set_width(bar.width() * fraction);
            let fill_color = if is_active {
                accent
            } else {
                accent.linear_multiply(0.7)
            };
            painter.rect_filled(fill, Rounding::same(2.0), fill_color);
        }
        ui.add_space(6.0);
    }
}
