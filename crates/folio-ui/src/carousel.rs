//! Carousel widget driving a [`SlideNavigator`].
//!
//! One instance per carousel-like region. The widget translates egui input
//! (wheel, pointer drag, arrow keys, pagination dots, prev/next buttons)
//! into navigator calls, fits the container height to the active slide, and
//! draws the transition offsets while a transition is live.

use std::time::Instant;

use egui::{vec2, Align, Key, Layout, Rect, Response, Sense, Ui, Vec2};

use folio_core::navigator::{
    fit_height, GestureSample, NavigatorConfig, SlideClass, SlideNavigator,
};
use folio_core::timing::Debouncer;

use crate::theme;
use crate::widget_utils::WidgetId;

/// Carousel display configuration
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    /// Show prev/next buttons
    pub show_arrows: bool,

    /// Show the pagination dot row
    pub show_dots: bool,

    /// Container height before the first slide has been measured
    pub min_height: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            show_arrows: true,
            show_dots: true,
            min_height: 160.0,
        }
    }
}

/// A carousel over `len` slides rendered by a caller-supplied closure
pub struct Carousel {
    id: String,
    nav: SlideNavigator,
    config: CarouselConfig,

    /// Last rendered content height per slide; immediate mode cannot
    /// measure a slide before laying it out, so the container is fitted
    /// from the previous frame's measurement
    measured: Vec<Option<f32>>,

    gesture: Option<GestureSample>,
    resize_debounce: Debouncer,
    last_viewport: Vec2,
    refit_pending: bool,
}

impl Carousel {
    /// Create a carousel over `len` slides starting at `initial`
    pub fn new(
        id: impl Into<String>,
        len: usize,
        initial: usize,
        nav_config: NavigatorConfig,
        config: CarouselConfig,
    ) -> Self {
        Self {
            id: id.into(),
            nav: SlideNavigator::new(len, initial, nav_config),
            config,
            measured: vec![None; len],
            gesture: None,
            resize_debounce: Debouncer::resize(),
            last_viewport: Vec2::ZERO,
            refit_pending: false,
        }
    }

    pub fn current(&self) -> usize {
        self.nav.current_index()
    }

    pub fn navigator(&self) -> &SlideNavigator {
        &self.nav
    }

    /// Whether any navigation input has been accepted so far this frame
    /// is observable through the navigator's busy flag
    pub fn is_transitioning(&self) -> bool {
        self.nav.is_busy()
    }

    /// Render the carousel. `slide` draws slide `i` into the given `Ui`.
    pub fn ui(&mut self, ui: &mut Ui, mut slide: impl FnMut(&mut Ui, usize)) {
        if self.nav.is_empty() {
            // Missing structure: feature absent, install nothing
            return;
        }
        let now = Instant::now();
        self.nav.tick(now);

        let viewport = ui.ctx().screen_rect().size();
        if viewport != self.last_viewport {
            self.last_viewport = viewport;
            self.resize_debounce.trigger(now);
        }
        if self.resize_debounce.poll(now) {
            self.refit_pending = true;
        }
        if self.refit_pending {
            // Heights remeasure as slides render; drop stale memos once
            self.measured.iter_mut().for_each(|m| *m = None);
            self.refit_pending = false;
        }

        let width = ui.available_width();
        let content_h = self.measured[self.nav.current_index()].unwrap_or(self.config.min_height);
        let cap = self.nav.config().height_cap_fraction;
        let height = fit_height(content_h, viewport.y, cap);

        let (outer_rect, response) =
            ui.allocate_exact_size(vec2(width, height), Sense::click_and_drag());

        self.handle_input(ui, &response, now);

        self.draw_slides(ui, outer_rect, now, &mut slide);

        if self.config.show_arrows || self.config.show_dots {
            self.controls(ui, now);
        }

        if self.nav.is_busy() {
            ui.ctx().request_repaint();
        }
    }

    fn handle_input(&mut self, ui: &Ui, response: &Response, now: Instant) {
        // Wheel and keyboard apply while the pointer is over the region.
        // egui reports scroll as content motion, the opposite sign of the
        // wheel delta the thresholds are phrased in.
        if response.hovered() {
            let (scroll, shift) = ui.input(|i| (i.scroll_delta, i.modifiers.shift));
            if scroll != Vec2::ZERO {
                self.nav.on_wheel(-scroll, shift, now);
            }
            if ui.input(|i| i.key_pressed(Key::ArrowRight)) {
                self.nav.next(now);
            }
            if ui.input(|i| i.key_pressed(Key::ArrowLeft)) {
                self.nav.prev(now);
            }
        }

        let lock_px = self.nav.config().swipe_lock_px;
        let commit_px = self.nav.config().swipe_commit_px;

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.gesture = Some(GestureSample::begin(pos));
            }
        } else if response.dragged() {
            if let (Some(gesture), Some(pos)) =
                (self.gesture.as_mut(), response.interact_pointer_pos())
            {
                gesture.update(pos, lock_px);
            }
        }
        if response.drag_released() {
            if let (Some(gesture), Some(pos)) =
                (self.gesture.take(), response.interact_pointer_pos())
            {
                if let Some(direction) = gesture.release(pos, commit_px) {
                    self.nav.on_swipe(direction, now);
                }
            }
        }
    }

    fn draw_slides(
        &mut self,
        ui: &mut Ui,
        outer_rect: Rect,
        now: Instant,
        slide: &mut impl FnMut(&mut Ui, usize),
    ) {
        let width = outer_rect.width();
        let t = self.nav.progress(now);
        let eased = t * t * (3.0 - 2.0 * t);

        for i in 0..self.nav.len() {
            let dx = match self.nav.slide_class(i) {
                Some(SlideClass::ExitLeft) => -width * eased,
                Some(SlideClass::ExitRight) => width * eased,
                Some(SlideClass::EnterRight) => width * (1.0 - eased),
                Some(SlideClass::EnterLeft) => -width * (1.0 - eased),
                None if self.nav.is_active(i) => 0.0,
                None => continue,
            };

            let origin = outer_rect.min + vec2(dx, 0.0);
            let max_rect = Rect::from_min_size(origin, vec2(width, f32::INFINITY));
            let mut child = ui.child_ui(max_rect, Layout::top_down(Align::Min));
            child.set_clip_rect(outer_rect.intersect(ui.clip_rect()));
            slide(&mut child, i);
            self.measured[i] = Some(child.min_rect().height());
        }
    }

    fn controls(&mut self, ui: &mut Ui, now: Instant) {
        let dark = ui.visuals().dark_mode;
        ui.horizontal(|ui| {
            if self.config.show_arrows {
                let prev = ui.add_sized([28.0, 24.0], egui::Button::new("◀"));
                if prev.on_hover_text("Previous").clicked() {
                    self.nav.prev(now);
                }
            }

            if self.config.show_dots {
                for k in 0..self.nav.len() {
                    let dot_id = WidgetId::new(&self.id).with("dot").index(k).id();
                    let (rect, _) = ui.allocate_exact_size(vec2(16.0, 16.0), Sense::hover());
                    let resp = ui.interact(rect, dot_id, Sense::click());

                    let active = self.nav.dot_active(k);
                    let color = if active {
                        theme::accent_color(dark)
                    } else {
                        theme::muted_color(dark)
                    };
                    let radius = if active { 5.0 } else { 3.5 };
                    ui.painter().circle_filled(rect.center(), radius, color);

                    let key_activated = resp.has_focus()
                        && ui.input(|i| i.key_pressed(Key::Enter) || i.key_pressed(Key::Space));
                    if resp.clicked() || key_activated {
                        self.nav.go(k as isize, now);
                    }
                }
            }

            if self.config.show_arrows {
                let next = ui.add_sized([28.0, 24.0], egui::Button::new("▶"));
                if next.on_hover_text("Next").clicked() {
                    self.nav.next(now);
                }
            }
        });
    }
}
