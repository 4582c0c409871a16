//! Scroll-derived UI feedback state: progress ratio, back-to-top
//! visibility, reveal-on-scroll latches, and smooth scrolling.

use std::time::{Duration, Instant};

/// Fraction of a section that must be visible before it reveals
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Scroll progress in `[0, 1]` for the top progress bar
pub fn progress(offset: f32, content_height: f32, viewport_height: f32) -> f32 {
    let total = content_height - viewport_height;
    if total > 0.0 {
        (offset / total).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Whether the back-to-top affordance should show. The threshold tightens
/// on narrow viewports where a screenful is shorter.
pub fn back_to_top_visible(offset: f32, viewport_width: f32) -> bool {
    let threshold = if viewport_width <= 600.0 { 120.0 } else { 240.0 };
    offset > threshold
}

/// One-way visibility latches for reveal-on-scroll sections. A section
/// that has been seen once stays revealed for the life of the page.
#[derive(Debug, Clone)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// Record the visible fraction of section `i` for this frame
    pub fn observe(&mut self, i: usize, visible_ratio: f32) {
        if let Some(slot) = self.revealed.get_mut(i) {
            if visible_ratio >= REVEAL_THRESHOLD {
                *slot = true;
            }
        }
    }

    pub fn is_revealed(&self, i: usize) -> bool {
        self.revealed.get(i).copied().unwrap_or(false)
    }

    /// Reveal everything at once (no-motion environments)
    pub fn reveal_all(&mut self) {
        self.revealed.iter_mut().for_each(|r| *r = true);
    }
}

/// An eased scroll animation from one offset to another, polled per frame
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    from: f32,
    target: f32,
    started: Instant,
    duration: Duration,
}

impl SmoothScroll {
    pub fn new(from: f32, target: f32, started: Instant) -> Self {
        Self {
            from,
            target,
            started,
            duration: Duration::from_millis(450),
        }
    }

    /// A zero-duration scroll that lands on the target immediately
    /// (reduced-motion strategy)
    pub fn instant(target: f32, started: Instant) -> Self {
        Self {
            from: target,
            target,
            started,
            duration: Duration::ZERO,
        }
    }

    /// Offset for this frame, or `None` once the animation has finished
    pub fn offset_at(&self, now: Instant) -> Option<f32> {
        if self.duration.is_zero() {
            return None;
        }
        let t = now.duration_since(self.started).as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            return None;
        }
        // Smoothstep ease in/out
        let eased = t * t * (3.0 - 2.0 * t);
        Some(self.from + (self.target - self.from) * eased)
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps_to_unit_range() {
        assert_eq!(progress(0.0, 2000.0, 800.0), 0.0);
        assert_eq!(progress(600.0, 2000.0, 800.0), 0.5);
        assert_eq!(progress(5000.0, 2000.0, 800.0), 1.0);
    }

    #[test]
    fn test_progress_short_content_is_zero() {
        assert_eq!(progress(100.0, 500.0, 800.0), 0.0);
    }

    #[test]
    fn test_back_to_top_threshold_depends_on_width() {
        assert!(!back_to_top_visible(200.0, 1200.0));
        assert!(back_to_top_visible(300.0, 1200.0));
        assert!(back_to_top_visible(150.0, 480.0));
        assert!(!back_to_top_visible(100.0, 480.0));
    }

    #[test]
    fn test_reveal_is_a_one_way_latch() {
        let mut r = RevealSet::new(3);
        r.observe(1, 0.05);
        assert!(!r.is_revealed(1));
        r.observe(1, 0.4);
        assert!(r.is_revealed(1));
        r.observe(1, 0.0);
        assert!(r.is_revealed(1));
        assert!(!r.is_revealed(0));
    }

    #[test]
    fn test_smooth_scroll_ends_at_target() {
        let t0 = Instant::now();
        let s = SmoothScroll::new(800.0, 0.0, t0);
        let mid = s.offset_at(t0 + Duration::from_millis(225)).unwrap();
        assert!(mid < 800.0 && mid > 0.0);
        assert_eq!(s.offset_at(t0 + Duration::from_millis(500)), None);
    }
}
