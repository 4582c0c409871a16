//! Slide navigator state machine

use std::time::Instant;
use tracing::trace;

use super::{gesture, Direction, MotionPreference, NavigatorConfig, SlideClass, WrapMode};

/// Transition phase
#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Transitioning {
        since: Instant,
        direction: Direction,
        from: usize,
    },
}

/// Index-based navigation state for one carousel-like region.
///
/// One instance is created per region (skills swapper, experience cards,
/// certification cards). All input adapters funnel into [`go`](Self::go);
/// the `current` index held here is the single source of truth. Invalid or
/// overlapping requests degrade to no-ops, never to errors: a user
/// interaction layer must not throw on rapid or malformed gestures.
pub struct SlideNavigator {
    len: usize,
    current: usize,
    phase: Phase,
    config: NavigatorConfig,
    wheel_lock_until: Option<Instant>,
}

impl SlideNavigator {
    /// Create a navigator over `len` slides, starting at `initial`
    /// (clamped into range; the initial value comes from whichever slide
    /// the content marks active, or 0).
    pub fn new(len: usize, initial: usize, config: NavigatorConfig) -> Self {
        Self {
            len,
            current: if len == 0 { 0 } else { initial.min(len - 1) },
            phase: Phase::Idle,
            config,
            wheel_lock_until: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Whether a transition is live. While busy every navigation request
    /// is dropped, not queued.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Navigate to `target`. Returns whether a transition started.
    ///
    /// Clamp mode rejects out-of-range and same-index targets; wrap mode
    /// reduces the target modulo the slide count. The transition direction
    /// is forward when the raw target exceeds the current index, and also
    /// on the last-to-first wrap so cyclic forward navigation keeps
    /// animating in the same rotational sense.
    pub fn go(&mut self, target: isize, now: Instant) -> bool {
        if self.len == 0 || self.is_busy() {
            return false;
        }

        let normalized = match self.config.wrap_mode {
            WrapMode::Clamp => {
                if target < 0 || target >= self.len as isize {
                    return false;
                }
                target as usize
            }
            WrapMode::Wrap => target.rem_euclid(self.len as isize) as usize,
        };
        if normalized == self.current {
            return false;
        }

        let wrap_forward = self.config.wrap_mode == WrapMode::Wrap
            && self.current == self.len - 1
            && normalized == 0;
        let direction = if wrap_forward || target > self.current as isize {
            Direction::Forward
        } else {
            Direction::Backward
        };

        trace!(from = self.current, to = normalized, ?direction, "slide transition");

        let from = self.current;
        self.current = normalized;
        self.phase = match self.config.motion {
            MotionPreference::Instant => Phase::Idle,
            MotionPreference::Animated => Phase::Transitioning {
                since: now,
                direction,
                from,
            },
        };
        true
    }

    /// Navigate one slide forward
    pub fn next(&mut self, now: Instant) -> bool {
        self.go(self.current as isize + 1, now)
    }

    /// Navigate one slide backward
    pub fn prev(&mut self, now: Instant) -> bool {
        self.go(self.current as isize - 1, now)
    }

    /// Release the busy flag once the transition duration has elapsed.
    /// Returns whether a transition finished on this call. Completion is
    /// time-based; there is no cancellation, the phase always clears.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Phase::Transitioning { since, .. } = self.phase {
            if now.duration_since(since) >= self.config.transition {
                self.phase = Phase::Idle;
                return true;
            }
        }
        false
    }

    /// Transition progress in `[0, 1]`; 1.0 when idle
    pub fn progress(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Idle => 1.0,
            Phase::Transitioning { since, .. } => {
                let elapsed = now.duration_since(since).as_secs_f32();
                (elapsed / self.config.transition.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }

    /// Whether slide `i` is the active slide
    pub fn is_active(&self, i: usize) -> bool {
        i == self.current
    }

    /// Transition class for slide `i`, if one applies right now.
    /// Only the outgoing and incoming slides carry a class, and only
    /// while the transition is live.
    pub fn slide_class(&self, i: usize) -> Option<SlideClass> {
        match self.phase {
            Phase::Idle => None,
            Phase::Transitioning { direction, from, .. } => {
                if i == from {
                    Some(match direction {
                        Direction::Forward => SlideClass::ExitLeft,
                        Direction::Backward => SlideClass::ExitRight,
                    })
                } else if i == self.current {
                    Some(match direction {
                        Direction::Forward => SlideClass::EnterRight,
                        Direction::Backward => SlideClass::EnterLeft,
                    })
                } else {
                    None
                }
            }
        }
    }

    /// Whether pagination dot `k` should show its active indicator
    pub fn dot_active(&self, k: usize) -> bool {
        self.current == k
    }

    /// Wheel adapter. `delta` follows wheel-event conventions (positive x
    /// scrolls right); with `shift` held the vertical delta becomes the
    /// horizontal signal. Returns whether the event was consumed; a
    /// non-horizontal wheel is left to normal scrolling. A consumed event
    /// inside the cooldown window navigates nowhere.
    pub fn on_wheel(&mut self, delta: egui::Vec2, shift: bool, now: Instant) -> bool {
        let Some(signal) = gesture::wheel_axis(delta, shift) else {
            return false;
        };
        if signal.abs() < self.config.wheel_noise_floor {
            return false;
        }
        if let Some(until) = self.wheel_lock_until {
            if now < until {
                return true;
            }
        }
        self.wheel_lock_until = Some(now + self.config.wheel_cooldown);
        if signal > 0.0 {
            self.next(now);
        } else if signal < 0.0 {
            self.prev(now);
        }
        true
    }

    /// Swipe-release adapter: applies the outcome of a finished gesture
    pub fn on_swipe(&mut self, swipe: Direction, now: Instant) -> bool {
        match swipe {
            Direction::Forward => self.next(now),
            Direction::Backward => self.prev(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn nav(len: usize, config: NavigatorConfig) -> SlideNavigator {
        SlideNavigator::new(len, 0, config)
    }

    fn settle(n: &mut SlideNavigator, now: Instant) -> Instant {
        let later = now + n.config().transition + Duration::from_millis(10);
        n.tick(later);
        later
    }

    #[test]
    fn test_clamp_accepts_in_range_targets() {
        let mut n = nav(3, NavigatorConfig::swapper());
        let mut now = Instant::now();

        assert!(n.go(2, now));
        assert_eq!(n.current_index(), 2);
        assert!(n.is_active(2));
        assert_eq!((0..3).filter(|&i| n.is_active(i)).count(), 1);

        now = settle(&mut n, now);
        assert!(n.go(1, now));
        assert_eq!(n.current_index(), 1);
    }

    #[test]
    fn test_clamp_rejects_out_of_range_and_same_index() {
        let mut n = nav(2, NavigatorConfig::swapper());
        let now = Instant::now();

        assert!(!n.go(-1, now));
        assert!(!n.go(2, now));
        assert!(!n.go(0, now));
        assert_eq!(n.current_index(), 0);
        assert!(!n.is_busy());
    }

    #[test]
    fn test_wrap_normalizes_any_integer() {
        for (target, expected) in [(4isize, 0usize), (5, 1), (-1, 3), (-4, 0), (9, 1)] {
            let mut n = nav(4, NavigatorConfig::carousel());
            let now = Instant::now();
            let accepted = n.go(target, now);
            if expected == 0 {
                // Normalized onto the current slide: no-op
                assert!(!accepted, "go({}) should be a no-op", target);
            } else {
                assert!(accepted, "go({}) should transition", target);
            }
            assert_eq!(n.current_index(), expected, "go({})", target);
        }
    }

    #[test]
    fn test_busy_drops_requests() {
        let mut n = nav(3, NavigatorConfig::swapper());
        let now = Instant::now();

        assert!(n.go(1, now));
        assert!(n.is_busy());
        assert!(!n.go(2, now));
        assert!(!n.next(now));
        assert_eq!(n.current_index(), 1);

        // The completion timer always releases the flag
        assert!(n.tick(now + Duration::from_millis(450)));
        assert!(!n.is_busy());
    }

    #[test]
    fn test_wrap_around_is_forward() {
        let mut n = SlideNavigator::new(5, 4, NavigatorConfig::carousel());
        let now = Instant::now();

        assert!(n.go(0, now));
        assert_eq!(n.current_index(), 0);
        assert_eq!(n.slide_class(4), Some(SlideClass::ExitLeft));
        assert_eq!(n.slide_class(0), Some(SlideClass::EnterRight));
        assert_eq!(n.slide_class(2), None);
    }

    #[test]
    fn test_backward_classes() {
        let mut n = SlideNavigator::new(3, 2, NavigatorConfig::swapper());
        let now = Instant::now();

        assert!(n.prev(now));
        assert_eq!(n.slide_class(2), Some(SlideClass::ExitRight));
        assert_eq!(n.slide_class(1), Some(SlideClass::EnterLeft));
    }

    #[test]
    fn test_classes_clear_after_completion() {
        let mut n = nav(2, NavigatorConfig::swapper());
        let now = Instant::now();
        n.go(1, now);
        settle(&mut n, now);
        assert_eq!(n.slide_class(0), None);
        assert_eq!(n.slide_class(1), None);
    }

    #[test]
    fn test_dot_active_iff_current() {
        let mut n = nav(4, NavigatorConfig::carousel());
        let mut now = Instant::now();
        for target in [1isize, 3, 2] {
            n.go(target, now);
            now = settle(&mut n, now);
            for k in 0..4 {
                assert_eq!(n.dot_active(k), n.current_index() == k);
            }
        }
    }

    #[test]
    fn test_wheel_horizontal_delta_triggers_one_transition() {
        // Skills swapper scenario: 2 slides, +300 horizontal wheel
        let mut n = nav(2, NavigatorConfig::swapper());
        let now = Instant::now();

        assert!(n.on_wheel(egui::vec2(300.0, 0.0), false, now));
        assert_eq!(n.current_index(), 1);
        assert!(n.is_busy());

        // Mid-transition go is a no-op
        assert!(!n.go(1, now + Duration::from_millis(100)));
        assert_eq!(n.current_index(), 1);
    }

    #[test]
    fn test_wheel_vertical_not_intercepted() {
        let mut n = nav(2, NavigatorConfig::swapper());
        let now = Instant::now();
        assert!(!n.on_wheel(egui::vec2(1.0, 40.0), false, now));
        assert_eq!(n.current_index(), 0);
    }

    #[test]
    fn test_shift_wheel_uses_vertical_delta() {
        let mut n = nav(2, NavigatorConfig::swapper());
        let now = Instant::now();
        assert!(n.on_wheel(egui::vec2(0.0, 60.0), true, now));
        assert_eq!(n.current_index(), 1);
    }

    #[test]
    fn test_wheel_noise_floor() {
        let mut n = nav(3, NavigatorConfig::carousel());
        let now = Instant::now();
        assert!(!n.on_wheel(egui::vec2(1.5, 0.0), false, now));
        assert_eq!(n.current_index(), 0);
    }

    #[test]
    fn test_wheel_cooldown_rate_limits_bursts() {
        let mut n = nav(4, NavigatorConfig::carousel());
        let now = Instant::now();

        assert!(n.on_wheel(egui::vec2(50.0, 0.0), false, now));
        assert_eq!(n.current_index(), 1);

        // A later event from the same physical gesture lands inside the
        // cooldown window: consumed, navigates nowhere.
        let burst = now + Duration::from_millis(100);
        assert!(n.on_wheel(egui::vec2(50.0, 0.0), false, burst));
        assert_eq!(n.current_index(), 1);

        // Past both the cooldown and the transition, wheel moves again
        let later = now + Duration::from_millis(450);
        n.tick(later);
        assert!(n.on_wheel(egui::vec2(50.0, 0.0), false, later));
        assert_eq!(n.current_index(), 2);
    }

    #[test]
    fn test_next_wraps_back_to_start() {
        // Experience carousel scenario: 4 slides, "next" four times
        let mut n = nav(4, NavigatorConfig::carousel());
        let mut now = Instant::now();
        for _ in 0..4 {
            assert!(n.next(now));
            now = settle(&mut n, now);
        }
        assert_eq!(n.current_index(), 0);
    }

    #[test]
    fn test_empty_and_single_slide_install_no_behavior() {
        let mut empty = nav(0, NavigatorConfig::swapper());
        let now = Instant::now();
        assert!(!empty.go(0, now));
        assert!(!empty.next(now));

        let mut single = nav(1, NavigatorConfig::carousel());
        assert!(!single.next(now));
        assert!(!single.prev(now));
        assert_eq!(single.current_index(), 0);
    }

    #[test]
    fn test_instant_motion_skips_busy_window() {
        let mut n = nav(3, NavigatorConfig::swapper().with_motion(MotionPreference::Instant));
        let now = Instant::now();
        assert!(n.go(1, now));
        assert!(!n.is_busy());
        assert!(n.go(2, now));
        assert_eq!(n.current_index(), 2);
    }

    #[test]
    fn test_initial_index_clamped() {
        let n = SlideNavigator::new(3, 7, NavigatorConfig::swapper());
        assert_eq!(n.current_index(), 2);
    }
}
