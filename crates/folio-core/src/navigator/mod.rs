use std::time::Duration;
use serde::{Serialize, Deserialize};

mod engine;
mod gesture;
mod layout;

pub use engine::SlideNavigator;
pub use gesture::{wheel_axis, GestureSample};
pub use layout::fit_height;

/// Policy for navigation targets that fall outside `[0, len)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapMode {
    /// Out-of-range targets are rejected (skills swapper)
    Clamp,
    /// Targets are reduced modulo the slide count, enabling cyclic
    /// navigation in both directions (card carousels)
    Wrap,
}

/// Direction a transition animates in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Transition class carried by a slide while a transition is live.
///
/// Forward transitions pair `ExitLeft` with `EnterRight`; backward
/// transitions pair `ExitRight` with `EnterLeft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideClass {
    ExitLeft,
    ExitRight,
    EnterLeft,
    EnterRight,
}

/// Motion strategy selected once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionPreference {
    /// Timed transitions with the configured duration
    Animated,
    /// Transitions complete immediately (reduced motion)
    Instant,
}

/// Per-instance navigator configuration
#[derive(Debug, Clone)]
pub struct NavigatorConfig {
    /// Wrap policy for out-of-range targets
    pub wrap_mode: WrapMode,

    /// Transition duration; the busy window matches it
    pub transition: Duration,

    /// Cooldown between accepted wheel gestures, independent of the busy
    /// flag, so one physical gesture firing many events moves one slide
    pub wheel_cooldown: Duration,

    /// Minimum wheel magnitude treated as intent rather than noise
    pub wheel_noise_floor: f32,

    /// Displacement at which a drag locks to the horizontal axis
    pub swipe_lock_px: f32,

    /// Displacement at which a released drag commits to a transition
    pub swipe_commit_px: f32,

    /// Container height cap as a fraction of the viewport height
    pub height_cap_fraction: Option<f32>,

    /// Motion strategy
    pub motion: MotionPreference,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            wrap_mode: WrapMode::Clamp,
            transition: Duration::from_millis(400),
            wheel_cooldown: Duration::from_millis(320),
            wheel_noise_floor: 0.0,
            swipe_lock_px: 18.0,
            swipe_commit_px: 30.0,
            height_cap_fraction: None,
            motion: MotionPreference::Animated,
        }
    }
}

impl NavigatorConfig {
    /// Configuration used by the skills swapper: clamped, uncapped height,
    /// any horizontal wheel movement counts
    pub fn swapper() -> Self {
        Self::default()
    }

    /// Configuration used by the card carousels: wrapping, slightly longer
    /// transition, capped height, stricter thresholds
    pub fn carousel() -> Self {
        Self {
            wrap_mode: WrapMode::Wrap,
            transition: Duration::from_millis(420),
            wheel_noise_floor: 2.0,
            swipe_commit_px: 40.0,
            height_cap_fraction: Some(0.72),
            ..Self::default()
        }
    }

    /// Use the given motion strategy
    pub fn with_motion(mut self, motion: MotionPreference) -> Self {
        self.motion = motion;
        self
    }
}
