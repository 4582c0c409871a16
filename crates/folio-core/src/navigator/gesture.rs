//! Gesture classification for wheel and swipe input

use egui::{Pos2, Vec2};

use super::Direction;

/// Extract the horizontal signal from a wheel delta, if the event reads as
/// horizontal intent. With `shift` held the vertical delta is the signal
/// (Shift+wheel scrolls sideways); otherwise the larger axis wins.
pub fn wheel_axis(delta: Vec2, shift: bool) -> Option<f32> {
    let horizontal = if shift {
        delta.y.abs() > 0.0
    } else {
        delta.x.abs() > delta.y.abs()
    };
    if !horizontal {
        return None;
    }
    Some(if shift { delta.y } else { delta.x })
}

/// Transient record of one pointer/touch interaction, created on press and
/// discarded on release.
#[derive(Debug, Clone, Copy)]
pub struct GestureSample {
    start: Pos2,
    horizontal_lock: bool,
}

impl GestureSample {
    /// Begin a gesture at the press position
    pub fn begin(start: Pos2) -> Self {
        Self {
            start,
            horizontal_lock: false,
        }
    }

    /// Update with the current pointer position. Once horizontal
    /// displacement exceeds vertical and the lock threshold, the gesture
    /// latches horizontal for its remaining lifetime; the caller should
    /// then suppress default handling so page scroll cannot hijack it.
    pub fn update(&mut self, current: Pos2, lock_px: f32) -> bool {
        let d = current - self.start;
        if !self.horizontal_lock && d.x.abs() > d.y.abs() && d.x.abs() > lock_px {
            self.horizontal_lock = true;
        }
        self.horizontal_lock
    }

    /// Whether the horizontal latch has engaged
    pub fn locked_horizontal(&self) -> bool {
        self.horizontal_lock
    }

    /// Finish the gesture at the release position. Commits to a
    /// transition when horizontal displacement beats vertical and exceeds
    /// the commit threshold; a leftward swipe advances forward.
    pub fn release(self, end: Pos2, commit_px: f32) -> Option<Direction> {
        let d = end - self.start;
        if d.x.abs() > d.y.abs() && d.x.abs() > commit_px {
            if d.x < 0.0 {
                Some(Direction::Forward)
            } else {
                Some(Direction::Backward)
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_wheel_axis_prefers_larger_component() {
        assert_eq!(wheel_axis(egui::vec2(30.0, 10.0), false), Some(30.0));
        assert_eq!(wheel_axis(egui::vec2(5.0, 40.0), false), None);
    }

    #[test]
    fn test_wheel_axis_shift_promotes_vertical() {
        assert_eq!(wheel_axis(egui::vec2(0.0, 40.0), true), Some(40.0));
        assert_eq!(wheel_axis(egui::vec2(0.0, 0.0), true), None);
    }

    #[test]
    fn test_below_commit_threshold_is_no_transition() {
        let g = GestureSample::begin(pos2(100.0, 100.0));
        assert_eq!(g.release(pos2(125.0, 105.0), 30.0), None);
    }

    #[test]
    fn test_above_commit_threshold_commits_in_sign_direction() {
        let g = GestureSample::begin(pos2(100.0, 100.0));
        assert_eq!(
            g.release(pos2(65.0, 105.0), 30.0),
            Some(Direction::Forward)
        );

        let g = GestureSample::begin(pos2(100.0, 100.0));
        assert_eq!(
            g.release(pos2(135.0, 105.0), 30.0),
            Some(Direction::Backward)
        );
    }

    #[test]
    fn test_mostly_vertical_drag_never_commits() {
        let g = GestureSample::begin(pos2(0.0, 0.0));
        assert_eq!(g.release(pos2(35.0, 80.0), 30.0), None);
    }

    #[test]
    fn test_horizontal_lock_engages_and_latches() {
        let mut g = GestureSample::begin(pos2(0.0, 0.0));
        assert!(!g.update(pos2(10.0, 2.0), 18.0));
        assert!(g.update(pos2(25.0, 4.0), 18.0));
        // Latched: later vertical movement cannot re-classify the gesture
        assert!(g.update(pos2(25.0, 60.0), 18.0));
        assert!(g.locked_horizontal());
    }
}
