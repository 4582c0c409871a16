//! Timer helpers for the immediate-mode event loop

use std::time::{Duration, Instant};

/// Coalesces a burst of triggers into one firing a fixed delay after the
/// last trigger. Used for resize-driven height refits so layout is not
/// recomputed on every resize event.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Default delay for resize handling
    pub fn resize() -> Self {
        Self::new(Duration::from_millis(50))
    }

    /// Arm (or re-arm) the debouncer
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns true exactly once, when the delay has elapsed since the
    /// last trigger
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a firing is pending
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let mut d = Debouncer::new(Duration::from_millis(50));
        let t0 = Instant::now();
        d.trigger(t0);
        assert!(!d.poll(t0 + Duration::from_millis(20)));
        assert!(d.poll(t0 + Duration::from_millis(60)));
        assert!(!d.poll(t0 + Duration::from_millis(70)));
    }

    #[test]
    fn test_retrigger_extends_deadline() {
        let mut d = Debouncer::new(Duration::from_millis(50));
        let t0 = Instant::now();
        d.trigger(t0);
        d.trigger(t0 + Duration::from_millis(40));
        assert!(!d.poll(t0 + Duration::from_millis(60)));
        assert!(d.poll(t0 + Duration::from_millis(95)));
    }

    #[test]
    fn test_unarmed_never_fires() {
        let mut d = Debouncer::resize();
        assert!(!d.is_armed());
        assert!(!d.poll(Instant::now()));
    }
}
