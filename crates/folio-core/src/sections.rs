//! Active-section tracking for the navigation links.
//!
//! The section with the greatest visible ratio is highlighted; while a
//! click-initiated smooth scroll is in flight, highlighting is locked to
//! the clicked target so intermediate sections do not flicker through.

use std::time::{Duration, Instant};

const NAV_LOCK: Duration = Duration::from_millis(1200);

/// Tracks which résumé section is "active" for nav highlighting
#[derive(Debug, Clone)]
pub struct SectionTracker {
    ratios: Vec<f32>,
    active: usize,
    lock_until: Option<Instant>,
}

impl SectionTracker {
    pub fn new(len: usize) -> Self {
        Self {
            ratios: vec![0.0; len],
            active: 0,
            lock_until: None,
        }
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Record the visible fraction of section `i` for this frame
    pub fn set_ratio(&mut self, i: usize, ratio: f32) {
        if let Some(slot) = self.ratios.get_mut(i) {
            *slot = ratio;
        }
    }

    /// A nav link was clicked: highlight its target immediately and hold
    /// it while the smooth scroll runs
    pub fn activate_by_nav(&mut self, i: usize, now: Instant) {
        if i < self.ratios.len() {
            self.active = i;
            self.lock_until = Some(now + NAV_LOCK);
        }
    }

    fn locked(&self, now: Instant) -> bool {
        self.lock_until.is_some_and(|until| now < until)
    }

    /// Rank sections by visible ratio and update the active one
    pub fn update(&mut self, now: Instant) {
        if self.locked(now) {
            return;
        }
        let best = self
            .ratios
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1));
        if let Some((best, &ratio)) = best {
            if ratio > 0.0 {
                self.active = best;
            }
        }
    }

    /// Fallback ranking for frames where no ratio registered: the section
    /// whose top edge sits nearest the viewport middle wins
    pub fn update_from_distances(&mut self, now: Instant, distances: &[f32]) {
        if self.locked(now) {
            return;
        }
        let best = distances
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1));
        if let Some((best, _)) = best {
            if best < self.ratios.len() {
                self.active = best;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_ratio_wins() {
        let mut t = SectionTracker::new(3);
        let now = Instant::now();
        t.set_ratio(0, 0.2);
        t.set_ratio(1, 0.7);
        t.set_ratio(2, 0.1);
        t.update(now);
        assert_eq!(t.active(), 1);
    }

    #[test]
    fn test_nav_lock_holds_through_scroll() {
        let mut t = SectionTracker::new(3);
        let now = Instant::now();
        t.activate_by_nav(2, now);
        t.set_ratio(0, 0.9);
        t.update(now + Duration::from_millis(500));
        assert_eq!(t.active(), 2);

        // Lock expires after 1200ms
        t.update(now + Duration::from_millis(1300));
        assert_eq!(t.active(), 0);
    }

    #[test]
    fn test_distance_fallback_picks_nearest() {
        let mut t = SectionTracker::new(3);
        let now = Instant::now();
        t.update_from_distances(now, &[800.0, 120.0, 400.0]);
        assert_eq!(t.active(), 1);
    }

    #[test]
    fn test_all_zero_ratios_keep_previous_active() {
        let mut t = SectionTracker::new(2);
        let now = Instant::now();
        t.set_ratio(1, 0.5);
        t.update(now);
        t.set_ratio(1, 0.0);
        t.update(now);
        assert_eq!(t.active(), 1);
    }
}
