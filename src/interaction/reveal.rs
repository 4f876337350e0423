use std::collections::HashMap;

use crate::section::SectionId;

/// Fraction of a section that must be visible before its entrance animation plays.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Something holding a platform observation alive (e.g. an intersection observer).
/// Releasing it stops the observation.
pub trait Observation {
    fn release(self);
}

impl<F: FnOnce()> Observation for F {
    fn release(self) {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    pub revealed: bool,
    pub threshold: f64,
}

/// Play-once reveal flags for every observed section.
///
/// A section becomes revealed the first time it intersects the viewport and
/// stays revealed afterwards, including across detach/attach cycles.
pub struct RevealTracker<H: Observation> {
    sections: HashMap<SectionId, RevealState>,
    observations: HashMap<SectionId, H>,
}

impl<H: Observation> Default for RevealTracker<H> {
    fn default() -> Self {
        Self {
            sections: HashMap::new(),
            observations: HashMap::new(),
        }
    }
}

impl<H: Observation> RevealTracker<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `section`. `observation` is `None` when the element is
    /// not mounted yet, in which case nothing happens.
    pub fn attach(&mut self, section: SectionId, observation: Option<H>, threshold: f64) {
        let Some(observation) = observation else {
            return;
        };
        let threshold = threshold.clamp(0.0, 1.0);
        self.sections
            .entry(section)
            .and_modify(|s| s.threshold = threshold)
            .or_insert(RevealState {
                revealed: false,
                threshold,
            });
        if let Some(previous) = self.observations.insert(section, observation) {
            previous.release();
        }
    }

    /// Feeds an intersection change. Returns `true` only on the event that
    /// reveals the section.
    pub fn on_intersect(&mut self, section: SectionId, is_intersecting: bool) -> bool {
        if !self.observations.contains_key(&section) {
            return false;
        }
        match self.sections.get_mut(&section) {
            Some(state) if is_intersecting && !state.revealed => {
                state.revealed = true;
                true
            }
            _ => false,
        }
    }

    pub fn detach(&mut self, section: SectionId) {
        if let Some(observation) = self.observations.remove(&section) {
            observation.release();
        }
    }

    pub fn is_attached(&self, section: SectionId) -> bool {
        self.observations.contains_key(&section)
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.sections.get(&section).is_some_and(|s| s.revealed)
    }

    pub fn state(&self, section: SectionId) -> Option<RevealState> {
        self.sections.get(&section).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    type Stop = Box<dyn FnOnce()>;

    fn counting_stop(count: &Rc<Cell<usize>>) -> Option<Stop> {
        let count = count.clone();
        Some(Box::new(move || count.set(count.get() + 1)))
    }

    #[test]
    fn test_attach_without_element_is_noop() {
        let mut tracker = RevealTracker::<Stop>::new();
        tracker.attach(SectionId::About, None, REVEAL_THRESHOLD);
        assert!(!tracker.is_attached(SectionId::About));
        assert!(!tracker.on_intersect(SectionId::About, true));
        assert!(!tracker.is_revealed(SectionId::About));
    }

    #[test]
    fn test_first_intersection_reveals() {
        let stops = Rc::new(Cell::new(0));
        let mut tracker = RevealTracker::new();
        tracker.attach(SectionId::Skills, counting_stop(&stops), REVEAL_THRESHOLD);

        assert!(!tracker.on_intersect(SectionId::Skills, false));
        assert!(tracker.on_intersect(SectionId::Skills, true));
        assert!(!tracker.on_intersect(SectionId::Skills, true));
        assert!(!tracker.on_intersect(SectionId::Skills, false));
        assert!(tracker.is_revealed(SectionId::Skills));
        assert!(!tracker.is_revealed(SectionId::Projects));
    }

    #[test]
    fn test_detach_is_idempotent() {
        let stops = Rc::new(Cell::new(0));
        let mut tracker = RevealTracker::new();
        tracker.detach(SectionId::Contact);

        tracker.attach(SectionId::Contact, counting_stop(&stops), REVEAL_THRESHOLD);
        tracker.detach(SectionId::Contact);
        tracker.detach(SectionId::Contact);
        assert_eq!(stops.get(), 1);
        assert!(!tracker.is_attached(SectionId::Contact));
    }

    #[test]
    fn test_events_after_detach_are_ignored() {
        let stops = Rc::new(Cell::new(0));
        let mut tracker = RevealTracker::new();
        tracker.attach(SectionId::About, counting_stop(&stops), REVEAL_THRESHOLD);
        tracker.detach(SectionId::About);
        assert!(!tracker.on_intersect(SectionId::About, true));
        assert!(!tracker.is_revealed(SectionId::About));
    }

    #[test]
    fn test_reattach_keeps_reveal_and_releases_old_observation() {
        let stops = Rc::new(Cell::new(0));
        let mut tracker = RevealTracker::new();
        tracker.attach(SectionId::About, counting_stop(&stops), REVEAL_THRESHOLD);
        tracker.on_intersect(SectionId::About, true);
        tracker.attach(SectionId::About, counting_stop(&stops), 0.5);
        assert_eq!(stops.get(), 1);
        assert_eq!(
            tracker.state(SectionId::About),
            Some(RevealState {
                revealed: true,
                threshold: 0.5
            })
        );
    }

    #[test]
    fn test_threshold_is_clamped() {
        let stops = Rc::new(Cell::new(0));
        let mut tracker = RevealTracker::new();
        tracker.attach(SectionId::Home, counting_stop(&stops), 4.0);
        assert_eq!(
            tracker.state(SectionId::Home).map(|s| s.threshold),
            Some(1.0)
        );
    }

    proptest! {
        #[test]
        fn reveal_never_reverts(events in prop::collection::vec(any::<bool>(), 1..64)) {
            let mut tracker = RevealTracker::new();
            tracker.attach(SectionId::Projects, Some(|| {}), REVEAL_THRESHOLD);
            let mut seen = false;
            for visible in events {
                tracker.on_intersect(SectionId::Projects, visible);
                seen |= visible;
                prop_assert_eq!(tracker.is_revealed(SectionId::Projects), seen);
            }
        }
    }
}
