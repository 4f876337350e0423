use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

/// Length of the slide animation, during which further navigation is ignored.
pub const TRANSITION_MS: i64 = 500;
/// Time between autoplay advances.
pub const AUTOPLAY_INTERVAL_MS: i64 = 3000;
/// Minimum horizontal travel (px) for a gesture to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("Carousel needs at least one slide")]
    Empty,
    #[error("Slide {index} is out of range for a carousel of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Carousel timings must be positive")]
    InvalidTiming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    pub transition: TimeDelta,
    pub autoplay_interval: TimeDelta,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            transition: TimeDelta::milliseconds(TRANSITION_MS),
            autoplay_interval: TimeDelta::milliseconds(AUTOPLAY_INTERVAL_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning { until: DateTime<Utc> },
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved { from: usize, to: usize },
    /// Request resolved to the slide already shown (e.g. single-slide carousel).
    Unchanged,
    /// A transition was already in flight.
    Dropped,
}

impl Navigation {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Gesture {
    start_x: Option<f64>,
    current_x: Option<f64>,
}

/// Circular slide index with autoplay, swipe handling, and a guard that keeps
/// at most one transition in flight.
///
/// The controller never touches a clock or a timer itself. Every operation takes
/// the current time and the owner is expected to call [`CarouselController::poll`]
/// once [`CarouselController::next_deadline`] has passed.
#[derive(Debug, Clone)]
pub struct CarouselController {
    len: usize,
    current: usize,
    phase: Phase,
    autoplay: bool,
    autoplay_due: Option<DateTime<Utc>>,
    timing: CarouselTiming,
    gesture: Gesture,
}

impl CarouselController {
    pub fn new(len: usize, autoplay: bool, now: DateTime<Utc>) -> Result<Self, CarouselError> {
        Self::with_timing(len, autoplay, CarouselTiming::default(), now)
    }

    pub fn with_timing(
        len: usize,
        autoplay: bool,
        timing: CarouselTiming,
        now: DateTime<Utc>,
    ) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        if timing.transition <= TimeDelta::zero() || timing.autoplay_interval <= TimeDelta::zero()
        {
            return Err(CarouselError::InvalidTiming);
        }
        let mut controller = Self {
            len,
            current: 0,
            phase: Phase::Idle,
            autoplay,
            autoplay_due: None,
            timing,
            gesture: Gesture::default(),
        };
        controller.restart_autoplay(now);
        Ok(controller)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> Navigation {
        self.navigate(now, |i, len| (i + 1) % len)
    }

    pub fn previous(&mut self, now: DateTime<Utc>) -> Navigation {
        self.navigate(now, |i, len| (i + len - 1) % len)
    }

    pub fn jump_to(&mut self, index: usize, now: DateTime<Utc>) -> Result<Navigation, CarouselError> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.navigate(now, |_, _| index))
    }

    pub fn gesture_start(&mut self, x: f64) {
        self.gesture = Gesture {
            start_x: Some(x),
            current_x: None,
        };
    }

    pub fn gesture_move(&mut self, x: f64) {
        if self.gesture.start_x.is_some() {
            self.gesture.current_x = Some(x);
        }
    }

    /// Resolves the pending gesture into a swipe, if it travelled far enough.
    /// A gesture with no recorded movement is a tap and does nothing.
    pub fn gesture_end(&mut self, now: DateTime<Utc>) -> Navigation {
        let Gesture { start_x, current_x } = std::mem::take(&mut self.gesture);
        let (Some(start), Some(current)) = (start_x, current_x) else {
            return Navigation::Unchanged;
        };
        let delta = start - current;
        if delta > SWIPE_THRESHOLD {
            self.next(now)
        } else if delta < -SWIPE_THRESHOLD {
            self.previous(now)
        } else {
            Navigation::Unchanged
        }
    }

    /// Fires whatever deadlines have passed: first the end of the running
    /// transition, then an autoplay advance. Returns the autoplay outcome, if one ran.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<Navigation> {
        self.settle(now);
        match self.autoplay_due {
            Some(due) if due <= now => {
                let nav = self.next(now);
                // a dropped or no-op tick still has to re-arm the interval
                self.restart_autoplay(now);
                Some(nav)
            }
            _ => None,
        }
    }

    /// Earliest time at which [`CarouselController::poll`] has work to do.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        let transition_end = match self.phase {
            Phase::Transitioning { until } => Some(until),
            Phase::Idle => None,
        };
        match (transition_end, self.autoplay_due) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Releases all pending deadlines. Used when the owning widget unmounts.
    pub fn stop(&mut self) {
        self.autoplay = false;
        self.autoplay_due = None;
        self.phase = Phase::Idle;
        self.gesture = Gesture::default();
    }

    fn settle(&mut self, now: DateTime<Utc>) {
        if let Phase::Transitioning { until } = self.phase {
            if until <= now {
                self.phase = Phase::Idle;
            }
        }
    }

    fn navigate(
        &mut self,
        now: DateTime<Utc>,
        target: impl FnOnce(usize, usize) -> usize,
    ) -> Navigation {
        self.settle(now);
        if self.is_transitioning() {
            return Navigation::Dropped;
        }
        // any manual navigation that gets past the transition guard resets the clock
        self.restart_autoplay(now);
        let to = target(self.current, self.len);
        if to == self.current {
            return Navigation::Unchanged;
        }
        let from = self.current;
        self.current = to;
        self.phase = Phase::Transitioning {
            until: now + self.timing.transition,
        };
        Navigation::Moved { from, to }
    }

    fn restart_autoplay(&mut self, now: DateTime<Utc>) {
        self.autoplay_due = if self.autoplay && self.len > 1 {
            Some(now + self.timing.autoplay_interval)
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).expect("valid test timestamp")
    }

    fn manual(len: usize) -> CarouselController {
        CarouselController::new(len, false, at(0)).expect("valid carousel")
    }

    #[test]
    fn test_rejects_empty_carousel() {
        assert_eq!(
            CarouselController::new(0, true, at(0)).unwrap_err(),
            CarouselError::Empty
        );
    }

    #[test]
    fn test_rejects_non_positive_timing() {
        let timing = CarouselTiming {
            transition: TimeDelta::zero(),
            autoplay_interval: TimeDelta::milliseconds(AUTOPLAY_INTERVAL_MS),
        };
        assert_eq!(
            CarouselController::with_timing(3, true, timing, at(0)).unwrap_err(),
            CarouselError::InvalidTiming
        );
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut c = manual(3);
        assert_eq!(c.previous(at(0)), Navigation::Moved { from: 0, to: 2 });
        assert_eq!(c.next(at(600)), Navigation::Moved { from: 2, to: 0 });
        assert_eq!(c.next(at(1200)), Navigation::Moved { from: 0, to: 1 });
    }

    #[test]
    fn test_navigation_dropped_while_transitioning() {
        let mut c = manual(4);
        assert!(c.next(at(0)).moved());
        assert_eq!(c.phase(), Phase::Transitioning { until: at(500) });

        assert_eq!(c.next(at(100)), Navigation::Dropped);
        assert_eq!(c.previous(at(200)), Navigation::Dropped);
        assert_eq!(c.jump_to(3, at(300)), Ok(Navigation::Dropped));
        assert_eq!(c.current(), 1);
        // the window is not extended by dropped requests
        assert_eq!(c.phase(), Phase::Transitioning { until: at(500) });

        assert_eq!(c.poll(at(500)), None);
        assert!(!c.is_transitioning());
        assert!(c.next(at(500)).moved());
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_transition_settles_without_poll() {
        let mut c = manual(4);
        c.next(at(0));
        // the timeout may not have fired yet when the next click arrives
        assert!(c.next(at(520)).moved());
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_jump_to_out_of_range_is_rejected() {
        let mut c = manual(4);
        c.jump_to(2, at(0)).expect("in range");
        assert_eq!(
            c.jump_to(4, at(1000)),
            Err(CarouselError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_jump_to_current_is_noop() {
        let mut c = manual(4);
        assert_eq!(c.jump_to(0, at(0)), Ok(Navigation::Unchanged));
        assert!(!c.is_transitioning());
    }

    #[test]
    fn test_jump_to_current_restarts_autoplay_clock() {
        let mut c = CarouselController::new(3, true, at(0)).expect("valid carousel");
        assert_eq!(c.jump_to(0, at(2900)), Ok(Navigation::Unchanged));
        assert_eq!(c.next_deadline(), Some(at(5900)));
        assert_eq!(c.poll(at(3000)), None);
        assert_eq!(c.current(), 0);
        assert_eq!(c.poll(at(5900)), Some(Navigation::Moved { from: 0, to: 1 }));
    }

    #[test]
    fn test_single_slide_accepts_everything() {
        let mut c = CarouselController::new(1, true, at(0)).expect("valid carousel");
        assert_eq!(c.next(at(0)), Navigation::Unchanged);
        assert_eq!(c.previous(at(0)), Navigation::Unchanged);
        assert_eq!(c.jump_to(0, at(0)), Ok(Navigation::Unchanged));
        assert_eq!(c.current(), 0);
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn test_autoplay_advances_on_interval() {
        let mut c = CarouselController::new(3, true, at(0)).expect("valid carousel");
        assert_eq!(c.next_deadline(), Some(at(3000)));
        assert_eq!(c.poll(at(2999)), None);
        assert_eq!(c.poll(at(3000)), Some(Navigation::Moved { from: 0, to: 1 }));
        assert_eq!(c.next_deadline(), Some(at(3500)));
        assert_eq!(c.poll(at(3500)), None);
        assert_eq!(c.next_deadline(), Some(at(6000)));
        assert_eq!(c.poll(at(6000)), Some(Navigation::Moved { from: 1, to: 2 }));
    }

    #[test]
    fn test_manual_navigation_restarts_autoplay_clock() {
        let mut c = CarouselController::new(3, true, at(0)).expect("valid carousel");
        c.next(at(2500));
        c.poll(at(3000));
        // the first 3000ms tick no longer fires
        assert_eq!(c.current(), 1);
        assert_eq!(c.poll(at(5499)), None);
        assert_eq!(c.poll(at(5500)), Some(Navigation::Moved { from: 1, to: 2 }));
    }

    #[test]
    fn test_dropped_request_does_not_restart_autoplay() {
        let mut c = CarouselController::new(3, true, at(0)).expect("valid carousel");
        c.next(at(1000));
        assert_eq!(c.next(at(1200)), Navigation::Dropped);
        assert_eq!(c.poll(at(4000)), Some(Navigation::Moved { from: 1, to: 2 }));
    }

    #[test]
    fn test_stop_clears_deadlines() {
        let mut c = CarouselController::new(3, true, at(0)).expect("valid carousel");
        c.next(at(0));
        c.stop();
        assert_eq!(c.next_deadline(), None);
        assert_eq!(c.poll(at(10_000)), None);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_swipe_left_advances() {
        let mut c = manual(4);
        c.gesture_start(200.0);
        c.gesture_move(100.0);
        assert_eq!(c.gesture_end(at(0)), Navigation::Moved { from: 0, to: 1 });
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_swipe_right_wraps_backward() {
        let mut c = manual(4);
        c.gesture_start(100.0);
        c.gesture_move(200.0);
        assert_eq!(c.gesture_end(at(0)), Navigation::Moved { from: 0, to: 3 });
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn test_short_swipe_and_tap_do_nothing() {
        let mut c = manual(4);
        c.gesture_start(100.0);
        c.gesture_move(140.0);
        assert_eq!(c.gesture_end(at(0)), Navigation::Unchanged);

        // coordinates from the previous gesture must not leak into a tap
        c.gesture_start(300.0);
        assert_eq!(c.gesture_end(at(0)), Navigation::Unchanged);
        assert_eq!(c.gesture_end(at(0)), Navigation::Unchanged);
        assert_eq!(c.current(), 0);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Next,
        Previous,
        Jump(usize),
        Wait(i64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Next),
            Just(Op::Previous),
            (0usize..12).prop_map(Op::Jump),
            (0i64..4000).prop_map(Op::Wait),
        ]
    }

    proptest! {
        #[test]
        fn index_always_in_range(len in 1usize..10, autoplay in any::<bool>(), ops in prop::collection::vec(op(), 0..64)) {
            let mut c = CarouselController::new(len, autoplay, at(0)).expect("valid carousel");
            let mut now = 0;
            for op in ops {
                match op {
                    Op::Next => { c.next(at(now)); }
                    Op::Previous => { c.previous(at(now)); }
                    Op::Jump(i) => { let _ = c.jump_to(i, at(now)); }
                    Op::Wait(ms) => { now += ms; c.poll(at(now)); }
                }
                prop_assert!(c.current() < len);
            }
        }

        #[test]
        fn next_then_previous_restores_index(len in 1usize..10, start in 0usize..10) {
            let start = start % len;
            let mut c = manual(len);
            c.jump_to(start, at(0)).expect("in range");
            c.next(at(1000));
            c.previous(at(2000));
            prop_assert_eq!(c.current(), start);
        }

        #[test]
        fn out_of_range_jump_leaves_index(len in 1usize..10, start in 0usize..10, extra in 0usize..100) {
            let start = start % len;
            let mut c = manual(len);
            c.jump_to(start, at(0)).expect("in range");
            prop_assert!(c.jump_to(len + extra, at(1000)).is_err());
            prop_assert_eq!(c.current(), start);
        }

        #[test]
        fn requests_while_transitioning_change_nothing(len in 2usize..10, offset in 0i64..TRANSITION_MS, target in 0usize..10) {
            let mut c = manual(len);
            c.next(at(0));
            let phase = c.phase();
            let index = c.current();
            prop_assert_eq!(c.next(at(offset)), Navigation::Dropped);
            prop_assert_eq!(c.previous(at(offset)), Navigation::Dropped);
            if target < len {
                prop_assert_eq!(c.jump_to(target, at(offset)), Ok(Navigation::Dropped));
            }
            prop_assert_eq!(c.current(), index);
            prop_assert_eq!(c.phase(), phase);
        }
    }
}
