use crate::section::SectionId;

/// Scroll offset past which the header switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// A section becomes active once its top edge is within this distance of the viewport top.
pub const ACTIVE_SECTION_OFFSET: f64 = 150.0;
/// Height reserved for the fixed header when jumping to an anchor.
pub const ANCHOR_OFFSET: f64 = 80.0;
/// Background parallax speed relative to the page scroll.
pub const PARALLAX_FACTOR: f64 = 0.08;

/// Page-wide scroll state: the offset, the compact-header flag, and the section
/// currently highlighted in the navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    scroll_y: f64,
    past_threshold: bool,
    active: SectionId,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            past_threshold: false,
            active: SectionId::Home,
        }
    }
}

impl ScrollPosition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past_threshold
    }

    pub fn active_section(&self) -> SectionId {
        self.active
    }

    /// Recomputes derived state for a new scroll offset.
    ///
    /// `top_of` reports a section's bounding top relative to the viewport, or
    /// `None` if the section is not in the document. Sections are scanned from
    /// the last declared to the first; the first whose top has reached
    /// [`ACTIVE_SECTION_OFFSET`] wins. When none has, the previous active section
    /// is kept.
    pub fn on_scroll<F>(&mut self, scroll_y: f64, top_of: F)
    where
        F: Fn(SectionId) -> Option<f64>,
    {
        self.scroll_y = scroll_y;
        self.past_threshold = scroll_y > SCROLLED_THRESHOLD;
        if let Some(active) = SectionId::ALL
            .into_iter()
            .rev()
            .find(|id| top_of(*id).is_some_and(|top| top <= ACTIVE_SECTION_OFFSET))
        {
            self.active = active;
        }
    }
}

/// Document offset to scroll to so that a section sits just below the fixed header.
pub fn anchor_scroll_target(offset_top: f64) -> f64 {
    (offset_top - ANCHOR_OFFSET).max(0.0)
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(tops: [Option<f64>; 5]) -> impl Fn(SectionId) -> Option<f64> {
        move |id| {
            let i = SectionId::ALL
                .iter()
                .position(|s| *s == id)
                .expect("known section");
            tops[i]
        }
    }

    #[test]
    fn test_header_threshold() {
        let mut pos = ScrollPosition::new();
        pos.on_scroll(50.0, |_| None);
        assert!(!pos.is_past_threshold());
        pos.on_scroll(50.5, |_| None);
        assert!(pos.is_past_threshold());
        assert_eq!(pos.scroll_y(), 50.5);
    }

    #[test]
    fn test_last_qualifying_section_wins() {
        let mut pos = ScrollPosition::new();
        pos.on_scroll(
            2400.0,
            layout([
                Some(-2400.0),
                Some(-1600.0),
                Some(-900.0),
                Some(100.0),
                Some(800.0),
            ]),
        );
        assert_eq!(pos.active_section(), SectionId::Projects);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let mut pos = ScrollPosition::new();
        pos.on_scroll(
            700.0,
            layout([Some(-700.0), Some(150.0), Some(900.0), None, None]),
        );
        assert_eq!(pos.active_section(), SectionId::About);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let mut pos = ScrollPosition::new();
        pos.on_scroll(
            3000.0,
            layout([Some(-3000.0), Some(-2000.0), Some(10.0), None, None]),
        );
        assert_eq!(pos.active_section(), SectionId::Skills);
    }

    #[test]
    fn test_keeps_previous_when_nothing_qualifies() {
        let mut pos = ScrollPosition::new();
        pos.on_scroll(
            1500.0,
            layout([Some(-1500.0), Some(-700.0), Some(40.0), Some(900.0), None]),
        );
        assert_eq!(pos.active_section(), SectionId::Skills);
        pos.on_scroll(0.0, |_| Some(400.0));
        assert_eq!(pos.active_section(), SectionId::Skills);
        assert!(!pos.is_past_threshold());
    }

    #[test]
    fn test_anchor_target_and_parallax() {
        assert_eq!(anchor_scroll_target(1000.0), 920.0);
        assert_eq!(anchor_scroll_target(30.0), 0.0);
        assert_eq!(parallax_offset(500.0), 40.0);
    }
}
