use std::time::Duration;

pub const START_DELAY: Duration = Duration::from_millis(1000);
pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);
pub const ERASE_DELAY: Duration = Duration::from_millis(50);
pub const NEXT_TITLE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Erasing,
}

/// Types out each title a character at a time, holds it, erases it, then moves
/// on to the next title, forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    titles: &'static [&'static str],
    title: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(titles: &'static [&'static str]) -> Self {
        Self {
            titles,
            title: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The part of the current title on screen.
    pub fn visible(&self) -> &'static str {
        let Some(title) = self.titles.get(self.title) else {
            return "";
        };
        match title.char_indices().nth(self.shown) {
            Some((end, _)) => &title[..end],
            None => title,
        }
    }

    /// Advances one step and returns how long to wait before the next one.
    pub fn tick(&mut self) -> Duration {
        let Some(title) = self.titles.get(self.title) else {
            return HOLD_DELAY;
        };
        match self.phase {
            Phase::Typing if self.shown < title.chars().count() => {
                self.shown += 1;
                TYPE_DELAY
            }
            Phase::Typing => {
                self.phase = Phase::Erasing;
                HOLD_DELAY
            }
            Phase::Erasing if self.shown > 0 => {
                self.shown -= 1;
                ERASE_DELAY
            }
            Phase::Erasing => {
                self.title = (self.title + 1) % self.titles.len();
                self.phase = Phase::Typing;
                NEXT_TITLE_DELAY
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TITLES: &[&str] = &["Dev", "Ü!"];

    #[test]
    fn test_types_holds_erases_and_cycles() {
        let mut tw = Typewriter::new(TITLES);
        assert_eq!(tw.visible(), "");

        let delays = (0..3).map(|_| tw.tick()).collect::<Vec<_>>();
        assert_eq!(delays, vec![TYPE_DELAY; 3]);
        assert_eq!(tw.visible(), "Dev");

        assert_eq!(tw.tick(), HOLD_DELAY);
        assert_eq!(tw.phase(), Phase::Erasing);

        assert_eq!(tw.tick(), ERASE_DELAY);
        assert_eq!(tw.visible(), "De");
        tw.tick();
        tw.tick();
        assert_eq!(tw.visible(), "");

        assert_eq!(tw.tick(), NEXT_TITLE_DELAY);
        assert_eq!(tw.phase(), Phase::Typing);
        tw.tick();
        assert_eq!(tw.visible(), "Ü");
    }

    #[test]
    fn test_wraps_to_first_title() {
        let mut tw = Typewriter::new(TITLES);
        // Dev: 3 typed + hold + 3 erased + advance; Ü!: 2 typed + hold + 2 erased + advance
        for _ in 0..(3 + 1 + 3 + 1 + 2 + 1 + 2 + 1) {
            tw.tick();
        }
        tw.tick();
        assert_eq!(tw.visible(), "D");
    }

    #[test]
    fn test_no_titles() {
        let mut tw = Typewriter::new(&[]);
        assert_eq!(tw.tick(), HOLD_DELAY);
        assert_eq!(tw.visible(), "");
    }
}
