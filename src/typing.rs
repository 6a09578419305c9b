//! Hero headline type/delete loop
//!
//! Cycles through the active profile's role titles: type at 100 ms/char,
//! hold the full title for 2 s, delete at 50 ms/char, pause 500 ms, then
//! start on the next title. Clock-parameterized and stepped determinstically
//! from phase deadlines, so a slow frame catches up without drift.

use std::time::{Duration, Instant};

use crate::constants::typing::{ADVANCE_MS, DELETE_MS, HOLD_MS, TYPE_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
    Advancing,
}

impl Phase {
    fn step(self) -> Duration {
        let ms = match self {
            Phase::Typing => TYPE_MS,
            Phase::Holding => HOLD_MS,
            Phase::Deleting => DELETE_MS,
            Phase::Advancing => ADVANCE_MS,
        };
        Duration::from_millis(ms)
    }
}

#[derive(Debug)]
pub struct TypingTicker {
    titles: Vec<String>,
    index: usize,
    shown_chars: usize,
    phase: Phase,
    /// Deadline bookkeeping: advanced by whole steps, never reset to `now`
    phase_started: Instant,
    /// Disabled under reduced motion; `line` then returns the full title
    enabled: bool,
}

impl TypingTicker {
    pub fn new(titles: &[&str], enabled: bool, now: Instant) -> Self {
        Self {
            titles: titles.iter().map(|s| s.to_string()).collect(),
            index: 0,
            shown_chars: 0,
            phase: Phase::Typing,
            phase_started: now,
            enabled,
        }
    }

    /// Swap in a new title list (profile change) and start over
    pub fn reset(&mut self, titles: &[&str], now: Instant) {
        self.titles = titles.iter().map(|s| s.to_string()).collect();
        self.index = 0;
        self.shown_chars = 0;
        self.phase = Phase::Typing;
        self.phase_started = now;
    }

    fn current_title_chars(&self) -> usize {
        self.titles
            .get(self.index)
            .map(|t| t.chars().count())
            .unwrap_or(0)
    }

    /// Advance the machine to `now`, applying as many whole steps as have
    /// elapsed.
    pub fn tick(&mut self, now: Instant) {
        if !self.enabled || self.titles.is_empty() {
            return;
        }
        loop {
            let step = self.phase.step();
            if now.saturating_duration_since(self.phase_started) < step {
                return;
            }
            self.phase_started += step;
            match self.phase {
                Phase::Typing => {
                    self.shown_chars += 1;
                    if self.shown_chars >= self.current_title_chars() {
                        self.phase = Phase::Holding;
                    }
                }
                Phase::Holding => {
                    self.phase = Phase::Deleting;
                }
                Phase::Deleting => {
                    self.shown_chars = self.shown_chars.saturating_sub(1);
                    if self.shown_chars == 0 {
                        self.phase = Phase::Advancing;
                    }
                }
                Phase::Advancing => {
                    self.index = (self.index + 1) % self.titles.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }

    /// The headline prefix to display right now
    pub fn line(&self) -> String {
        let Some(title) = self.titles.get(self.index) else {
            return String::new();
        };
        if !self.enabled {
            return title.clone();
        }
        title.chars().take(self.shown_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker_at(t0: Instant) -> TypingTicker {
        TypingTicker::new(&["Rust Engineer", "Writer"], true, t0)
    }

    #[test]
    fn test_types_one_char_per_interval() {
        let t0 = Instant::now();
        let mut ticker = ticker_at(t0);
        ticker.tick(t0 + Duration::from_millis(99));
        assert_eq!(ticker.line(), "");
        ticker.tick(t0 + Duration::from_millis(100));
        assert_eq!(ticker.line(), "R");
        ticker.tick(t0 + Duration::from_millis(350));
        assert_eq!(ticker.line(), "Rus");
    }

    #[test]
    fn test_holds_full_title_before_deleting() {
        let t0 = Instant::now();
        let mut ticker = ticker_at(t0);
        // "Rust Engineer" is 13 chars: fully typed at 1300 ms
        let typed = Duration::from_millis(13 * 100);
        ticker.tick(t0 + typed);
        assert_eq!(ticker.line(), "Rust Engineer");

        // Still holding just before the 2000 ms hold elapses
        ticker.tick(t0 + typed + Duration::from_millis(1999));
        assert_eq!(ticker.line(), "Rust Engineer");

        // First delete step lands 2000 + 50 ms after the hold began
        ticker.tick(t0 + typed + Duration::from_millis(2050));
        assert_eq!(ticker.line(), "Rust Enginee");
    }

    #[test]
    fn test_advances_to_next_title_after_pause() {
        let t0 = Instant::now();
        let mut ticker = ticker_at(t0);
        // Full cycle for title 0: type 1300, hold 2000, delete 650, pause 500
        let cycle = Duration::from_millis(1300 + 2000 + 13 * 50 + 500);
        ticker.tick(t0 + cycle + Duration::from_millis(100));
        assert_eq!(ticker.line(), "W");
    }

    #[test]
    fn test_wraps_around_title_list() {
        let t0 = Instant::now();
        let mut ticker = TypingTicker::new(&["ab", "cd"], true, t0);
        // One full cycle per title: 2*100 + 2000 + 2*50 + 500 = 2800 ms
        ticker.tick(t0 + Duration::from_millis(2 * 2800 + 100));
        assert_eq!(ticker.line(), "a");
    }

    #[test]
    fn test_disabled_shows_full_title_statically() {
        let t0 = Instant::now();
        let mut ticker = TypingTicker::new(&["Rust Engineer"], false, t0);
        ticker.tick(t0 + Duration::from_secs(10));
        assert_eq!(ticker.line(), "Rust Engineer");
    }

    #[test]
    fn test_reset_restarts_with_new_titles() {
        let t0 = Instant::now();
        let mut ticker = ticker_at(t0);
        ticker.tick(t0 + Duration::from_millis(500));
        ticker.reset(&["Copywriter"], t0 + Duration::from_millis(500));
        assert_eq!(ticker.line(), "");
        ticker.tick(t0 + Duration::from_millis(600));
        assert_eq!(ticker.line(), "C");
    }

    #[test]
    fn test_empty_title_list_is_inert() {
        let t0 = Instant::now();
        let mut ticker = TypingTicker::new(&[], true, t0);
        ticker.tick(t0 + Duration::from_secs(5));
        assert_eq!(ticker.line(), "");
    }
}
