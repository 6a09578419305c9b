//! Scroll-driven reveal, parallax, and counter animation
//!
//! Reveal is a declarative mapping from section to a "revealed" flag driven
//! by viewport intersection. Once a section reveals it stays revealed;
//! scrolling back out does not hide it again.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use egui::Rect;

use crate::constants::reveal::{BOTTOM_MARGIN, PARALLAX_FACTOR, THRESHOLD};
use crate::easing::ease_out_cubic;
use crate::types::SectionId;

/// Fraction of `section` visible inside `viewport` after insetting the
/// viewport bottom by `bottom_margin` (sections barely peeking over the
/// fold don't count).
pub fn visible_fraction(section: Rect, viewport: Rect, bottom_margin: f32) -> f32 {
    if section.height() <= 0.0 {
        return 0.0;
    }
    let clipped_bottom = viewport.bottom() - bottom_margin;
    let top = section.top().max(viewport.top());
    let bottom = section.bottom().min(clipped_bottom);
    ((bottom - top).max(0.0) / section.height()).min(1.0)
}

/// Hero parallax: content translates by half the scroll offset and fades
/// out across one viewport height.
pub fn hero_parallax(scroll: f32, viewport_height: f32) -> (f32, f32) {
    if viewport_height <= 0.0 || scroll >= viewport_height {
        return (0.0, 0.0);
    }
    let offset = scroll * PARALLAX_FACTOR;
    let opacity = (1.0 - scroll / viewport_height).clamp(0.0, 1.0);
    (offset, opacity)
}

#[derive(Debug, Default)]
pub struct RevealState {
    revealed: HashMap<SectionId, Instant>,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a section's on-screen rect for this frame. Latches the
    /// section revealed once its visible fraction crosses the threshold and
    /// returns whether it is revealed.
    pub fn observe(&mut self, id: SectionId, section: Rect, viewport: Rect, now: Instant) -> bool {
        if self.revealed.contains_key(&id) {
            return true;
        }
        if visible_fraction(section, viewport, BOTTOM_MARGIN) >= THRESHOLD {
            self.revealed.insert(id, now);
            return true;
        }
        false
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed.contains_key(&id)
    }

    /// Eased 0..=1 entrance progress; 0 while hidden, 1 once the reveal
    /// animation has run its course (immediately, under zeroed durations).
    pub fn progress(&self, id: SectionId, now: Instant, duration: Duration) -> f32 {
        let Some(&at) = self.revealed.get(&id) else {
            return 0.0;
        };
        if duration.is_zero() {
            return 1.0;
        }
        let t = now.saturating_duration_since(at).as_secs_f32() / duration.as_secs_f32();
        ease_out_cubic(t)
    }

    /// Forget everything; used when the profile swap replaces the page
    /// content under the overlay so sections animate in fresh.
    pub fn reset(&mut self) {
        self.revealed.clear();
    }
}

/// Animated count-up for a headline statistic, armed once when its section
/// first reveals.
#[derive(Debug, Clone, Copy)]
pub struct Counter {
    target: u32,
    armed_at: Option<Instant>,
}

impl Counter {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            armed_at: None,
        }
    }

    /// Start counting; later calls are ignored
    pub fn arm(&mut self, now: Instant) {
        if self.armed_at.is_none() {
            self.armed_at = Some(now);
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Current display value: 0 before arming, the target at or after
    /// `duration`, eased in between.
    pub fn value(&self, now: Instant, duration: Duration) -> u32 {
        let Some(armed_at) = self.armed_at else {
            return 0;
        };
        if duration.is_zero() {
            return self.target;
        }
        let t = now.saturating_duration_since(armed_at).as_secs_f32() / duration.as_secs_f32();
        if t >= 1.0 {
            return self.target;
        }
        (self.target as f32 * ease_out_cubic(t)).floor() as u32
    }
}
