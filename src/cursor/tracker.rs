//! Raw pointer state relay
//!
//! No smoothing happens here; this layer only mirrors what the event loop
//! reports. Smoothing is the renderer's job.

use egui::Pos2;

/// Continuously-updated pointer observables: latest raw position, whether an
/// interactive element is hovered, and whether the custom cursor should be
/// drawn at all.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    position: Pos2,
    hovering: bool,
    visible: bool,
    /// Latched on the first touch event; touch-primary devices never show
    /// the custom cursor.
    touch_seen: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            position: Pos2::ZERO,
            hovering: false,
            visible: false,
            touch_seen: false,
        }
    }

    /// Feed one frame of input. `raw` is the latest pointer position if the
    /// pointer is over the window; `focused` is window focus. The hover flag
    /// resets here and is re-accumulated by widgets during the frame.
    pub fn begin_frame(&mut self, raw: Option<Pos2>, focused: bool, any_touch: bool) {
        if any_touch {
            self.touch_seen = true;
        }
        if let Some(pos) = raw {
            self.position = pos;
        }
        self.visible = raw.is_some() && focused && !self.touch_seen;
        self.hovering = false;
    }

    /// Called by every interactive widget (links, buttons, cards, tags)
    /// after it draws; any hovered widget marks the frame hovering.
    pub fn note_interactive(&mut self, hovered: bool) {
        if hovered {
            self.hovering = true;
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// While false the renderer must draw nothing (no stale visuals)
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_mirrors_latest_sample() {
        let mut tracker = PointerTracker::new();
        tracker.begin_frame(Some(Pos2::new(10.0, 20.0)), true, false);
        assert_eq!(tracker.position(), Pos2::new(10.0, 20.0));
        tracker.begin_frame(Some(Pos2::new(30.0, 40.0)), true, false);
        assert_eq!(tracker.position(), Pos2::new(30.0, 40.0));
    }

    #[test]
    fn test_hover_accumulates_within_frame_and_resets() {
        let mut tracker = PointerTracker::new();
        tracker.begin_frame(Some(Pos2::ZERO), true, false);
        tracker.note_interactive(false);
        tracker.note_interactive(true);
        tracker.note_interactive(false);
        assert!(tracker.is_hovering());

        tracker.begin_frame(Some(Pos2::ZERO), true, false);
        assert!(!tracker.is_hovering());
    }

    #[test]
    fn test_invisible_when_pointer_leaves_window() {
        let mut tracker = PointerTracker::new();
        tracker.begin_frame(Some(Pos2::ZERO), true, false);
        assert!(tracker.is_visible());
        tracker.begin_frame(None, true, false);
        assert!(!tracker.is_visible());
    }

    #[test]
    fn test_invisible_when_window_unfocused() {
        let mut tracker = PointerTracker::new();
        tracker.begin_frame(Some(Pos2::ZERO), false, false);
        assert!(!tracker.is_visible());
    }

    #[test]
    fn test_touch_latches_invisible() {
        let mut tracker = PointerTracker::new();
        tracker.begin_frame(Some(Pos2::ZERO), true, true);
        assert!(!tracker.is_visible());
        // Touch devices stay hidden even if a synthetic pointer shows up later
        tracker.begin_frame(Some(Pos2::ZERO), true, false);
        assert!(!tracker.is_visible());
    }
}
