//! Custom cursor subsystem: spring-damped dot/ring pair, fading trail, and
//! click ripples, painted on the topmost layer.

mod spring;
mod tracker;
mod trail;

pub use spring::{Spring, Spring2};
pub use tracker::PointerTracker;
pub use trail::{TrailBuffer, TrailSegment};

use std::time::{Duration, Instant};

use egui::{Color32, Id, LayerId, Order, Pos2, Stroke};

use crate::constants::cursor::*;
use crate::constants::hover::SCALE_MS;
use crate::easing::ease_out_cubic;

#[derive(Debug, Clone, Copy)]
pub struct Ripple {
    pub pos: Pos2,
    pub spawned_at: Instant,
}

/// Consumer of [`PointerTracker`]; holds everything with a lifetime longer
/// than one frame (spring state, trail buffer, live ripples).
pub struct CursorRenderer {
    dot: Spring2,
    ring: Spring2,
    trail: TrailBuffer,
    ripples: Vec<Ripple>,
    ripple_lifetime: Duration,
    /// Springs snap to the first observed position instead of flying in
    /// from the origin.
    primed: bool,
}

impl CursorRenderer {
    pub fn new() -> Self {
        Self {
            dot: Spring2::new(DOT_STIFFNESS, DOT_DAMPING, DOT_MASS),
            ring: Spring2::new(RING_STIFFNESS, RING_DAMPING, RING_MASS),
            trail: TrailBuffer::new(),
            ripples: Vec::new(),
            ripple_lifetime: Duration::from_millis(RIPPLE_LIFETIME_MS),
            primed: false,
        }
    }

    /// Advance springs, trail, and ripple lifetimes by one frame
    pub fn tick(&mut self, tracker: &PointerTracker, dt: f32, now: Instant) {
        self.expire_ripples(now);

        if !tracker.is_visible() {
            // Nothing may linger while hidden; re-prime on return so the
            // visuals reappear at the pointer, not where they left off.
            self.trail.clear();
            self.primed = false;
            return;
        }

        let target = tracker.position();
        if !self.primed {
            self.dot.snap_to(target);
            self.ring.snap_to(target);
            self.primed = true;
        }
        self.dot.set_target(target);
        self.ring.set_target(target);
        self.dot.update(dt);
        self.ring.update(dt);
        self.trail.push(target, now);
    }

    /// Ripples run on their own coarse fixed-delay lifecycle, independent of
    /// the frame-driven trail pruning.
    pub fn spawn_ripple(&mut self, pos: Pos2, now: Instant) {
        self.ripples.push(Ripple {
            pos,
            spawned_at: now,
        });
    }

    pub fn expire_ripples(&mut self, now: Instant) {
        let lifetime = self.ripple_lifetime;
        self.ripples
            .retain(|r| now.saturating_duration_since(r.spawned_at) < lifetime);
    }

    pub fn active_ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    /// True while any part of the cursor is still moving
    pub fn animating(&self) -> bool {
        !self.ripples.is_empty()
            || !self.trail.is_empty()
            || !self.dot.settled()
            || !self.ring.settled()
    }

    /// Paint trail, ripples, dot and ring above every other layer. Renders
    /// nothing while the tracker reports the pointer invisible.
    pub fn paint(
        &self,
        ctx: &egui::Context,
        tracker: &PointerTracker,
        accent: Color32,
        now: Instant,
    ) {
        if !tracker.is_visible() {
            return;
        }
        let painter = ctx.layer_painter(LayerId::new(Order::Tooltip, Id::new("custom-cursor")));

        for segment in self.trail.segments(now) {
            let color = accent.gamma_multiply(segment.opacity * 0.6);
            painter.line_segment([segment.from, segment.to], Stroke::new(2.0, color));
        }

        for ripple in self.active_ripples() {
            let age = now.saturating_duration_since(ripple.spawned_at);
            let t = ease_out_cubic(age.as_secs_f32() / self.ripple_lifetime.as_secs_f32());
            let radius = RING_RADIUS + RIPPLE_SPREAD * t;
            let color = accent.gamma_multiply(1.0 - t);
            painter.circle_stroke(ripple.pos, radius, Stroke::new(1.5, color));
        }

        let hover_t = ctx.animate_bool_with_time(
            Id::new("cursor-hover-scale"),
            tracker.is_hovering(),
            Duration::from_millis(SCALE_MS).as_secs_f32(),
        );
        let scale = 1.0 + (HOVER_SCALE - 1.0) * hover_t;

        painter.circle_filled(self.dot.position(), DOT_RADIUS * scale, accent);
        painter.circle_stroke(
            self.ring.position(),
            RING_RADIUS * scale,
            Stroke::new(2.0, accent.gamma_multiply(0.6)),
        );
    }
}

impl Default for CursorRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_tracker(pos: Pos2) -> PointerTracker {
        let mut tracker = PointerTracker::new();
        tracker.begin_frame(Some(pos), true, false);
        tracker
    }

    #[test]
    fn test_ripple_lifecycle_boundaries() {
        let t0 = Instant::now();
        let mut cursor = CursorRenderer::new();
        cursor.spawn_ripple(Pos2::ZERO, t0);

        cursor.expire_ripples(t0 + Duration::from_millis(999));
        assert_eq!(cursor.active_ripples().len(), 1);

        cursor.expire_ripples(t0 + Duration::from_millis(1001));
        assert!(cursor.active_ripples().is_empty());
    }

    #[test]
    fn test_ripples_expire_independently() {
        let t0 = Instant::now();
        let mut cursor = CursorRenderer::new();
        cursor.spawn_ripple(Pos2::ZERO, t0);
        cursor.spawn_ripple(Pos2::ZERO, t0 + Duration::from_millis(500));

        cursor.expire_ripples(t0 + Duration::from_millis(1100));
        assert_eq!(cursor.active_ripples().len(), 1);
        cursor.expire_ripples(t0 + Duration::from_millis(1600));
        assert!(cursor.active_ripples().is_empty());
    }

    #[test]
    fn test_hidden_pointer_clears_trail() {
        let t0 = Instant::now();
        let mut cursor = CursorRenderer::new();
        let tracker = visible_tracker(Pos2::new(100.0, 100.0));
        cursor.tick(&tracker, 1.0 / 60.0, t0);
        assert!(!cursor.trail().is_empty());

        let mut hidden = PointerTracker::new();
        hidden.begin_frame(None, true, false);
        cursor.tick(&hidden, 1.0 / 60.0, t0 + Duration::from_millis(16));
        assert!(cursor.trail().is_empty());
    }

    #[test]
    fn test_first_tick_snaps_springs_to_pointer() {
        let t0 = Instant::now();
        let mut cursor = CursorRenderer::new();
        let tracker = visible_tracker(Pos2::new(640.0, 360.0));
        cursor.tick(&tracker, 1.0 / 60.0, t0);
        assert!(cursor.dot.position().distance(Pos2::new(640.0, 360.0)) < 1.0);
        assert!(cursor.ring.position().distance(Pos2::new(640.0, 360.0)) < 1.0);
    }

    #[test]
    fn test_animating_reflects_pending_work() {
        let t0 = Instant::now();
        let mut cursor = CursorRenderer::new();
        let tracker = visible_tracker(Pos2::new(0.0, 0.0));
        cursor.tick(&tracker, 1.0 / 60.0, t0);
        assert!(cursor.animating(), "fresh trail point should keep animating");

        // After the trail window passes with the pointer parked, everything
        // settles.
        let later = t0 + Duration::from_millis(400);
        let mut parked = cursor;
        parked.trail.prune(later);
        parked.expire_ripples(later);
        assert!(!parked.animating());
    }
}
