//! Time-windowed, length-capped trail buffer
//!
//! Appends are throttled so buffer growth is bounded by time, not by the
//! pointer event rate. Segment opacity is recomputed per frame since age is
//! relative to "now".

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use egui::Pos2;

use crate::constants::cursor::{TRAIL_CAP, TRAIL_THROTTLE_MS, TRAIL_WINDOW_MS};

#[derive(Debug, Clone, Copy)]
pub struct TrailPoint {
    pub pos: Pos2,
    pub id: u64,
    pub at: Instant,
}

/// One trail segment between consecutive points with its current opacity
#[derive(Debug, Clone, Copy)]
pub struct TrailSegment {
    pub from: Pos2,
    pub to: Pos2,
    pub opacity: f32,
}

#[derive(Debug)]
pub struct TrailBuffer {
    points: VecDeque<TrailPoint>,
    next_id: u64,
    last_push: Option<Instant>,
    window: Duration,
    throttle: Duration,
    cap: usize,
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(TRAIL_CAP + 1),
            next_id: 0,
            last_push: None,
            window: Duration::from_millis(TRAIL_WINDOW_MS),
            throttle: Duration::from_millis(TRAIL_THROTTLE_MS),
            cap: TRAIL_CAP,
        }
    }

    /// Append a sample, subject to the throttle; evicts stale points and
    /// enforces the cap afterwards.
    pub fn push(&mut self, pos: Pos2, now: Instant) {
        let due = self
            .last_push
            .is_none_or(|last| now.saturating_duration_since(last) >= self.throttle);
        if due {
            self.points.push_back(TrailPoint {
                pos,
                id: self.next_id,
                at: now,
            });
            self.next_id += 1;
            self.last_push = Some(now);
            while self.points.len() > self.cap {
                self.points.pop_front();
            }
        }
        self.prune(now);
    }

    /// Drop points older than the window
    pub fn prune(&mut self, now: Instant) {
        while let Some(front) = self.points.front()
            && now.saturating_duration_since(front.at) > self.window
        {
            self.points.pop_front();
        }
    }

    /// Connected segments between consecutive points, faded by the age of
    /// the newer endpoint: opacity = max(0, 1 - age/window).
    pub fn segments(&self, now: Instant) -> Vec<TrailSegment> {
        let window = self.window.as_secs_f32();
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .map(|(a, b)| {
                let age = now.saturating_duration_since(b.at).as_secs_f32();
                TrailSegment {
                    from: a.pos,
                    to: b.pos,
                    opacity: (1.0 - age / window).max(0.0),
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.last_push = None;
    }

    #[cfg(test)]
    fn oldest_age(&self, now: Instant) -> Option<Duration> {
        self.points
            .front()
            .map(|p| now.saturating_duration_since(p.at))
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_drops_fast_samples() {
        let t0 = Instant::now();
        let mut trail = TrailBuffer::new();
        trail.push(Pos2::new(0.0, 0.0), t0);
        // 5 ms later: inside the 15 ms throttle, ignored
        trail.push(Pos2::new(1.0, 0.0), t0 + Duration::from_millis(5));
        assert_eq!(trail.len(), 1);
        trail.push(Pos2::new(2.0, 0.0), t0 + Duration::from_millis(16));
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn test_window_and_cap_invariants_hold_at_every_instant() {
        let t0 = Instant::now();
        let mut trail = TrailBuffer::new();
        // Feed samples 20 ms apart over a full second; at every instant the
        // buffer must hold at most 12 points and nothing older than 300 ms.
        for i in 0..50 {
            let now = t0 + Duration::from_millis(20 * i);
            trail.push(Pos2::new(i as f32, 0.0), now);
            assert!(trail.len() <= TRAIL_CAP, "cap exceeded at sample {i}");
            if let Some(age) = trail.oldest_age(now) {
                assert!(
                    age <= Duration::from_millis(TRAIL_WINDOW_MS),
                    "stale point ({age:?}) at sample {i}"
                );
            }
        }
    }

    #[test]
    fn test_prune_without_push() {
        let t0 = Instant::now();
        let mut trail = TrailBuffer::new();
        trail.push(Pos2::ZERO, t0);
        trail.prune(t0 + Duration::from_millis(301));
        assert!(trail.is_empty());
    }

    #[test]
    fn test_segment_opacity_fades_with_age() {
        let t0 = Instant::now();
        let mut trail = TrailBuffer::new();
        trail.push(Pos2::new(0.0, 0.0), t0);
        trail.push(Pos2::new(10.0, 0.0), t0 + Duration::from_millis(20));

        let fresh = trail.segments(t0 + Duration::from_millis(20));
        assert_eq!(fresh.len(), 1);
        assert!((fresh[0].opacity - 1.0).abs() < 1e-3);

        let aged = trail.segments(t0 + Duration::from_millis(170));
        // Newer endpoint is 150 ms old: opacity 1 - 150/300 = 0.5
        assert!((aged[0].opacity - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_segment_count_is_len_minus_one() {
        let t0 = Instant::now();
        let mut trail = TrailBuffer::new();
        for i in 0..4 {
            trail.push(Pos2::new(i as f32, 0.0), t0 + Duration::from_millis(20 * i));
        }
        assert_eq!(trail.segments(t0 + Duration::from_millis(80)).len(), 3);
    }

    #[test]
    fn test_clear_resets_throttle() {
        let t0 = Instant::now();
        let mut trail = TrailBuffer::new();
        trail.push(Pos2::ZERO, t0);
        trail.clear();
        // Immediately after a clear the next sample lands regardless of the
        // previous push time.
        trail.push(Pos2::ZERO, t0 + Duration::from_millis(1));
        assert_eq!(trail.len(), 1);
    }
}
