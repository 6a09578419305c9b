//! Spring-damper smoothing for the pointer signal
//!
//! acceleration = (stiffness * (target - current) - damping * velocity) / mass,
//! integrated with semi-implicit Euler at the frame rate. Tunings in
//! `constants::cursor` are near critical damping so on-screen travel settles
//! well under a second without sustained overshoot.

use egui::Pos2;

use crate::constants::cursor::{DT_MAX, DT_MIN, SETTLE_EPSILON};

#[derive(Debug, Clone, Copy)]
pub struct Spring {
    pub current: f32,
    pub velocity: f32,
    pub target: f32,
    stiffness: f32,
    damping: f32,
    mass: f32,
}

impl Spring {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            current: 0.0,
            velocity: 0.0,
            target: 0.0,
            stiffness,
            damping,
            mass,
        }
    }

    /// Jump to `value` with no residual velocity
    pub fn snap_to(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advance by `dt` seconds toward the current target
    pub fn update(&mut self, dt: f32) -> f32 {
        let dt = dt.clamp(DT_MIN, DT_MAX);
        let accel =
            (self.stiffness * (self.target - self.current) - self.damping * self.velocity)
                / self.mass;
        self.velocity += accel * dt;
        self.current += self.velocity * dt;
        self.current
    }

    pub fn settled(&self) -> bool {
        (self.target - self.current).abs() < SETTLE_EPSILON && self.velocity.abs() < SETTLE_EPSILON
    }
}

/// A spring per axis, tracking a 2D position
#[derive(Debug, Clone, Copy)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            x: Spring::new(stiffness, damping, mass),
            y: Spring::new(stiffness, damping, mass),
        }
    }

    pub fn snap_to(&mut self, pos: Pos2) {
        self.x.snap_to(pos.x);
        self.y.snap_to(pos.y);
    }

    pub fn set_target(&mut self, pos: Pos2) {
        self.x.target = pos.x;
        self.y.target = pos.y;
    }

    pub fn update(&mut self, dt: f32) -> Pos2 {
        Pos2::new(self.x.update(dt), self.y.update(dt))
    }

    pub fn position(&self) -> Pos2 {
        Pos2::new(self.x.current, self.y.current)
    }

    pub fn settled(&self) -> bool {
        self.x.settled() && self.y.settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::cursor::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run(spring: &mut Spring, seconds: f32) {
        let steps = (seconds / FRAME).ceil() as usize;
        for _ in 0..steps {
            spring.update(FRAME);
        }
    }

    #[test]
    fn test_dot_spring_converges_within_one_percent() {
        let mut spring = Spring::new(DOT_STIFFNESS, DOT_DAMPING, DOT_MASS);
        spring.snap_to(0.0);
        spring.target = 1000.0;
        run(&mut spring, 2.0);
        assert!(
            (spring.current - 1000.0).abs() < 10.0,
            "dot spring at {} after 2s",
            spring.current
        );
        assert!(spring.settled());
    }

    #[test]
    fn test_ring_spring_converges_within_one_percent() {
        let mut spring = Spring::new(RING_STIFFNESS, RING_DAMPING, RING_MASS);
        spring.snap_to(0.0);
        spring.target = 1000.0;
        run(&mut spring, 2.0);
        assert!(
            (spring.current - 1000.0).abs() < 10.0,
            "ring spring at {} after 2s",
            spring.current
        );
    }

    #[test]
    fn test_no_sustained_oscillation() {
        // Once near the target, the spring must not swing back out.
        let mut spring = Spring::new(DOT_STIFFNESS, DOT_DAMPING, DOT_MASS);
        spring.target = 500.0;
        run(&mut spring, 2.0);
        let mut max_excursion = 0.0_f32;
        for _ in 0..240 {
            spring.update(FRAME);
            max_excursion = max_excursion.max((spring.current - 500.0).abs());
        }
        assert!(max_excursion < 5.0, "excursion {max_excursion}");
    }

    #[test]
    fn test_dot_leads_ring() {
        let mut dot = Spring2::new(DOT_STIFFNESS, DOT_DAMPING, DOT_MASS);
        let mut ring = Spring2::new(RING_STIFFNESS, RING_DAMPING, RING_MASS);
        let target = Pos2::new(400.0, 300.0);
        dot.set_target(target);
        ring.set_target(target);
        for _ in 0..12 {
            dot.update(FRAME);
            ring.update(FRAME);
        }
        let dot_dist = dot.position().distance(target);
        let ring_dist = ring.position().distance(target);
        assert!(
            dot_dist < ring_dist,
            "dot {dot_dist} should lead ring {ring_dist}"
        );
    }

    #[test]
    fn test_snap_to_clears_velocity() {
        let mut spring = Spring::new(DOT_STIFFNESS, DOT_DAMPING, DOT_MASS);
        spring.target = 100.0;
        run(&mut spring, 0.1);
        spring.snap_to(42.0);
        assert_eq!(spring.current, 42.0);
        assert_eq!(spring.velocity, 0.0);
        assert!(spring.settled());
    }

    #[test]
    fn test_glitched_dt_is_clamped() {
        let mut spring = Spring::new(DOT_STIFFNESS, DOT_DAMPING, DOT_MASS);
        spring.target = 100.0;
        // A multi-second hitch must not explode the integration.
        spring.update(5.0);
        assert!(spring.current.is_finite());
        assert!(spring.current.abs() < 1000.0);
    }
}
