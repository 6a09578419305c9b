//! Ambient particle background
//!
//! A fixed-size pool of drifting dots painted behind the page. Each frame
//! integrates velocity and decays opacity; faded or escaped particles
//! respawn somewhere fresh so the field never empties. Under reduced motion
//! the field is frozen: painted once-spawned, never advanced.

use egui::{Color32, Painter, Pos2, Rect, Vec2};
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::constants::background::*;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Pos2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub color: Color32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    rng: ThreadRng,
    frozen: bool,
}

impl ParticleField {
    pub fn new(bounds: Rect, palette: &[Color32], frozen: bool) -> Self {
        let mut rng = rand::thread_rng();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Self::spawn(&mut rng, bounds, palette))
            .collect();
        Self {
            particles,
            rng,
            frozen,
        }
    }

    fn spawn(rng: &mut ThreadRng, bounds: Rect, palette: &[Color32]) -> Particle {
        let color = if palette.is_empty() {
            Color32::GRAY
        } else {
            palette[rng.gen_range(0..palette.len())]
        };
        Particle {
            pos: Pos2::new(
                rng.gen_range(bounds.left()..=bounds.right()),
                rng.gen_range(bounds.top()..=bounds.bottom()),
            ),
            vel: Vec2::new(
                rng.gen_range(-MAX_DRIFT..=MAX_DRIFT),
                rng.gen_range(-MAX_DRIFT..=MAX_DRIFT),
            ),
            size: rng.gen_range(MIN_SIZE..=MAX_SIZE),
            opacity: rng.gen_range(MIN_OPACITY..=MAX_OPACITY),
            color,
        }
    }

    /// Advance one frame; respawns particles that faded out or drifted
    /// outside `bounds`.
    pub fn tick(&mut self, bounds: Rect, palette: &[Color32]) {
        if self.frozen {
            return;
        }
        for particle in &mut self.particles {
            particle.pos += particle.vel;
            particle.opacity -= OPACITY_DECAY;
            if particle.opacity <= 0.0 || !bounds.expand(MAX_SIZE).contains(particle.pos) {
                *particle = Self::spawn(&mut self.rng, bounds, palette);
            }
        }
    }

    pub fn paint(&self, painter: &Painter) {
        for particle in &self.particles {
            painter.circle_filled(
                particle.pos,
                particle.size,
                particle.color.gamma_multiply(particle.opacity),
            );
        }
    }

    #[cfg(test)]
    fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    const BOUNDS: Rect = Rect {
        min: pos2(0.0, 0.0),
        max: pos2(800.0, 600.0),
    };

    const PALETTE: [Color32; 2] = [Color32::LIGHT_BLUE, Color32::LIGHT_GREEN];

    #[test]
    fn test_field_spawns_full_pool_in_bounds() {
        let field = ParticleField::new(BOUNDS, &PALETTE, false);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!(BOUNDS.contains(p.pos));
            assert!(p.opacity >= MIN_OPACITY && p.opacity <= MAX_OPACITY);
        }
    }

    #[test]
    fn test_tick_decays_opacity() {
        let mut field = ParticleField::new(BOUNDS, &PALETTE, false);
        let before: f32 = field.particles().iter().map(|p| p.opacity).sum();
        field.tick(BOUNDS, &PALETTE);
        let after: f32 = field.particles().iter().map(|p| p.opacity).sum();
        assert!(after < before);
    }

    #[test]
    fn test_pool_never_empties() {
        let mut field = ParticleField::new(BOUNDS, &PALETTE, false);
        // Enough frames for every starting particle to fade out at least once
        for _ in 0..200 {
            field.tick(BOUNDS, &PALETTE);
        }
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        assert!(field.particles().iter().all(|p| p.opacity > 0.0));
    }

    #[test]
    fn test_frozen_field_never_moves() {
        let mut field = ParticleField::new(BOUNDS, &PALETTE, true);
        let snapshot: Vec<Pos2> = field.particles().iter().map(|p| p.pos).collect();
        for _ in 0..30 {
            field.tick(BOUNDS, &PALETTE);
        }
        let unchanged: Vec<Pos2> = field.particles().iter().map(|p| p.pos).collect();
        assert_eq!(snapshot, unchanged);
    }
}
