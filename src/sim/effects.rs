//! Visual effects: hit particles and screen shake
//!
//! Nothing here feeds back into gameplay. The RNG is seeded per run so a
//! replay of the same inputs scatters particles the same way.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

/// Cap on live particles
pub const MAX_PARTICLES: usize = 128;

/// A particle flying out from a hit
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    /// Spawn point (character center at the moment of the hit)
    pub origin: Vec2,
    /// Final offset from `origin` once fully spread
    pub offset: Vec2,
    pub scale: f32,
    /// Seconds left before removal
    pub life: f32,
    /// Seconds the particle lives in total
    pub lifetime: f32,
}

impl Particle {
    /// Current position, easing out from the origin
    pub fn pos(&self) -> Vec2 {
        let t = 1.0 - (self.life / self.lifetime).clamp(0.0, 1.0);
        self.origin + self.offset * t
    }

    /// Fades out over the second half of its life
    pub fn opacity(&self) -> f32 {
        (self.life / self.lifetime * 2.0).clamp(0.0, 1.0)
    }
}

/// Effects owned by the game state
#[derive(Debug, Clone)]
pub struct Effects {
    rng: Pcg32,
    pub particles: Vec<Particle>,
    /// Seconds of screen shake left
    pub shake: f32,
}

impl Effects {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            particles: Vec::new(),
            shake: 0.0,
        }
    }

    /// Spawn a burst of particles around `center`
    pub fn burst(&mut self, center: Vec2, count: u32, spread: f32, lifetime: f32) {
        let half = spread * 0.5;
        for _ in 0..count {
            if self.particles.len() >= MAX_PARTICLES {
                self.particles.remove(0);
            }
            let offset = if half > 0.0 {
                Vec2::new(
                    self.rng.random_range(-half..half),
                    self.rng.random_range(-half..half),
                )
            } else {
                Vec2::ZERO
            };
            let scale = self.rng.random_range(0.4..1.0);
            self.particles.push(Particle {
                origin: center,
                offset,
                scale,
                life: lifetime,
                lifetime,
            });
        }
    }

    pub fn shake(&mut self, secs: f32) {
        self.shake = self.shake.max(secs);
    }

    #[inline]
    pub fn is_shaking(&self) -> bool {
        self.shake > 0.0
    }

    /// Age particles and the shake timer
    pub fn update(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.life -= dt;
        }
        self.particles.retain(|p| p.life > 0.0);
        self.shake = (self.shake - dt).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_and_expire() {
        let mut fx = Effects::new(7);
        fx.burst(Vec2::new(50.0, 50.0), 18, 180.0, 0.7);
        assert_eq!(fx.particles.len(), 18);
        for p in &fx.particles {
            assert!(p.offset.x.abs() <= 90.0 && p.offset.y.abs() <= 90.0);
            assert!((0.4..1.0).contains(&p.scale));
            assert_eq!(p.pos(), p.origin);
        }

        fx.update(0.5);
        assert_eq!(fx.particles.len(), 18);
        fx.update(0.25);
        assert!(fx.particles.is_empty());
    }

    #[test]
    fn test_same_seed_same_scatter() {
        let mut a = Effects::new(42);
        let mut b = Effects::new(42);
        a.burst(Vec2::ZERO, 5, 100.0, 1.0);
        b.burst(Vec2::ZERO, 5, 100.0, 1.0);
        for (pa, pb) in a.particles.iter().zip(&b.particles) {
            assert_eq!(pa.offset, pb.offset);
        }
    }

    #[test]
    fn test_particle_cap() {
        let mut fx = Effects::new(1);
        fx.burst(Vec2::ZERO, (MAX_PARTICLES + 10) as u32, 10.0, 1.0);
        assert_eq!(fx.particles.len(), MAX_PARTICLES);
    }

    #[test]
    fn test_shake_decays() {
        let mut fx = Effects::new(1);
        fx.shake(0.5);
        assert!(fx.is_shaking());
        fx.update(0.6);
        assert!(!fx.is_shaking());
    }
}
