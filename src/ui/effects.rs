//! Cosmetic particle bursts.
//!
//! Purely visual: the core emits a `Jumped` event with a launch point and
//! this module scatters a few short-lived particles from it. Nothing here
//! feeds back into the simulation.

use rand::Rng;

/// How long a particle lives, in milliseconds.
const PARTICLE_LIFETIME_MS: u64 = 450;

/// Particles emitted per burst.
const BURST_SIZE: usize = 12;

/// Downward pull applied to particles, in world px per ms^2 terms scaled
/// well below the player's gravity so dust hangs a moment.
const PARTICLE_GRAVITY: f64 = 0.0006;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    vx: f64,
    vy: f64,
    age_ms: u64,
}

impl Particle {
    /// 0.0 fresh, 1.0 expired. The scene picks glyphs and dimming by age.
    pub fn age_fraction(&self) -> f64 {
        self.age_ms as f64 / PARTICLE_LIFETIME_MS as f64
    }
}

/// Owns every live particle. Transient display state; cleared on restart.
#[derive(Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scatter a burst from a world-space point (the player's feet on
    /// jump).
    pub fn burst<R: Rng>(&mut self, x: f64, y: f64, rng: &mut R) {
        for _ in 0..BURST_SIZE {
            self.particles.push(Particle {
                x,
                y,
                vx: rng.gen_range(-0.12..=0.12),
                vy: rng.gen_range(-0.10..=0.02),
                age_ms: 0,
            });
        }
    }

    /// Age, move and expire particles by wall-clock delta.
    pub fn update(&mut self, dt_ms: u64) {
        for p in &mut self.particles {
            p.age_ms += dt_ms;
            p.x += p.vx * dt_ms as f64;
            p.y += p.vy * dt_ms as f64;
            p.vy += PARTICLE_GRAVITY * dt_ms as f64;
        }
        self.particles.retain(|p| p.age_ms < PARTICLE_LIFETIME_MS);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(5)
    }

    #[test]
    fn test_burst_adds_particles_at_origin() {
        let mut system = ParticleSystem::new();
        system.burst(170.0, 490.0, &mut test_rng());
        assert_eq!(system.iter().count(), BURST_SIZE);
        for p in system.iter() {
            assert_eq!(p.x, 170.0);
            assert_eq!(p.y, 490.0);
        }
    }

    #[test]
    fn test_particles_expire() {
        let mut system = ParticleSystem::new();
        system.burst(0.0, 0.0, &mut test_rng());
        system.update(PARTICLE_LIFETIME_MS);
        assert!(system.is_empty());
    }

    #[test]
    fn test_particles_scatter_over_time() {
        let mut system = ParticleSystem::new();
        system.burst(100.0, 100.0, &mut test_rng());
        system.update(100);
        let moved = system.iter().filter(|p| p.x != 100.0 || p.y != 100.0);
        assert!(moved.count() > 0);
    }

    #[test]
    fn test_clear_empties_immediately() {
        let mut system = ParticleSystem::new();
        system.burst(0.0, 0.0, &mut test_rng());
        system.clear();
        assert!(system.is_empty());
    }
}
