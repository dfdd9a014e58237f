//! Ambient fog: a fixed pool of drifting particles.
//!
//! The fog runs as its own perpetual per-tick loop, fully independent of the
//! product choreography. The pool never grows or shrinks; a particle whose
//! life runs out (or that drifts past the horizontal slack margin) is reset
//! in place with fresh randomized state rather than reallocated.
//!
//! Horizontal drift dominates vertical drift, and only the horizontal axis
//! is bounds-checked - particles may wander off the top or bottom freely
//! until their life expires. The reset margin extends well past the visible
//! edge so a puff never pops out of existence on screen.
//!
//! # Example
//!
//! ```ignore
//! let mut fog = FogField::new(30, Bounds::new(1280.0, 720.0));
//! let mut surface = RasterSurface::new(1280, 720);
//!
//! loop {
//!     fog.tick(&mut surface);
//!     display(surface.bytes());
//! }
//! ```

use crate::surface::Surface;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Default particle pool size.
pub const DEFAULT_POOL_SIZE: usize = 30;

/// Horizontal slack beyond the visible bounds before a particle resets.
pub const DRIFT_MARGIN: f32 = 200.0;

/// Visible rendering bounds, in surface units. Origin at top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Bounds {
    /// Bounds of the given extent.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One fog element.
///
/// Ephemeral by design: the same slot is reused forever, reinitialized by
/// [`Particle::reset`] whenever life or position runs out.
#[derive(Clone, Debug)]
pub struct Particle {
    /// Current position.
    pub position: Vec2,
    /// Per-tick drift. Horizontal component dominant.
    pub velocity: Vec2,
    /// Puff radius.
    pub size: f32,
    /// Peak opacity at the puff center. Deliberately low for a soft look.
    pub alpha: f32,
    /// Remaining life in ticks. Strictly decreasing until reset.
    pub life: f32,
}

impl Particle {
    fn spawned(rng: &mut SmallRng, bounds: Bounds) -> Self {
        let mut particle = Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: 0.0,
            alpha: 0.0,
            life: 0.0,
        };
        particle.reset(rng, bounds);
        particle
    }

    /// Reinitialize this slot: uniform random position inside `bounds`,
    /// small symmetric drift (horizontal dominant), soft low-opacity look,
    /// fresh life budget.
    pub fn reset(&mut self, rng: &mut SmallRng, bounds: Bounds) {
        self.position = Vec2::new(
            rng.gen_range(0.0..bounds.width.max(f32::MIN_POSITIVE)),
            rng.gen_range(0.0..bounds.height.max(f32::MIN_POSITIVE)),
        );
        self.velocity = Vec2::new(rng.gen_range(-0.25..0.25), rng.gen_range(-0.1..0.1));
        self.size = rng.gen_range(50.0..250.0);
        self.alpha = rng.gen_range(0.0..0.05);
        self.life = rng.gen_range(0.0..1000.0);
    }

    /// True when this particle should be reset before the next render.
    fn expired(&self, bounds: Bounds) -> bool {
        self.life <= 0.0
            || self.position.x < -DRIFT_MARGIN
            || self.position.x > bounds.width + DRIFT_MARGIN
    }
}

/// The fog simulation: fixed pool, perpetual tick, resize without reset.
#[derive(Debug)]
pub struct FogField {
    particles: Vec<Particle>,
    bounds: Bounds,
    rng: SmallRng,
}

impl FogField {
    /// Populate a pool of `pool_size` randomized particles inside `bounds`.
    pub fn new(pool_size: usize, bounds: Bounds) -> Self {
        // Seeded from wall clock: a different field every run, reproducible
        // within one.
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::with_seed(pool_size, bounds, seed)
    }

    /// Like [`FogField::new`] with an explicit RNG seed (deterministic runs,
    /// tests).
    pub fn with_seed(pool_size: usize, bounds: Bounds, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let particles = (0..pool_size)
            .map(|_| Particle::spawned(&mut rng, bounds))
            .collect();
        Self {
            particles,
            bounds,
            rng,
        }
    }

    /// Current rendering bounds.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The particle pool, for inspection. Length never changes.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Swap in new bounds between ticks.
    ///
    /// Takes effect on the next tick. In-flight particle state is kept:
    /// no reset, no visible flicker - only future reset positions and the
    /// reset margin use the new extent.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// One simulation step without rendering: integrate every particle,
    /// decrement life, apply the reset rule.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.position += particle.velocity;
            particle.life -= 1.0;
            if particle.expired(self.bounds) {
                particle.reset(&mut self.rng, self.bounds);
            }
        }
    }

    /// Advance one step and render every particle to `surface`.
    ///
    /// Purely generative: cannot error, has no stop condition. The caller's
    /// loop decides when the process ends.
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        self.step();
        surface.clear();
        for particle in &self.particles {
            surface.puff(particle.position, particle.size, particle.alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> FogField {
        FogField::with_seed(30, Bounds::new(800.0, 600.0), 7)
    }

    struct CountingSurface {
        clears: usize,
        puffs: usize,
    }

    impl Surface for CountingSurface {
        fn clear(&mut self) {
            self.clears += 1;
        }
        fn puff(&mut self, _center: Vec2, radius: f32, alpha: f32) {
            assert!(radius >= 0.0 && alpha >= 0.0);
            self.puffs += 1;
        }
    }

    #[test]
    fn test_pool_size_fixed() {
        let mut fog = field();
        for _ in 0..2000 {
            fog.step();
        }
        assert_eq!(fog.particles().len(), 30);
    }

    #[test]
    fn test_spawn_inside_bounds() {
        let fog = field();
        for p in fog.particles() {
            assert!(p.position.x >= 0.0 && p.position.x <= 800.0);
            assert!(p.position.y >= 0.0 && p.position.y <= 600.0);
            assert!(p.size >= 50.0 && p.size < 250.0);
            assert!(p.alpha >= 0.0 && p.alpha < 0.05);
        }
    }

    #[test]
    fn test_life_strictly_decreasing_until_reset() {
        let mut fog = field();
        for _ in 0..500 {
            let before: Vec<f32> = fog.particles().iter().map(|p| p.life).collect();
            fog.step();
            for (p, &old) in fog.particles().iter().zip(&before) {
                // Either exactly one unit was spent, or the slot was reset
                // with a fresh budget.
                let decremented = (old - 1.0 - p.life).abs() < 1e-3;
                if !decremented {
                    assert!(p.life > 0.0, "reset must grant a fresh life budget");
                    // Post-reset x is always within the visible bounds,
                    // well inside the margin slack.
                    assert!(p.position.x >= 0.0);
                    assert!(p.position.x <= fog.bounds().width);
                }
            }
        }
    }

    #[test]
    fn test_x_within_margin_after_any_reset() {
        let mut fog = field();
        for _ in 0..5000 {
            fog.step();
            for p in fog.particles() {
                // One step past a reset can drift at most |vx| < 0.25 units,
                // far inside the 200 unit slack.
                assert!(p.position.x >= -DRIFT_MARGIN - 1.0);
                assert!(p.position.x <= fog.bounds().width + DRIFT_MARGIN + 1.0);
            }
        }
    }

    #[test]
    fn test_resize_keeps_particle_state() {
        let mut fog = field();
        for _ in 0..10 {
            fog.step();
        }
        let before: Vec<Vec2> = fog.particles().iter().map(|p| p.position).collect();
        fog.resize(Bounds::new(1920.0, 1080.0));
        let after: Vec<Vec2> = fog.particles().iter().map(|p| p.position).collect();
        assert_eq!(before, after);
        assert_eq!(fog.bounds(), Bounds::new(1920.0, 1080.0));
    }

    #[test]
    fn test_tick_clears_then_paints_every_particle() {
        let mut fog = field();
        let mut surface = CountingSurface { clears: 0, puffs: 0 };
        fog.tick(&mut surface);
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.puffs, 30);
    }
}
