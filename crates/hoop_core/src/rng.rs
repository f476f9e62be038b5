//! Seeded random source for career and season simulation.
//!
//! All randomness in the engine flows through [`SimRng`] so that a career is
//! fully reproducible from its seed (same seed = same career). The generator
//! is ChaCha8, matching the determinism contract of the rest of the engine.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, Normal};

/// Injectable random source with the sampling shapes the simulation needs.
#[derive(Debug, Clone)]
pub struct SimRng {
    rng: ChaCha8Rng,
}

impl SimRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Sample a normal distribution. Falls back to `mean` if the standard
    /// deviation is degenerate (non-positive or non-finite).
    pub fn normal(&mut self, mean: f32, std_dev: f32) -> f32 {
        // Normal::new accepts a negative sd, so the constructor error alone
        // is not a sufficient guard.
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return mean;
        }
        match Normal::new(mean, std_dev) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => mean,
        }
    }

    /// Sample an exponential distribution with the given rate (lambda).
    /// The mean of the distribution is `1.0 / rate`.
    pub fn exponential(&mut self, rate: f32) -> f32 {
        match Exp::new(rate) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => 0.0,
        }
    }

    /// Uniform sample from the half-open range `[low, high)`.
    pub fn uniform(&mut self, low: f32, high: f32) -> f32 {
        self.rng.gen_range(low..high)
    }

    /// Bernoulli roll: true with probability `p`.
    pub fn chance(&mut self, p: f32) -> bool {
        self.rng.gen::<f32>() < p
    }

    /// Uniform index into a collection of length `len`. `len` must be > 0.
    pub fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
