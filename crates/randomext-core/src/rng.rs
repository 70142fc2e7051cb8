//! Uniform source abstraction.
//!
//! In production this wraps `rand`'s `StdRng`. In tests a scripted
//! implementation is injected so every draw is known in advance.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::StandardNormal;

/// Abstraction over the underlying uniform pseudo-random generator.
pub trait UniformSource: Send + Sync {
    /// Generate a uniform `bool`.
    fn next_bool(&mut self) -> bool;

    /// Generate a uniform `u32` over its whole domain.
    fn next_u32(&mut self) -> u32;

    /// Generate a uniform `u32` in `[0, bound)`.
    ///
    /// Callers must pass a non-zero `bound`.
    fn next_u32_below(&mut self, bound: u32) -> u32;

    /// Generate a uniform `u64` over its whole domain.
    fn next_u64(&mut self) -> u64;

    /// Generate a uniform `u64` in `[0, bound)`.
    ///
    /// Callers must pass a non-zero `bound`.
    fn next_u64_below(&mut self, bound: u64) -> u64;

    /// Generate a uniform `f32` in `[0.0, 1.0)`.
    fn next_f32(&mut self) -> f32;

    /// Generate a uniform `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Generate a standard normal draw (mean 0, standard deviation 1).
    fn next_standard_normal(&mut self) -> f64;
}

/// Production source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct StdSource {
    rng: StdRng,
}

impl StdSource {
    /// Creates a source whose sequence is fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for StdSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl UniformSource for StdSource {
    fn next_bool(&mut self) -> bool {
        self.rng.random()
    }

    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u32_below(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound)
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn next_u64_below(&mut self, bound: u64) -> u64 {
        self.rng.random_range(0..bound)
    }

    fn next_f32(&mut self) -> f32 {
        self.rng.random()
    }

    fn next_f64(&mut self) -> f64 {
        self.rng.random()
    }

    fn next_standard_normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }
}
