//! The ranged generator and its unbounded draws.

use randomext_core::config::RandomConfig;
use randomext_core::error::{Interval, RandomError};
use randomext_core::rng::{StdSource, UniformSource};

/// A uniform source decorated with bounded draws and selection.
///
/// Every draw takes `&mut self`: one instance is never drawn from
/// concurrently unless the caller wraps it in a lock.
#[derive(Debug, Clone)]
pub struct RangedRandom<S = StdSource> {
    pub(crate) source: S,
}

impl RangedRandom<StdSource> {
    /// Creates a generator seeded from operating system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_source(StdSource::from_entropy())
    }

    /// Creates a generator whose sequence is fully determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_source(StdSource::seeded(seed))
    }

    /// Creates a generator seeded from `config`.
    #[must_use]
    pub fn from_config(config: &RandomConfig) -> Self {
        Self::from_source(config.source())
    }
}

impl Default for RangedRandom<StdSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: UniformSource> RangedRandom<S> {
    /// Wraps an existing source.
    #[must_use]
    pub fn from_source(source: S) -> Self {
        Self { source }
    }

    /// Returns the wrapped source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the generator and returns the wrapped source.
    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }

    /// Uniform `bool`.
    pub fn next_bool(&mut self) -> bool {
        self.source.next_bool()
    }

    /// Uniform `u32` over its whole domain.
    pub fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    /// Uniform `i32` over its whole domain.
    #[allow(clippy::cast_possible_wrap)]
    pub fn next_i32(&mut self) -> i32 {
        self.source.next_u32() as i32
    }

    /// Uniform `u64` over its whole domain.
    pub fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    /// Uniform `i64` over its whole domain.
    #[allow(clippy::cast_possible_wrap)]
    pub fn next_i64(&mut self) -> i64 {
        self.source.next_u64() as i64
    }

    /// Uniform `f32` in `[0.0, 1.0)`.
    pub fn next_f32(&mut self) -> f32 {
        self.source.next_f32()
    }

    /// Uniform `f64` in `[0.0, 1.0)`.
    pub fn next_f64(&mut self) -> f64 {
        self.source.next_f64()
    }

    /// Standard normal draw.
    pub fn next_standard_gaussian(&mut self) -> f64 {
        self.source.next_standard_normal()
    }

    /// Uniform `u32` in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if `bound` is zero.
    pub fn next_u32_below(&mut self, bound: u32) -> Result<u32, RandomError> {
        if bound == 0 {
            return Err(RandomError::invalid_range(Interval::Open, 0, bound));
        }
        Ok(self.source.next_u32_below(bound))
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn draw_index(&mut self, len: usize) -> usize {
        match u32::try_from(len) {
            Ok(bound) => self.source.next_u32_below(bound) as usize,
            Err(_) => self.source.next_u64_below(len as u64) as usize,
        }
    }
}
