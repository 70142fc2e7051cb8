//! Test sources — deterministic `UniformSource` implementations for tests.

use randomext_core::rng::UniformSource;

/// A no-op source that always returns the smallest value of every draw:
/// `false`, `0` and `0.0`. Suitable for tests that do not depend on
/// specific random values.
#[derive(Debug)]
pub struct MockSource;

impl UniformSource for MockSource {
    fn next_bool(&mut self) -> bool {
        false
    }

    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u32_below(&mut self, _bound: u32) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn next_u64_below(&mut self, _bound: u64) -> u64 {
        0
    }

    fn next_f32(&mut self) -> f32 {
        0.0
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }

    fn next_standard_normal(&mut self) -> f64 {
        0.0
    }
}

/// A source that returns values from predetermined sequences. Integer and
/// boolean draws consume `ints`; unit-float and normal draws consume
/// `floats`. Bounded draws reduce the scripted value modulo the bound.
/// Panics if the relevant sequence is exhausted.
#[derive(Debug, Default)]
pub struct SequenceSource {
    ints: Vec<u64>,
    int_index: usize,
    floats: Vec<f64>,
    float_index: usize,
}

impl SequenceSource {
    /// Create a new `SequenceSource` with the given integer values.
    #[must_use]
    pub fn new(ints: Vec<u64>) -> Self {
        Self {
            ints,
            ..Self::default()
        }
    }

    /// Create a new `SequenceSource` with the given float values.
    #[must_use]
    pub fn floats(floats: Vec<f64>) -> Self {
        Self {
            floats,
            ..Self::default()
        }
    }

    /// Total number of draws consumed so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.int_index + self.float_index
    }

    fn next_int(&mut self) -> u64 {
        let val = self.ints[self.int_index];
        self.int_index += 1;
        val
    }

    fn next_float(&mut self) -> f64 {
        let val = self.floats[self.float_index];
        self.float_index += 1;
        val
    }
}

#[allow(clippy::cast_possible_truncation)]
impl UniformSource for SequenceSource {
    fn next_bool(&mut self) -> bool {
        self.next_int() != 0
    }

    fn next_u32(&mut self) -> u32 {
        self.next_int() as u32
    }

    fn next_u32_below(&mut self, bound: u32) -> u32 {
        (self.next_int() % u64::from(bound)) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_int()
    }

    fn next_u64_below(&mut self, bound: u64) -> u64 {
        self.next_int() % bound
    }

    fn next_f32(&mut self) -> f32 {
        self.next_float() as f32
    }

    fn next_f64(&mut self) -> f64 {
        self.next_float()
    }

    fn next_standard_normal(&mut self) -> f64 {
        self.next_float()
    }
}
