//! Bounded numeric draws.
//!
//! Open variants draw from `[min, max)` and reject `max <= min`; closed
//! variants draw from `[min, max]` and reject `max < min`. Bounds are
//! checked before anything is drawn, so a rejected call leaves the
//! generator state untouched.
//!
//! 32-bit and narrower integers map an exact bounded integer draw onto
//! the span. 64-bit integers scale a unit `f64` draw by the span instead,
//! which loses uniformity once the span exceeds 2^53.

use randomext_core::error::{Interval, RandomError};
use randomext_core::rng::UniformSource;

use crate::ranged::RangedRandom;

/// First surrogate code point.
const SURROGATE_START: u32 = 0xD800;
/// Number of surrogate code points, none of which is a valid `char`.
const SURROGATE_LEN: u32 = 0x800;

/// Generates an open and a closed variant for an integer type narrower than
/// `i32`, both delegating to the `i32` draws.
macro_rules! narrow_int_ranges {
    ($($ty:ty => $open:ident, $closed:ident;)*) => {
        $(
            #[doc = concat!("Uniform `", stringify!($ty), "` in `[min, max)`.")]
            ///
            /// # Errors
            ///
            /// Returns `RandomError::InvalidRange` if `max <= min`.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            pub fn $open(&mut self, min: $ty, max: $ty) -> Result<$ty, RandomError> {
                let value = self.next_i32_in(i32::from(min), i32::from(max))?;
                Ok(value as $ty)
            }

            #[doc = concat!("Uniform `", stringify!($ty), "` in `[min, max]`.")]
            ///
            /// # Errors
            ///
            /// Returns `RandomError::InvalidRange` if `max < min`.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            pub fn $closed(&mut self, min: $ty, max: $ty) -> Result<$ty, RandomError> {
                let value = self.next_i32_closed(i32::from(min), i32::from(max))?;
                Ok(value as $ty)
            }
        )*
    };
}

impl<S: UniformSource> RangedRandom<S> {
    /// Returns `true` iff a unit draw is `<= probability`.
    ///
    /// The probability is not validated: anything `>= 1.0` is always true,
    /// anything `< 0.0` (or NaN) is always false.
    pub fn next_bool_with_probability(&mut self, probability: f64) -> bool {
        self.source.next_f64() <= probability
    }

    /// Uniform `i32` in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if `max <= min`.
    pub fn next_i32_in(&mut self, min: i32, max: i32) -> Result<i32, RandomError> {
        if max <= min {
            return Err(RandomError::invalid_range(Interval::Open, min, max));
        }
        let offset = self.source.next_u32_below(max.abs_diff(min));
        Ok(min.wrapping_add_unsigned(offset))
    }

    /// Uniform `i32` in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if `max < min`.
    pub fn next_i32_closed(&mut self, min: i32, max: i32) -> Result<i32, RandomError> {
        if max < min {
            return Err(RandomError::invalid_range(Interval::Closed, min, max));
        }
        let offset = match max.abs_diff(min).checked_add(1) {
            Some(bound) => self.source.next_u32_below(bound),
            // [i32::MIN, i32::MAX] covers every u32 offset.
            None => self.source.next_u32(),
        };
        Ok(min.wrapping_add_unsigned(offset))
    }

    narrow_int_ranges! {
        i8 => next_i8_in, next_i8_closed;
        u8 => next_u8_in, next_u8_closed;
        i16 => next_i16_in, next_i16_closed;
        u16 => next_u16_in, next_u16_closed;
    }

    /// Uniform `char` in `[min, max)`, skipping the surrogate gap.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if `max <= min`.
    pub fn next_char_in(&mut self, min: char, max: char) -> Result<char, RandomError> {
        if max <= min {
            return Err(RandomError::invalid_range(Interval::Open, min, max));
        }
        let index = self.next_i32_in(scalar_index(min), scalar_index(max))?;
        Ok(scalar_from_index(index))
    }

    /// Uniform `char` in `[min, max]`, skipping the surrogate gap.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if `max < min`.
    pub fn next_char_closed(&mut self, min: char, max: char) -> Result<char, RandomError> {
        if max < min {
            return Err(RandomError::invalid_range(Interval::Closed, min, max));
        }
        let index = self.next_i32_closed(scalar_index(min), scalar_index(max))?;
        Ok(scalar_from_index(index))
    }

    /// Uniform `i64` in `[min, max)`, scaled from a unit `f64` draw.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if `max <= min`.
    pub fn next_i64_in(&mut self, min: i64, max: i64) -> Result<i64, RandomError> {
        if max <= min {
            return Err(RandomError::invalid_range(Interval::Open, min, max));
        }
        let span = i128::from(max) - i128::from(min);
        Ok(self.scaled_i64(min, span))
    }

    /// Uniform `i64` in `[min, max]`, scaled from a unit `f64` draw.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if `max < min`.
    pub fn next_i64_closed(&mut self, min: i64, max: i64) -> Result<i64, RandomError> {
        if max < min {
            return Err(RandomError::invalid_range(Interval::Closed, min, max));
        }
        let span = i128::from(max) - i128::from(min) + 1;
        Ok(self.scaled_i64(min, span))
    }

    /// Uniform `f32` in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if `max <= min` or either bound is NaN.
    pub fn next_f32_in(&mut self, min: f32, max: f32) -> Result<f32, RandomError> {
        if max <= min || min.is_nan() || max.is_nan() {
            return Err(RandomError::invalid_range(Interval::Open, min, max));
        }
        Ok(min + (max - min) * self.source.next_f32())
    }

    /// Uniform `f64` in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if `max <= min` or either bound is NaN.
    pub fn next_f64_in(&mut self, min: f64, max: f64) -> Result<f64, RandomError> {
        if max <= min || min.is_nan() || max.is_nan() {
            return Err(RandomError::invalid_range(Interval::Open, min, max));
        }
        Ok(min + (max - min) * self.source.next_f64())
    }

    /// Normal draw with the given mean and standard deviation.
    ///
    /// A negative `deviation` mirrors the distribution around the mean.
    pub fn next_gaussian(&mut self, mean: f64, deviation: f64) -> f64 {
        mean + deviation * self.source.next_standard_normal()
    }

    /// `min + floor(span * unit)`. The span is widened to `i128` so the full
    /// `i64` domain does not overflow; a unit draw below 1.0 keeps the
    /// offset below `span`.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn scaled_i64(&mut self, min: i64, span: i128) -> i64 {
        let offset = (span as f64 * self.source.next_f64()) as i128;
        (i128::from(min) + offset) as i64
    }
}

/// Position of `c` among Unicode scalar values, with surrogates removed.
#[allow(clippy::cast_possible_wrap)]
fn scalar_index(c: char) -> i32 {
    let code = u32::from(c);
    let index = if code < SURROGATE_START {
        code
    } else {
        code - SURROGATE_LEN
    };
    index as i32
}

/// Inverse of `scalar_index`.
#[allow(clippy::cast_sign_loss)]
fn scalar_from_index(index: i32) -> char {
    let index = index as u32;
    let code = if index < SURROGATE_START {
        index
    } else {
        index + SURROGATE_LEN
    };
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}
