//! Error types.

use std::fmt;

use thiserror::Error;

/// Interval kind a bounded draw was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    /// Half-open `[min, max)`.
    Open,
    /// Closed `[min, max]`.
    Closed,
}

impl Interval {
    /// The bound relationship this interval kind requires.
    #[must_use]
    pub fn requirement(self) -> &'static str {
        match self {
            Self::Open => "max must be greater than min",
            Self::Closed => "max must be greater than or equal to min",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Closed => f.write_str("closed"),
        }
    }
}

/// Top-level error type for every fallible draw.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// A slice, string or enumeration had nothing to select from.
    #[error("{input} must not be empty")]
    EmptyInput {
        /// What kind of input was empty.
        input: &'static str,
    },

    /// The bounds violate the requirement of the requested interval kind.
    #[error("invalid {interval} range (min {min}, max {max}): {}", .interval.requirement())]
    InvalidRange {
        /// The interval kind that was requested.
        interval: Interval,
        /// The rejected lower bound, rendered.
        min: String,
        /// The rejected upper bound, rendered.
        max: String,
    },

    /// A configuration value could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RandomError {
    /// Builds an `InvalidRange` error from any displayable bounds.
    #[must_use]
    pub fn invalid_range(interval: Interval, min: impl fmt::Display, max: impl fmt::Display) -> Self {
        Self::InvalidRange {
            interval,
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
