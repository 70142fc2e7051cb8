//! Shared test sources and utilities for randomext.

mod rng;

pub use rng::{MockSource, SequenceSource};
