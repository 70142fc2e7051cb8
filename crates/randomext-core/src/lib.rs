//! Randomext Core — shared generator abstractions.
//!
//! This crate defines the uniform source trait that the ranged generator
//! decorates, the production source backed by `rand`, the error type and
//! the configuration loaded from the environment.

pub mod config;
pub mod error;
pub mod rng;
