//! Randomext — range-bounded draws, selection and shuffling.
//!
//! `RangedRandom` decorates a [`UniformSource`] with bounded integer and
//! float draws, weighted booleans, uniform selection and Fisher-Yates
//! shuffling. Instances are owned explicitly, obtained per thread through
//! [`with_thread_instance`], or per worker through a [`WorkerRegistry`].

pub mod range;
pub mod ranged;
pub mod registry;
pub mod select;
pub mod thread;

pub use randomext_core::config::RandomConfig;
pub use randomext_core::error::{Interval, RandomError};
pub use randomext_core::rng::{StdSource, UniformSource};

pub use ranged::RangedRandom;
pub use registry::WorkerRegistry;
pub use select::Enumeration;
pub use thread::with_thread_instance;
