//! Explicit per-worker generator ownership.
//!
//! A `WorkerRegistry` hands out one generator per worker key, created on
//! first lookup. The registry is owned by whoever schedules the workers,
//! so no ambient thread identity is involved.

use std::collections::HashMap;
use std::hash::Hash;

use randomext_core::config::RandomConfig;
use tracing::debug;

use crate::ranged::RangedRandom;

/// Golden-ratio increment used to spread derived seeds.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Derives the seed of the `ordinal`-th instance created from `base`.
pub(crate) fn derive_seed(base: u64, ordinal: u64) -> u64 {
    base ^ ordinal.wrapping_mul(SEED_STRIDE)
}

/// Lazily created generators keyed by worker identifier.
#[derive(Debug)]
pub struct WorkerRegistry<K> {
    config: RandomConfig,
    instances: HashMap<K, RangedRandom>,
    created: u64,
}

impl<K: Eq + Hash> WorkerRegistry<K> {
    /// Creates a registry whose workers are seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RandomConfig::default())
    }

    /// Creates a registry seeded from `config`.
    ///
    /// With a base seed, the n-th worker created gets a seed derived from
    /// the base seed and n, so a fixed creation order reproduces every
    /// worker's sequence.
    #[must_use]
    pub fn with_config(config: RandomConfig) -> Self {
        Self {
            config,
            instances: HashMap::new(),
            created: 0,
        }
    }

    /// Returns the generator of `worker`, creating it on first lookup.
    pub fn instance(&mut self, worker: K) -> &mut RangedRandom {
        let config = self.config;
        let created = &mut self.created;
        self.instances.entry(worker).or_insert_with(|| {
            let ordinal = *created;
            *created += 1;
            debug!(ordinal, seeded = config.seed.is_some(), "creating worker generator");
            match config.seed {
                Some(base) => RangedRandom::with_seed(derive_seed(base, ordinal)),
                None => RangedRandom::new(),
            }
        })
    }

    /// Returns the generator of `worker` if it has been created.
    pub fn get_mut(&mut self, worker: &K) -> Option<&mut RangedRandom> {
        self.instances.get_mut(worker)
    }

    /// Whether `worker` already owns a generator.
    #[must_use]
    pub fn contains(&self, worker: &K) -> bool {
        self.instances.contains_key(worker)
    }

    /// Removes and returns the generator of `worker`.
    pub fn remove(&mut self, worker: &K) -> Option<RangedRandom> {
        self.instances.remove(worker)
    }

    /// Number of live generators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether no generator has been created (or all were removed).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl<K: Eq + Hash> Default for WorkerRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}
