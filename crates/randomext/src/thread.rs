//! Thread-local generator access.
//!
//! Each thread lazily creates its own `RangedRandom` on first use and
//! keeps it until the thread exits. Instances are never shared between
//! threads, so no locking is involved.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

use randomext_core::config::RandomConfig;
use tracing::{debug, warn};

use crate::ranged::RangedRandom;
use crate::registry::derive_seed;

/// Counts thread-local instances created in this process.
static THREAD_ORDINAL: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static THREAD_INSTANCE: RefCell<RangedRandom> = RefCell::new(create_thread_instance());
}

fn create_thread_instance() -> RangedRandom {
    let config = RandomConfig::from_env().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring seed configuration, seeding from entropy");
        RandomConfig::default()
    });
    let ordinal = THREAD_ORDINAL.fetch_add(1, Ordering::Relaxed);
    debug!(ordinal, seeded = config.seed.is_some(), "creating thread-local generator");
    match config.seed {
        Some(base) => RangedRandom::with_seed(derive_seed(base, ordinal)),
        None => RangedRandom::new(),
    }
}

/// Runs `f` with the calling thread's generator.
///
/// The generator is created on the first call from a thread and its
/// state carries over between calls on that thread. When `RANDOMEXT_SEED`
/// is set, each thread's seed is derived from it and the order in which
/// threads first call this function.
///
/// # Panics
///
/// Panics if called again from inside `f`, since the generator is already
/// borrowed for the outer call.
pub fn with_thread_instance<R>(f: impl FnOnce(&mut RangedRandom) -> R) -> R {
    THREAD_INSTANCE.with(|cell| f(&mut cell.borrow_mut()))
}
