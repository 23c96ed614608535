//! Random source construction for the runners.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the random source for one search run.
///
/// A fixed `seed` gives reproducible runs; `None` draws a fresh seed from
/// the thread-local generator.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
