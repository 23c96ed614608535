//! Exhaustive Search.
//!
//! Enumerates tours in lexicographic permutation order and keeps the
//! cheapest. Optimal when the iteration cap does not cut the enumeration
//! short. Runs in O(n!·n), which is impractical beyond a dozen locations.

mod config;
mod runner;

pub use config::ExhaustiveConfig;
pub use runner::{next_permutation, ExhaustiveRunner};
