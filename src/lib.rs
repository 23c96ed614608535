//! Traveling Salesman search engine.
//!
//! Finds low-cost cyclic tours over a distance matrix with four
//! interchangeable strategies:
//!
//! - **Exhaustive Search**: lexicographic enumeration of every permutation,
//!   optimal when not capped.
//! - **Hill Climbing**: strict-improvement descent, either scanning the whole
//!   neighborhood (best improvement) or sampling one random neighbor per step.
//! - **Tabu Search (TS)**: best admissible move each step, with a bounded
//!   memory of recently swapped city pairs to escape local optima.
//! - **Simulated Annealing (SA)**: random neighbor with Metropolis
//!   acceptance under a caller-supplied temperature schedule.
//!
//! # Architecture
//!
//! Every strategy is built from the same primitives in [`tour`]: the cost
//! evaluator, the pairwise-swap neighborhood, and the random tour generator.
//! No strategy depends on another. Each run takes a validated
//! [`distance::DistanceMatrix`] and a per-strategy config, and returns a
//! [`result::SearchResult`] by value. Random sources are either seeded from
//! the config or injected through `run_with_rng`.
//!
//! [`loader`] and [`report`] are the I/O side: reading matrices from text
//! and producing timed, human-readable run reports.

pub mod distance;
pub mod error;
pub mod exhaustive;
pub mod hill_climbing;
pub mod loader;
pub mod report;
pub mod result;
pub mod rng;
pub mod sa;
pub mod tabu;
pub mod tour;

pub use error::TspError;
