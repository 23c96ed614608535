//! Hill Climbing.
//!
//! Strict-improvement local search over the swap neighborhood, in two
//! variants:
//!
//! - [`HillClimbingVariant::BestImprovement`]: scan the whole neighborhood
//!   each step, move to its cheapest member, stop at the first local optimum.
//! - [`HillClimbingVariant::RandomNeighbor`]: draw one random neighbor each
//!   step, move only if it improves, always run the full iteration budget.

mod config;
mod runner;

pub use config::{HillClimbingConfig, HillClimbingVariant};
pub use runner::HillClimbingRunner;
