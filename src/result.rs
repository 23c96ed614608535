//! Outcome of a search run.

use crate::tour::Tour;

/// Result of one strategy invocation.
///
/// What counts as an iteration depends on the strategy: a permutation for
/// exhaustive search, an explored neighborhood for best-improvement hill
/// climbing and tabu search, a drawn candidate for random-neighbor hill
/// climbing and simulated annealing.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchResult {
    /// Best tour found.
    pub tour: Tour,
    /// Iterations executed.
    pub iterations: usize,
    /// Iteration (1-based) at which `tour` was found; 0 for the starting tour.
    pub best_iteration: usize,
    /// Number of times the current search state moved to a new tour.
    pub accepted_moves: usize,
}

impl SearchResult {
    /// Cost of the best tour.
    pub fn cost(&self) -> f64 {
        self.tour.cost()
    }

    /// Result for a search that never left its starting tour.
    pub(crate) fn unmoved(tour: Tour) -> Self {
        Self {
            tour,
            iterations: 0,
            best_iteration: 0,
            accepted_moves: 0,
        }
    }
}
