//! Exhaustive enumeration loop.
//!
//! # Algorithm
//!
//! 1. Start from the identity permutation
//! 2. Evaluate it; keep it if strictly cheaper than the best so far
//! 3. Advance to the lexicographic successor
//! 4. Stop after the last permutation or when the iteration cap is hit

use super::config::ExhaustiveConfig;
use crate::distance::DistanceMatrix;
use crate::error::TspError;
use crate::result::SearchResult;
use crate::tour::{tour_cost, Tour};

/// Rearranges `items` into its lexicographic successor.
///
/// Returns `false` (leaving `items` sorted ascending) when `items` was the
/// last permutation.
///
/// # Examples
///
/// ```
/// use u_tsp::exhaustive::next_permutation;
///
/// let mut v = [1, 2, 3];
/// assert!(next_permutation(&mut v));
/// assert_eq!(v, [1, 3, 2]);
/// ```
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

/// Executes exhaustive search.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Enumerates permutations of every location and returns the cheapest.
    ///
    /// Ties keep the permutation seen first, so the result is fully
    /// deterministic.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::distance::DistanceMatrix;
    /// use u_tsp::exhaustive::{ExhaustiveConfig, ExhaustiveRunner};
    ///
    /// let dm = DistanceMatrix::from_rows(vec![
    ///     vec![0.0, 1.0, 2.0, 3.0],
    ///     vec![1.0, 0.0, 4.0, 5.0],
    ///     vec![2.0, 4.0, 0.0, 6.0],
    ///     vec![3.0, 5.0, 6.0, 0.0],
    /// ])
    /// .unwrap();
    /// let result = ExhaustiveRunner::run(&dm, &ExhaustiveConfig::default()).unwrap();
    /// assert!((result.cost() - 14.0).abs() < 1e-10);
    /// assert_eq!(result.iterations, 24);
    /// ```
    #[tracing::instrument(level = "debug", name = "exhaustive", skip_all)]
    pub fn run(matrix: &DistanceMatrix, config: &ExhaustiveConfig) -> Result<SearchResult, TspError> {
        config.validate()?;

        let mut cities: Vec<usize> = (0..matrix.size()).collect();
        let mut best = Tour::new(cities.clone(), matrix);
        let mut best_iteration = 1;
        let mut iterations = 1;
        let mut accepted_moves = 0;

        while iterations < config.max_iterations && next_permutation(&mut cities) {
            iterations += 1;
            if tour_cost(&cities, matrix) < best.cost() {
                best = Tour::new(cities.clone(), matrix);
                best_iteration = iterations;
                accepted_moves += 1;
                tracing::trace!(iteration = iterations, cost = best.cost(), "new best");
            }
        }

        tracing::debug!(
            iterations,
            cost = best.cost(),
            capped = iterations == config.max_iterations,
            "exhaustive search finished"
        );

        Ok(SearchResult {
            tour: best,
            iterations,
            best_iteration,
            accepted_moves,
        })
    }
}
