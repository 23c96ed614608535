//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Generate initial solution
//! 2. At each iteration:
//!    a. Generate the swap neighborhood
//!    b. Drop candidates whose city pair is tabu (unless aspiration applies)
//!    c. Move to the cheapest remaining candidate, even if it is worse
//!    d. Add its city pair to the tabu memory
//!    e. Update global best if improved
//! 3. Terminate after max iterations or when every candidate is tabu
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use rand::Rng;

use super::config::TabuConfig;
use super::memory::TabuMemory;
use crate::distance::DistanceMatrix;
use crate::error::TspError;
use crate::result::SearchResult;
use crate::rng::create_rng;
use crate::tour::{neighborhood_size, neighbors, Neighbor, Tour};

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search from a random tour, seeding from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::distance::DistanceMatrix;
    /// use u_tsp::tabu::{TabuConfig, TabuRunner};
    ///
    /// let dm = DistanceMatrix::from_rows(vec![
    ///     vec![0.0, 3.0, 4.0, 2.0, 7.0],
    ///     vec![3.0, 0.0, 4.0, 6.0, 3.0],
    ///     vec![4.0, 4.0, 0.0, 5.0, 8.0],
    ///     vec![2.0, 6.0, 5.0, 0.0, 6.0],
    ///     vec![7.0, 3.0, 8.0, 6.0, 0.0],
    /// ])
    /// .unwrap();
    /// let config = TabuConfig::default().with_max_iterations(50).with_tabu_size(2).with_seed(42);
    /// let result = TabuRunner::run(&dm, &config).unwrap();
    /// assert!(result.iterations <= 50);
    /// ```
    pub fn run(matrix: &DistanceMatrix, config: &TabuConfig) -> Result<SearchResult, TspError> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Executes Tabu Search from a random tour drawn from `rng`.
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<SearchResult, TspError> {
        config.validate()?;
        Self::run_from(matrix, config, Tour::random(matrix, rng))
    }

    /// Executes Tabu Search from a given starting tour.
    ///
    /// The search itself is deterministic: ties between equally cheap
    /// candidates go to the first in neighborhood order.
    pub fn run_from(
        matrix: &DistanceMatrix,
        config: &TabuConfig,
        start: Tour,
    ) -> Result<SearchResult, TspError> {
        config.validate()?;
        Ok(search(matrix, config, start, |_, _| {}))
    }
}

/// A candidate is admissible if its move is not tabu, or if aspiration is
/// enabled and it strictly beats the best cost found so far.
fn admissible(memory: &TabuMemory, nb: &Neighbor, aspiration: bool, best_cost: f64) -> bool {
    !memory.contains(&nb.key) || (aspiration && nb.tour.cost() < best_cost)
}

/// The search loop; `on_move` sees every move taken, after it is recorded.
#[tracing::instrument(level = "debug", name = "tabu", skip_all, fields(tabu_size = config.tabu_size))]
fn search<F>(matrix: &DistanceMatrix, config: &TabuConfig, start: Tour, mut on_move: F) -> SearchResult
where
    F: FnMut(usize, &Neighbor),
{
    if neighborhood_size(start.len()) == 0 {
        return SearchResult::unmoved(start);
    }

    let mut memory = TabuMemory::new(config.tabu_size);
    let mut current = start;
    let mut best = current.clone();
    let mut best_iteration = 0;
    let mut iterations = 0;

    for iteration in 1..=config.max_iterations {
        // Find best admissible move
        let mut chosen: Option<Neighbor> = None;
        for nb in neighbors(&current, matrix) {
            if !admissible(&memory, &nb, config.aspiration, best.cost()) {
                continue;
            }
            if chosen.as_ref().is_none_or(|c| nb.tour.cost() < c.tour.cost()) {
                chosen = Some(nb);
            }
        }

        let Some(mv) = chosen else {
            tracing::debug!(iteration, "every move is tabu");
            break;
        };

        iterations = iteration;
        memory.insert(mv.key);
        on_move(iteration, &mv);
        current = mv.tour;

        if current.cost() < best.cost() {
            tracing::trace!(iteration, cost = current.cost(), "new best");
            best = current.clone();
            best_iteration = iteration;
        }
    }

    tracing::debug!(iterations, best_iteration, cost = best.cost(), "tabu search finished");

    // every completed iteration takes exactly one move
    SearchResult {
        tour: best,
        iterations,
        best_iteration,
        accepted_moves: iterations,
    }
}
