//! Hill climbing execution loops.

use rand::Rng;

use super::config::{HillClimbingConfig, HillClimbingVariant};
use crate::distance::DistanceMatrix;
use crate::error::TspError;
use crate::result::SearchResult;
use crate::rng::create_rng;
use crate::tour::{neighborhood_size, neighbors, random_neighbor, Neighbor, Tour};

/// Hill Climbing runner.
pub struct HillClimbingRunner;

impl HillClimbingRunner {
    /// Runs hill climbing from a random tour, seeding from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::distance::DistanceMatrix;
    /// use u_tsp::hill_climbing::{HillClimbingConfig, HillClimbingRunner};
    ///
    /// let dm = DistanceMatrix::from_rows(vec![
    ///     vec![0.0, 2.0, 9.0, 10.0],
    ///     vec![1.0, 0.0, 6.0, 4.0],
    ///     vec![15.0, 7.0, 0.0, 8.0],
    ///     vec![6.0, 3.0, 12.0, 0.0],
    /// ])
    /// .unwrap();
    /// let result = HillClimbingRunner::run(&dm, &HillClimbingConfig::default().with_seed(1)).unwrap();
    /// assert!(result.tour.is_valid_permutation(4));
    /// ```
    pub fn run(matrix: &DistanceMatrix, config: &HillClimbingConfig) -> Result<SearchResult, TspError> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs hill climbing from a random tour drawn from `rng`.
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &HillClimbingConfig,
        rng: &mut R,
    ) -> Result<SearchResult, TspError> {
        config.validate()?;
        let start = Tour::random(matrix, rng);
        Self::run_from(matrix, config, start, rng)
    }

    /// Runs hill climbing from a given starting tour.
    ///
    /// With [`HillClimbingVariant::BestImprovement`] the outcome depends only
    /// on `start`; `rng` is not consumed.
    #[tracing::instrument(level = "debug", name = "hill_climbing", skip_all, fields(variant = ?config.variant))]
    pub fn run_from<R: Rng>(
        matrix: &DistanceMatrix,
        config: &HillClimbingConfig,
        start: Tour,
        rng: &mut R,
    ) -> Result<SearchResult, TspError> {
        config.validate()?;

        if neighborhood_size(start.len()) == 0 {
            return Ok(SearchResult::unmoved(start));
        }

        let result = match config.variant {
            HillClimbingVariant::BestImprovement => {
                best_improvement(matrix, config.max_iterations, start)
            }
            HillClimbingVariant::RandomNeighbor => {
                random_improvement(matrix, config.max_iterations, start, rng)
            }
        };

        tracing::debug!(
            iterations = result.iterations,
            accepted = result.accepted_moves,
            cost = result.cost(),
            "hill climbing finished"
        );
        Ok(result)
    }
}

/// First neighbor at minimum cost, in generation order.
fn cheapest(hood: Vec<Neighbor>) -> Option<Neighbor> {
    let mut best: Option<Neighbor> = None;
    for nb in hood {
        if best.as_ref().is_none_or(|b| nb.tour.cost() < b.tour.cost()) {
            best = Some(nb);
        }
    }
    best
}

fn best_improvement(matrix: &DistanceMatrix, max_iterations: usize, start: Tour) -> SearchResult {
    let mut current = start;
    let mut iterations = 0;
    let mut accepted_moves = 0;
    let mut best_iteration = 0;

    while iterations < max_iterations {
        iterations += 1;
        match cheapest(neighbors(&current, matrix)) {
            Some(nb) if nb.tour.cost() < current.cost() => {
                tracing::trace!(iteration = iterations, cost = nb.tour.cost(), swap = ?nb.swap, "improved");
                current = nb.tour;
                accepted_moves += 1;
                best_iteration = iterations;
            }
            // local optimum
            _ => break,
        }
    }

    SearchResult {
        tour: current,
        iterations,
        best_iteration,
        accepted_moves,
    }
}

fn random_improvement<R: Rng>(
    matrix: &DistanceMatrix,
    max_iterations: usize,
    start: Tour,
    rng: &mut R,
) -> SearchResult {
    let mut current = start;
    let mut accepted_moves = 0;
    let mut best_iteration = 0;

    for iteration in 1..=max_iterations {
        let Some(nb) = random_neighbor(&current, matrix, rng) else {
            break;
        };
        if nb.tour.cost() < current.cost() {
            tracing::trace!(iteration, cost = nb.tour.cost(), "improved");
            current = nb.tour;
            accepted_moves += 1;
            best_iteration = iteration;
        }
    }

    SearchResult {
        tour: current,
        iterations: max_iterations,
        best_iteration,
        accepted_moves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ring_matrix(n: usize) -> DistanceMatrix {
        // cities on a circle: neighbors in index order are 1 apart
        let mut rows = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in 0..n {
                let d = i.abs_diff(j);
                rows[i][j] = d.min(n - d) as f64;
            }
        }
        DistanceMatrix::from_rows(rows).expect("valid")
    }

    // Every distance is 1 except 0<->1, which costs 10. From the identity
    // tour (cost 14) only the (1,2) and (1,3) swaps drop that edge, and
    // both reach cost 5.
    fn tied_matrix() -> DistanceMatrix {
        let n = 5;
        let data = (0..n * n)
            .map(|k| match (k / n, k % n) {
                (i, j) if i == j => 0.0,
                (0, 1) | (1, 0) => 10.0,
                _ => 1.0,
            })
            .collect();
        DistanceMatrix::from_data(n, data).expect("valid")
    }

    #[test]
    fn test_best_improvement_ties_go_to_first_swap() {
        let dm = tied_matrix();
        let hood = neighbors(&Tour::identity(&dm), &dm);
        assert_eq!(hood[0].tour.cost(), 5.0);
        assert_eq!(hood[1].tour.cost(), 5.0);

        let config = HillClimbingConfig::default().with_max_iterations(1);
        let result =
            HillClimbingRunner::run_from(&dm, &config, Tour::identity(&dm), &mut StdRng::seed_from_u64(0))
                .expect("valid");
        assert_eq!(result.tour.cities(), &[0, 2, 1, 3, 4]);
        assert_eq!(result.cost(), 5.0);
    }

    #[test]
    fn test_cheapest_keeps_first_minimum() {
        let dm = tied_matrix();
        let best = cheapest(neighbors(&Tour::identity(&dm), &dm)).expect("non-empty");
        assert_eq!(best.swap, crate::tour::Swap { i: 1, j: 2 });
    }

    #[test]
    fn test_best_improvement_never_worse_than_start() {
        let dm = ring_matrix(9);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let start = Tour::random(&dm, &mut rng);
            let start_cost = start.cost();
            let config = HillClimbingConfig::default().with_max_iterations(100);
            let result = HillClimbingRunner::run_from(&dm, &config, start, &mut rng).expect("valid");
            assert!(result.cost() <= start_cost + 1e-10);
            assert!(result.iterations <= 100);
            assert!(result.tour.is_valid_permutation(9));
            assert!((result.cost() - result.tour.recompute_cost(&dm)).abs() < 1e-10);
        }
    }

    #[test]
    fn test_best_improvement_reaches_local_optimum() {
        let dm = ring_matrix(7);
        let config = HillClimbingConfig::default().with_max_iterations(10_000).with_seed(3);
        let result = HillClimbingRunner::run(&dm, &config).expect("valid");
        assert!(result.iterations < 10_000);
        let hood = neighbors(&result.tour, &dm);
        assert!(hood.iter().all(|nb| nb.tour.cost() >= result.cost()));
    }

    #[test]
    fn test_best_improvement_deterministic_from_start() {
        let dm = ring_matrix(8);
        let start = Tour::new(vec![0, 4, 2, 6, 1, 5, 3, 7], &dm);
        let config = HillClimbingConfig::default();
        let a = HillClimbingRunner::run_from(&dm, &config, start.clone(), &mut StdRng::seed_from_u64(1))
            .expect("valid");
        let b = HillClimbingRunner::run_from(&dm, &config, start, &mut StdRng::seed_from_u64(99))
            .expect("valid");
        assert_eq!(a.tour.cities(), b.tour.cities());
        assert_eq!(a.iterations, b.iterations);
    }

    #[test]
    fn test_best_improvement_iteration_cap() {
        let dm = ring_matrix(10);
        let start = Tour::new(vec![0, 5, 1, 6, 2, 7, 3, 8, 4, 9], &dm);
        let config = HillClimbingConfig::default().with_max_iterations(1);
        let result =
            HillClimbingRunner::run_from(&dm, &config, start, &mut StdRng::seed_from_u64(0)).expect("valid");
        assert_eq!(result.iterations, 1);
        assert_eq!(result.accepted_moves, 1);
    }

    #[test]
    fn test_random_neighbor_runs_full_budget() {
        let dm = ring_matrix(8);
        let config = HillClimbingConfig::default()
            .with_variant(HillClimbingVariant::RandomNeighbor)
            .with_max_iterations(250)
            .with_seed(42);
        let result = HillClimbingRunner::run(&dm, &config).expect("valid");
        assert_eq!(result.iterations, 250);
        assert!(result.accepted_moves <= 250);
        assert!(result.best_iteration <= 250);
        assert!(result.tour.is_valid_permutation(8));
    }

    #[test]
    fn test_random_neighbor_never_worse_than_start() {
        let dm = ring_matrix(8);
        let mut rng = StdRng::seed_from_u64(5);
        let start = Tour::random(&dm, &mut rng);
        let start_cost = start.cost();
        let config = HillClimbingConfig::default().with_variant(HillClimbingVariant::RandomNeighbor);
        let result = HillClimbingRunner::run_from(&dm, &config, start, &mut rng).expect("valid");
        assert!(result.cost() <= start_cost + 1e-10);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let dm = ring_matrix(8);
        let config = HillClimbingConfig::default()
            .with_variant(HillClimbingVariant::RandomNeighbor)
            .with_seed(7);
        let a = HillClimbingRunner::run(&dm, &config).expect("valid");
        let b = HillClimbingRunner::run(&dm, &config).expect("valid");
        assert_eq!(a.tour.cities(), b.tour.cities());
    }

    #[test]
    fn test_degenerate_sizes_return_immediately() {
        for n in 1..3 {
            let dm = ring_matrix(n);
            for variant in [HillClimbingVariant::BestImprovement, HillClimbingVariant::RandomNeighbor] {
                let config = HillClimbingConfig::default().with_variant(variant).with_seed(1);
                let result = HillClimbingRunner::run(&dm, &config).expect("valid");
                assert_eq!(result.iterations, 0);
                assert_eq!(result.tour.len(), n);
            }
        }
    }

    #[test]
    fn test_invalid_config() {
        let dm = ring_matrix(4);
        let config = HillClimbingConfig::default().with_max_iterations(0);
        assert_eq!(
            HillClimbingRunner::run(&dm, &config).unwrap_err(),
            TspError::ZeroMaxIterations
        );
    }
}
