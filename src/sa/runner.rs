//! SA execution loop.

use rand::Rng;

use super::config::SaConfig;
use super::schedule::TemperatureSchedule;
use crate::distance::DistanceMatrix;
use crate::error::TspError;
use crate::result::SearchResult;
use crate::rng::create_rng;
use crate::tour::{neighborhood_size, random_neighbor, Tour};

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from a random tour, seeding from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::distance::DistanceMatrix;
    /// use u_tsp::sa::{CoolingSchedule, SaConfig, SaRunner};
    ///
    /// let dm = DistanceMatrix::from_rows(vec![
    ///     vec![0.0, 3.0, 4.0, 2.0],
    ///     vec![3.0, 0.0, 4.0, 6.0],
    ///     vec![4.0, 4.0, 0.0, 5.0],
    ///     vec![2.0, 6.0, 5.0, 0.0],
    /// ])
    /// .unwrap();
    /// let schedule = CoolingSchedule::Geometric { initial: 10.0, alpha: 0.99 };
    /// let result = SaRunner::run(&dm, &SaConfig::default().with_seed(42), &schedule).unwrap();
    /// assert_eq!(result.iterations, 1000);
    /// ```
    pub fn run<S>(matrix: &DistanceMatrix, config: &SaConfig, schedule: &S) -> Result<SearchResult, TspError>
    where
        S: TemperatureSchedule + ?Sized,
    {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(matrix, config, schedule, &mut rng)
    }

    /// Runs SA from a random tour drawn from `rng`.
    pub fn run_with_rng<S, R>(
        matrix: &DistanceMatrix,
        config: &SaConfig,
        schedule: &S,
        rng: &mut R,
    ) -> Result<SearchResult, TspError>
    where
        S: TemperatureSchedule + ?Sized,
        R: Rng,
    {
        Self::validate(config, schedule)?;
        let start = Tour::random(matrix, rng);
        Ok(anneal(matrix, config, schedule, start, rng))
    }

    /// Runs SA from a given starting tour.
    pub fn run_from<S, R>(
        matrix: &DistanceMatrix,
        config: &SaConfig,
        schedule: &S,
        start: Tour,
        rng: &mut R,
    ) -> Result<SearchResult, TspError>
    where
        S: TemperatureSchedule + ?Sized,
        R: Rng,
    {
        Self::validate(config, schedule)?;
        Ok(anneal(matrix, config, schedule, start, rng))
    }

    /// Checks the configuration and that the schedule stays positive and
    /// finite for every iteration that will run.
    pub fn validate<S>(config: &SaConfig, schedule: &S) -> Result<(), TspError>
    where
        S: TemperatureSchedule + ?Sized,
    {
        config.validate()?;
        schedule.validate()?;
        for iteration in 1..=config.max_iterations {
            let temperature = schedule.temperature(iteration);
            if !(temperature > 0.0 && temperature.is_finite()) {
                return Err(TspError::NonPositiveTemperature {
                    iteration,
                    temperature,
                });
            }
        }
        Ok(())
    }
}

/// The annealing loop; `config` and `schedule` are already validated.
#[tracing::instrument(level = "debug", name = "sa", skip_all)]
fn anneal<S, R>(
    matrix: &DistanceMatrix,
    config: &SaConfig,
    schedule: &S,
    start: Tour,
    rng: &mut R,
) -> SearchResult
where
    S: TemperatureSchedule + ?Sized,
    R: Rng,
{
    if neighborhood_size(start.len()) == 0 {
        return SearchResult::unmoved(start);
    }

    let mut current = start;
    let mut best = current.clone();
    let mut best_iteration = 0;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;

    for iteration in 1..=config.max_iterations {
        let Some(neighbor) = random_neighbor(&current, matrix, rng) else {
            break;
        };
        let delta = neighbor.tour.cost() - current.cost();

        // Metropolis acceptance criterion
        let accept = if delta < 0.0 {
            improving_moves += 1;
            true
        } else {
            let probability = (-delta.abs() / schedule.temperature(iteration)).exp();
            rng.random::<f64>() < probability
        };

        if accept {
            current = neighbor.tour;
            accepted_moves += 1;

            if current.cost() < best.cost() {
                tracing::trace!(iteration, cost = current.cost(), "new best");
                best = current.clone();
                best_iteration = iteration;
            }
        }
    }

    tracing::debug!(
        iterations = config.max_iterations,
        accepted_moves,
        improving_moves,
        cost = best.cost(),
        "simulated annealing finished"
    );

    SearchResult {
        tour: best,
        iterations: config.max_iterations,
        best_iteration,
        accepted_moves,
    }
}
