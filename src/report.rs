//! Timed strategy runs and route formatting.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::distance::DistanceMatrix;
use crate::error::TspError;
use crate::exhaustive::{ExhaustiveConfig, ExhaustiveRunner};
use crate::hill_climbing::{HillClimbingConfig, HillClimbingRunner, HillClimbingVariant};
use crate::result::SearchResult;
use crate::rng::create_rng;
use crate::sa::{CoolingSchedule, SaConfig, SaRunner};
use crate::tabu::{TabuConfig, TabuRunner};
use crate::tour::Tour;

/// Selects what [`run_strategy`] executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// A single random tour; the baseline the searches start from.
    RandomTour,
    Exhaustive,
    HillClimbingBest,
    HillClimbingRandom,
    Tabu,
    SimulatedAnnealing,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::RandomTour,
        Strategy::HillClimbingBest,
        Strategy::HillClimbingRandom,
        Strategy::Tabu,
        Strategy::SimulatedAnnealing,
        Strategy::Exhaustive,
    ];

    /// Short identifier, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::RandomTour => "random",
            Strategy::Exhaustive => "exhaustive",
            Strategy::HillClimbingBest => "hill-best",
            Strategy::HillClimbingRandom => "hill-random",
            Strategy::Tabu => "tabu",
            Strategy::SimulatedAnnealing => "sa",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::RandomTour => "Random tour",
            Strategy::Exhaustive => "Exhaustive search",
            Strategy::HillClimbingBest => "Hill climbing (best improvement)",
            Strategy::HillClimbingRandom => "Hill climbing (random neighbor)",
            Strategy::Tabu => "Tabu search",
            Strategy::SimulatedAnnealing => "Simulated annealing",
        };
        f.write_str(label)
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Strategy::ALL.iter().map(Strategy::name).collect();
                format!("unknown strategy '{s}', expected one of: {}", known.join(", "))
            })
    }
}

/// Parameters shared by every strategy in a comparison run.
///
/// Each strategy seeds its own random source from `seed`, so with a fixed
/// seed every local search starts from the same random tour.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSettings {
    pub max_iterations: usize,
    pub tabu_size: usize,
    pub aspiration: bool,
    pub cooling: CoolingSchedule,
    pub seed: Option<u64>,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tabu_size: 10,
            aspiration: false,
            cooling: CoolingSchedule::default(),
            seed: None,
        }
    }
}

impl RunSettings {
    fn exhaustive(&self) -> ExhaustiveConfig {
        ExhaustiveConfig::default().with_max_iterations(self.max_iterations)
    }

    fn hill_climbing(&self, variant: HillClimbingVariant) -> HillClimbingConfig {
        HillClimbingConfig::default()
            .with_max_iterations(self.max_iterations)
            .with_variant(variant)
    }

    fn tabu(&self) -> TabuConfig {
        TabuConfig::default()
            .with_max_iterations(self.max_iterations)
            .with_tabu_size(self.tabu_size)
            .with_aspiration(self.aspiration)
    }

    fn sa(&self) -> SaConfig {
        SaConfig::default().with_max_iterations(self.max_iterations)
    }

    /// Checks the settings of every strategy in `strategies` without running
    /// any of them, including the cooling schedule over the whole budget.
    pub fn validate(&self, strategies: &[Strategy]) -> Result<(), TspError> {
        for &strategy in strategies {
            match strategy {
                Strategy::RandomTour => {}
                Strategy::Exhaustive => self.exhaustive().validate()?,
                Strategy::HillClimbingBest | Strategy::HillClimbingRandom => {
                    self.hill_climbing(HillClimbingVariant::default()).validate()?
                }
                Strategy::Tabu => self.tabu().validate()?,
                Strategy::SimulatedAnnealing => SaRunner::validate(&self.sa(), &self.cooling)?,
            }
        }
        Ok(())
    }
}

/// Outcome of one timed strategy run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub strategy: Strategy,
    pub result: SearchResult,
    pub elapsed: Duration,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: cost {:.2}, {} iterations, {:.3} ms",
            self.strategy,
            self.result.cost(),
            self.result.iterations,
            self.elapsed.as_secs_f64() * 1e3
        )
    }
}

/// Runs one strategy and measures its wall-clock time.
pub fn run_strategy(
    matrix: &DistanceMatrix,
    strategy: Strategy,
    settings: &RunSettings,
) -> Result<RunReport, TspError> {
    let mut rng = create_rng(settings.seed);
    let started = Instant::now();

    let result = match strategy {
        Strategy::RandomTour => SearchResult::unmoved(Tour::random(matrix, &mut rng)),
        Strategy::Exhaustive => ExhaustiveRunner::run(matrix, &settings.exhaustive())?,
        Strategy::HillClimbingBest | Strategy::HillClimbingRandom => {
            let variant = if strategy == Strategy::HillClimbingBest {
                HillClimbingVariant::BestImprovement
            } else {
                HillClimbingVariant::RandomNeighbor
            };
            HillClimbingRunner::run_with_rng(matrix, &settings.hill_climbing(variant), &mut rng)?
        }
        Strategy::Tabu => TabuRunner::run_with_rng(matrix, &settings.tabu(), &mut rng)?,
        Strategy::SimulatedAnnealing => {
            SaRunner::run_with_rng(matrix, &settings.sa(), &settings.cooling, &mut rng)?
        }
    };

    let report = RunReport {
        strategy,
        result,
        elapsed: started.elapsed(),
    };
    tracing::info!("{report}");
    Ok(report)
}

/// Runs several strategies, in input order.
///
/// Every strategy's settings are validated before the first one starts, so
/// a bad setting fails the whole call up front instead of discarding runs
/// that already finished.
///
/// With the `parallel` feature the strategies run concurrently on the rayon
/// pool, each with its own random source; reported times then include
/// contention between them.
pub fn run_all(
    matrix: &DistanceMatrix,
    strategies: &[Strategy],
    settings: &RunSettings,
) -> Result<Vec<RunReport>, TspError> {
    settings.validate(strategies)?;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        strategies
            .par_iter()
            .map(|&s| run_strategy(matrix, s, settings))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        strategies
            .iter()
            .map(|&s| run_strategy(matrix, s, settings))
            .collect()
    }
}

/// Renders a tour as `A -> B -> C -> A`.
///
/// Indices without a name are printed as numbers.
///
/// # Examples
///
/// ```
/// use u_tsp::report::format_route;
///
/// let names = vec!["Oslo".to_string(), "Bergen".to_string()];
/// assert_eq!(format_route(&[1, 0], &names), "Bergen -> Oslo -> Bergen");
/// ```
pub fn format_route(cities: &[usize], names: &[String]) -> String {
    let name = |c: usize| names.get(c).cloned().unwrap_or_else(|| c.to_string());
    let Some(&first) = cities.first() else {
        return String::new();
    };
    let mut parts: Vec<String> = cities.iter().map(|&c| name(c)).collect();
    parts.push(name(first));
    parts.join(" -> ")
}
