//! Tabu Search configuration.

use crate::error::TspError;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_tsp::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_size(7)
///     .with_aspiration(true);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_size, 7);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Upper bound on neighborhoods explored.
    pub max_iterations: usize,
    /// How many recent moves the tabu memory holds.
    pub tabu_size: usize,
    /// Whether a tabu move may still be taken when it yields a new global
    /// best (aspiration criterion).
    pub aspiration: bool,
    /// Seed for the starting tour; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tabu_size: 10,
            aspiration: false,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu memory capacity.
    pub fn with_tabu_size(mut self, size: usize) -> Self {
        self.tabu_size = size;
        self
    }

    /// Lets tabu moves through when they would set a new best.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Fixes the seed of the starting tour.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects a zero iteration cap or an empty memory.
    pub fn validate(&self) -> Result<(), TspError> {
        if self.max_iterations == 0 {
            return Err(TspError::ZeroMaxIterations);
        }
        if self.tabu_size == 0 {
            return Err(TspError::ZeroTabuSize);
        }
        Ok(())
    }
}
