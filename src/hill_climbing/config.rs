//! Hill climbing configuration.

use crate::error::TspError;

/// Neighbor selection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HillClimbingVariant {
    /// Move to the cheapest neighbor; stop when none improves.
    #[default]
    BestImprovement,
    /// Try one uniformly random neighbor per iteration.
    RandomNeighbor,
}

/// Settings for one hill climbing run.
///
/// # Examples
///
/// ```
/// use u_tsp::hill_climbing::{HillClimbingConfig, HillClimbingVariant};
///
/// let config = HillClimbingConfig::default()
///     .with_max_iterations(500)
///     .with_variant(HillClimbingVariant::RandomNeighbor)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 500);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbingConfig {
    /// Iteration cap; see [`HillClimbingVariant`] for what an iteration is.
    pub max_iterations: usize,
    /// Neighbor selection rule.
    pub variant: HillClimbingVariant,
    /// Seed for the starting tour and neighbor draws.
    pub seed: Option<u64>,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            variant: HillClimbingVariant::default(),
            seed: None,
        }
    }
}

impl HillClimbingConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the neighbor selection rule.
    pub fn with_variant(mut self, variant: HillClimbingVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects a zero iteration cap.
    pub fn validate(&self) -> Result<(), TspError> {
        if self.max_iterations == 0 {
            return Err(TspError::ZeroMaxIterations);
        }
        Ok(())
    }
}
