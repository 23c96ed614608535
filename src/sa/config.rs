//! SA configuration.

use crate::error::TspError;

/// Settings for one annealing run.
///
/// The temperature schedule is passed to the runner separately, since any
/// `Fn(usize) -> f64` can serve as one.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::SaConfig;
///
/// let config = SaConfig::default().with_max_iterations(10_000).with_seed(42);
/// assert_eq!(config.max_iterations, 10_000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Number of candidate moves to draw. SA always runs all of them.
    pub max_iterations: usize,

    /// Seed for the starting tour, neighbor draws and acceptance rolls.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), TspError> {
        if self.max_iterations == 0 {
            return Err(TspError::ZeroMaxIterations);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = SaConfig::default().with_max_iterations(0);
        assert_eq!(config.validate(), Err(TspError::ZeroMaxIterations));
    }
}
