//! Exhaustive search configuration.

use crate::error::TspError;

/// Configuration for exhaustive enumeration.
///
/// # Examples
///
/// ```
/// use u_tsp::exhaustive::ExhaustiveConfig;
///
/// let config = ExhaustiveConfig::default().with_max_iterations(40_320);
/// assert_eq!(config.max_iterations, 40_320);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustiveConfig {
    /// Maximum number of permutations to evaluate.
    pub max_iterations: usize,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1_000_000,
        }
    }
}

impl ExhaustiveConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(ExhaustiveConfig::default().validate().is_ok());
        assert_eq!(
            ExhaustiveConfig::default().with_max_iterations(0).validate(),
            Err(TspError::ZeroMaxIterations)
        );
    }
}
