//! Temperature schedules.

use crate::error::TspError;

/// Maps an iteration number (1-based) to a temperature.
///
/// Must be a pure function of the iteration. The runner rejects a schedule
/// that yields a non-positive or non-finite temperature for any iteration
/// it will execute.
///
/// Any `Fn(usize) -> f64` is a schedule:
///
/// ```
/// use u_tsp::sa::TemperatureSchedule;
///
/// let schedule = |k: usize| 100.0 / k as f64;
/// assert!((schedule.temperature(4) - 25.0).abs() < 1e-10);
/// ```
pub trait TemperatureSchedule {
    /// Temperature at `iteration`.
    fn temperature(&self, iteration: usize) -> f64;

    /// Checks the schedule's own parameters.
    fn validate(&self) -> Result<(), TspError> {
        Ok(())
    }
}

impl<F> TemperatureSchedule for F
where
    F: Fn(usize) -> f64,
{
    fn temperature(&self, iteration: usize) -> f64 {
        self(iteration)
    }
}

/// Built-in cooling schedules, written as closed forms in the iteration.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - Linear: fixed-duration cooling
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// The same temperature at every iteration.
    Constant { temperature: f64 },

    /// `T_k = initial * alpha^(k-1)`.
    ///
    /// Most widely used. Typical `alpha`: 0.95–0.999.
    Geometric {
        initial: f64,
        /// Cooling factor in (0, 1]. Higher = slower cooling.
        alpha: f64,
    },

    /// Decreases uniformly from `initial` to `min` over `horizon`
    /// iterations, then holds at `min`.
    Linear { initial: f64, min: f64, horizon: usize },

    /// `T_{k+1} = T_k / (1 + beta * T_k)`, i.e.
    /// `T_k = initial / (1 + (k-1) * beta * initial)`.
    ///
    /// Cools fast at high T, slow at low T.
    LundyMees {
        initial: f64,
        /// Typically `(T_0 - T_min) / (max_iter * T_0 * T_min)`.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric {
            initial: 100.0,
            alpha: 0.995,
        }
    }
}

impl TemperatureSchedule for CoolingSchedule {
    fn temperature(&self, iteration: usize) -> f64 {
        let step = iteration.saturating_sub(1) as f64;
        match *self {
            CoolingSchedule::Constant { temperature } => temperature,
            CoolingSchedule::Geometric { initial, alpha } => initial * alpha.powf(step),
            CoolingSchedule::Linear {
                initial,
                min,
                horizon,
            } => {
                if horizon == 0 {
                    min
                } else {
                    (initial - step * (initial - min) / horizon as f64).max(min)
                }
            }
            CoolingSchedule::LundyMees { initial, beta } => initial / (1.0 + step * beta * initial),
        }
    }

    fn validate(&self) -> Result<(), TspError> {
        let positive = |name: &str, t: f64| {
            if t > 0.0 && t.is_finite() {
                Ok(())
            } else {
                Err(TspError::InvalidCooling(format!(
                    "{name} must be positive and finite, got {t}"
                )))
            }
        };
        match *self {
            CoolingSchedule::Constant { temperature } => positive("temperature", temperature),
            CoolingSchedule::Geometric { initial, alpha } => {
                positive("initial temperature", initial)?;
                if alpha <= 0.0 || alpha > 1.0 {
                    return Err(TspError::InvalidCooling(format!(
                        "geometric alpha must be in (0, 1], got {alpha}"
                    )));
                }
                Ok(())
            }
            CoolingSchedule::Linear { initial, min, .. } => {
                positive("initial temperature", initial)?;
                positive("min temperature", min)?;
                if min > initial {
                    return Err(TspError::InvalidCooling(
                        "min temperature must not exceed initial temperature".into(),
                    ));
                }
                Ok(())
            }
            CoolingSchedule::LundyMees { initial, beta } => {
                positive("initial temperature", initial)?;
                if beta < 0.0 || !beta.is_finite() {
                    return Err(TspError::InvalidCooling(format!(
                        "lundy-mees beta must be non-negative, got {beta}"
                    )));
                }
                Ok(())
            }
        }
    }
}
