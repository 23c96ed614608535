//! Error taxonomy for matrix construction and search configuration.

use std::fmt;

/// Errors detected at the boundary of the search engine.
///
/// Malformed matrices are rejected when a [`DistanceMatrix`] is built;
/// configuration errors are reported by each strategy's `validate` before
/// any search work starts.
///
/// [`DistanceMatrix`]: crate::distance::DistanceMatrix
#[derive(Debug, Clone, PartialEq)]
pub enum TspError {
    /// The matrix has no rows.
    EmptyMatrix,
    /// A row's length differs from the number of rows.
    NonSquareMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Flat data does not hold `size * size` entries.
    DataLengthMismatch { size: usize, len: usize },
    /// A distance is negative, NaN or infinite.
    InvalidDistance { from: usize, to: usize, value: f64 },
    /// `max_iterations` was zero.
    ZeroMaxIterations,
    /// `tabu_size` was zero.
    ZeroTabuSize,
    /// The temperature schedule produced a non-positive or non-finite value.
    NonPositiveTemperature { iteration: usize, temperature: f64 },
    /// A built-in cooling schedule has out-of-range parameters.
    InvalidCooling(String),
}

impl fmt::Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TspError::EmptyMatrix => write!(f, "distance matrix is empty"),
            TspError::NonSquareMatrix {
                row,
                expected,
                found,
            } => write!(
                f,
                "distance matrix is not square: row {row} has {found} entries, expected {expected}"
            ),
            TspError::DataLengthMismatch { size, len } => write!(
                f,
                "distance data holds {len} entries, expected {} for size {size}",
                size * size
            ),
            TspError::InvalidDistance { from, to, value } => {
                write!(f, "invalid distance {value} from {from} to {to}")
            }
            TspError::ZeroMaxIterations => write!(f, "max_iterations must be positive"),
            TspError::ZeroTabuSize => write!(f, "tabu_size must be positive"),
            TspError::NonPositiveTemperature {
                iteration,
                temperature,
            } => write!(
                f,
                "temperature schedule returned {temperature} at iteration {iteration}, expected a positive value"
            ),
            TspError::InvalidCooling(msg) => write!(f, "invalid cooling schedule: {msg}"),
        }
    }
}

impl std::error::Error for TspError {}
