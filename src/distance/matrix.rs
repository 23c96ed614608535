//! Dense distance matrix.

use crate::error::TspError;

/// A dense n×n distance matrix stored in row-major order.
///
/// Entries are non-negative and finite. The matrix need not be symmetric.
/// Once built it cannot be mutated, so a single instance can be shared
/// read-only between concurrent searches.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 5.0],
///     vec![4.0, 5.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// assert!((dm.get(1, 2) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix"))]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Unchecked wire form; deserialization goes through [`DistanceMatrix::from_data`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    size: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = TspError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        Self::from_data(raw.size, raw.data)
    }
}

impl DistanceMatrix {
    /// Builds a matrix from nested rows.
    ///
    /// Fails if there are no rows, if any row's length differs from the
    /// number of rows, or if any entry is negative, NaN or infinite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TspError> {
        let size = rows.len();
        if size == 0 {
            return Err(TspError::EmptyMatrix);
        }
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(TspError::NonSquareMatrix {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Self::from_data(size, data)
    }

    /// Builds a matrix from a flat row-major grid.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, TspError> {
        if size == 0 {
            return Err(TspError::EmptyMatrix);
        }
        if data.len() != size * size {
            return Err(TspError::DataLengthMismatch {
                size,
                len: data.len(),
            });
        }
        if let Some(k) = data.iter().position(|d| !d.is_finite() || *d < 0.0) {
            return Err(TspError::InvalidDistance {
                from: k / size,
                to: k % size,
                value: data[k],
            });
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        debug_assert!(from < self.size && to < self.size);
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The outgoing distances of `from`.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
