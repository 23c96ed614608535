//! The tour value and its cost evaluator.

use crate::distance::DistanceMatrix;

/// Total cyclic distance of visiting `cities` in order and returning to the
/// first one.
///
/// An empty sequence costs `0.0`. A single city costs its diagonal entry,
/// which is zero for any conventional matrix.
///
/// # Panics
///
/// Panics if an index is outside `[0, matrix.size())`.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::tour::tour_cost;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 4.0],
///     vec![2.0, 4.0, 0.0],
/// ])
/// .unwrap();
/// assert!((tour_cost(&[0, 1, 2], &dm) - 7.0).abs() < 1e-10);
/// ```
pub fn tour_cost(cities: &[usize], matrix: &DistanceMatrix) -> f64 {
    let (first, last) = match (cities.first(), cities.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return 0.0,
    };
    let path: f64 = cities.windows(2).map(|w| matrix.get(w[0], w[1])).sum();
    path + matrix.get(last, first)
}

/// A candidate solution: a cyclic ordering of all locations plus its cost.
///
/// The cost is computed by every constructor and never goes stale, since
/// the city order cannot be mutated from outside.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tour {
    cities: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Creates a tour from a city order, evaluating its cost.
    pub fn new(cities: Vec<usize>, matrix: &DistanceMatrix) -> Self {
        debug_assert!(
            cities.len() == matrix.size(),
            "tour length {} does not match matrix size {}",
            cities.len(),
            matrix.size()
        );
        let cost = tour_cost(&cities, matrix);
        Self { cities, cost }
    }

    /// The identity tour `0, 1, ..., n-1`.
    pub fn identity(matrix: &DistanceMatrix) -> Self {
        Self::new((0..matrix.size()).collect(), matrix)
    }

    /// The visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Consumes the tour, returning its visiting order.
    pub fn into_cities(self) -> Vec<usize> {
        self.cities
    }

    /// Cached total cyclic distance.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Re-evaluates the cost from scratch, ignoring the cached value.
    pub fn recompute_cost(&self, matrix: &DistanceMatrix) -> f64 {
        tour_cost(&self.cities, matrix)
    }

    /// Returns `true` if the tour visits each of `0..n` exactly once.
    pub fn is_valid_permutation(&self, n: usize) -> bool {
        if self.cities.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in &self.cities {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }

    /// A copy of this tour with positions `i` and `j` exchanged.
    pub(crate) fn swapped(&self, i: usize, j: usize, matrix: &DistanceMatrix) -> Self {
        let mut cities = self.cities.clone();
        cities.swap(i, j);
        Self::new(cities, matrix)
    }
}
