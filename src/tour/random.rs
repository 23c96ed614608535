//! Random starting tours.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::Tour;
use crate::distance::DistanceMatrix;

/// The identity permutation of `0..n`, uniformly shuffled.
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut cities: Vec<usize> = (0..n).collect();
    cities.shuffle(rng);
    cities
}

impl Tour {
    /// A uniformly random tour over every location of `matrix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use u_tsp::distance::DistanceMatrix;
    /// use u_tsp::tour::Tour;
    ///
    /// let dm = DistanceMatrix::from_data(3, vec![0.0, 1.0, 2.0, 1.0, 0.0, 3.0, 2.0, 3.0, 0.0]).unwrap();
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let tour = Tour::random(&dm, &mut rng);
    /// assert!(tour.is_valid_permutation(3));
    /// ```
    pub fn random<R: Rng + ?Sized>(matrix: &DistanceMatrix, rng: &mut R) -> Self {
        Self::new(random_permutation(matrix.size(), rng), matrix)
    }
}
