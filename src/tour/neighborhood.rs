//! Pairwise-swap neighborhood.
//!
//! # Ordering
//!
//! Candidates are produced for every position pair `1 <= i < j < n`, in
//! increasing `i` and then increasing `j`. Strategies that take "the first
//! candidate at minimum cost" rely on this order for reproducible ties.
//!
//! # Complexity
//!
//! `C(n-1, 2)` candidates, each evaluated in O(n), so O(n³) per call.

use rand::Rng;

use super::types::Tour;
use crate::distance::DistanceMatrix;

/// Number of swap neighbors of an `n`-city tour: `C(n-1, 2)`, or 0 for n < 3.
pub fn neighborhood_size(n: usize) -> usize {
    if n < 3 {
        0
    } else {
        (n - 1) * (n - 2) / 2
    }
}

/// Exchange of the cities at positions `i` and `j` (`1 <= i < j`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swap {
    pub i: usize,
    pub j: usize,
}

/// The unordered pair of cities exchanged by a move.
///
/// Used as the tabu attribute: a swap of the same two cities is the same
/// move no matter where in the tour they currently sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveKey {
    pub low: usize,
    pub high: usize,
}

impl MoveKey {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }
}

impl Swap {
    /// Maps a rank in `0..neighborhood_size(n)` to its swap in generation
    /// order.
    ///
    /// Returns `None` if `rank` is out of range.
    pub fn from_rank(rank: usize, n: usize) -> Option<Self> {
        if rank >= neighborhood_size(n) {
            return None;
        }
        let mut rest = rank;
        for i in 1..n - 1 {
            let row = n - 1 - i;
            if rest < row {
                return Some(Self { i, j: i + 1 + rest });
            }
            rest -= row;
        }
        None
    }

    /// The cities this swap exchanges in `cities`.
    pub fn key(&self, cities: &[usize]) -> MoveKey {
        MoveKey::new(cities[self.i], cities[self.j])
    }
}

/// A candidate tour and the swap that produced it from its base tour.
#[derive(Debug, Clone)]
pub struct Neighbor {
    pub tour: Tour,
    pub swap: Swap,
    pub key: MoveKey,
}

impl Neighbor {
    fn from_swap(base: &Tour, swap: Swap, matrix: &DistanceMatrix) -> Self {
        Self {
            tour: base.swapped(swap.i, swap.j, matrix),
            swap,
            key: swap.key(base.cities()),
        }
    }
}

/// All single-swap neighbors of `tour`, each with its cost evaluated.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::tour::{neighbors, Tour};
///
/// let dm = DistanceMatrix::from_data(4, vec![0.0; 16]).unwrap();
/// let hood = neighbors(&Tour::identity(&dm), &dm);
/// assert_eq!(hood.len(), 3);
/// assert_eq!(hood[0].tour.cities(), &[0, 2, 1, 3]);
/// ```
pub fn neighbors(tour: &Tour, matrix: &DistanceMatrix) -> Vec<Neighbor> {
    let n = tour.len();
    let mut hood = Vec::with_capacity(neighborhood_size(n));
    for i in 1..n.saturating_sub(1) {
        for j in (i + 1)..n {
            hood.push(Neighbor::from_swap(tour, Swap { i, j }, matrix));
        }
    }
    hood
}

/// One neighbor drawn uniformly from the swap neighborhood of `tour`.
///
/// Draws the same distribution as indexing [`neighbors`] with a uniform
/// random position, but evaluates a single candidate. Returns `None` when
/// the neighborhood is empty (fewer than 3 cities).
pub fn random_neighbor<R: Rng>(
    tour: &Tour,
    matrix: &DistanceMatrix,
    rng: &mut R,
) -> Option<Neighbor> {
    let size = neighborhood_size(tour.len());
    if size == 0 {
        return None;
    }
    let swap = Swap::from_rank(rng.random_range(0..size), tour.len())?;
    Some(Neighbor::from_swap(tour, swap, matrix))
}
