//! Tour representation and the primitives every strategy shares.
//!
//! - [`Tour`]: a permutation of location indices with its cached cyclic cost
//! - [`tour_cost`]: the cost evaluator
//! - [`neighbors`] / [`random_neighbor`]: the pairwise-swap neighborhood
//! - [`random_permutation`]: uniformly shuffled starting orders
//!
//! Position 0 is never swapped. A cyclic tour has no distinguished start,
//! and rotating it leaves its cost unchanged even for asymmetric matrices,
//! so holding one position fixed loses no tour.

mod neighborhood;
mod random;
mod types;

pub use neighborhood::{neighborhood_size, neighbors, random_neighbor, MoveKey, Neighbor, Swap};
pub use random::random_permutation;
pub use types::{tour_cost, Tour};
