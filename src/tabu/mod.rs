//! Tabu Search (TS).
//!
//! Best-admissible-move local search over the swap neighborhood. Recently
//! swapped city pairs are held in a bounded FIFO memory and may not be
//! swapped again until they expire, which lets the search walk uphill out
//! of local optima without immediately falling back.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;

pub use config::TabuConfig;
pub use memory::TabuMemory;
pub use runner::TabuRunner;
