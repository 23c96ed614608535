//! Simulated Annealing (SA).
//!
//! Walks the swap neighborhood one random candidate at a time. Improving
//! candidates are always taken; a worsening one by `Δ` is taken with
//! probability `exp(-Δ / T(k))`, where `T` is the caller's temperature
//! schedule. The best tour ever visited is returned.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;
mod schedule;

pub use config::SaConfig;
pub use runner::SaRunner;
pub use schedule::{CoolingSchedule, TemperatureSchedule};
