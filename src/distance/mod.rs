//! Distance matrices.
//!
//! Provides a validated, immutable dense distance matrix.

mod matrix;

pub use matrix::DistanceMatrix;
