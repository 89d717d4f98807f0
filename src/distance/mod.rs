//! Distance matrices.
//!
//! Provides the dense, read-only distance matrix the search consumes.

mod matrix;

pub use matrix::DistanceMatrix;
