//! Domain model types for traveling salesman instances.
//!
//! Provides named cities with planar coordinates and the tour utilities
//! every other module builds on: closed-tour length, permutation checks,
//! and in-place move application.

mod city;
mod tour;

pub use city::City;
pub use tour::{apply_swap, apply_two_opt, tour_length, validate_tour, MIN_TOUR_LEN};
