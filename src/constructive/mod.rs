//! Constructive heuristics for building initial tours.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor walk, O(n²)
//! - [`random_start_tour`] — Nearest-neighbor walk from a randomly drawn city

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor_tour, random_start_tour};
