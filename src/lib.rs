//! # tsp-tabu
//!
//! Approximate traveling salesman solver built on tabu search over the
//! 2-opt neighborhood, with optional city-swap moves, dynamic tenure, and
//! progress observation.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, tour length, permutation checks, move application)
//! - [`distance`] — Distance matrix
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor)
//! - [`instance`] — Built-in city data and city-subset selection
//! - [`local_search`] — Neighborhoods (2-opt, Swap) and move descriptors
//! - [`tabu`] — Tabu search engine, configuration, memory, and observers
//! - [`error`] — Error type shared by every fallible operation
//!
//! ## Example
//!
//! ```
//! use tsp_tabu::constructive::nearest_neighbor_tour;
//! use tsp_tabu::distance::DistanceMatrix;
//! use tsp_tabu::tabu::{TabuConfig, TabuRunner, TabuTenure};
//!
//! let dm = DistanceMatrix::from_points(&[
//!     (0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, 1.0),
//! ]);
//! let initial = nearest_neighbor_tour(&dm, 0);
//! let config = TabuConfig::default()
//!     .with_tabu_tenure(TabuTenure::Sqrt)
//!     .with_max_iterations(100);
//!
//! let result = TabuRunner::run(&initial, &dm, &config).unwrap();
//! assert!((result.best_length - (6.0 + 8f64.sqrt())).abs() < 1e-9);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod instance;
pub mod local_search;
pub mod models;
pub mod tabu;

pub use error::SearchError;
