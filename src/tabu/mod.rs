//! Tabu Search (TS) over tour neighborhoods.
//!
//! A single-solution trajectory metaheuristic that uses memory structures
//! (the tabu list) to forbid recently applied moves, preventing cycling
//! and encouraging exploration of new regions of the search space.
//!
//! The tenure may adapt to stagnation: it widens to diversify when the
//! search has been stuck for long, and narrows to intensify in between.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod observer;
mod runner;
mod tenure;

pub use config::TabuConfig;
pub use memory::TabuMemory;
pub use observer::{
    IterationEvent, MoveCounts, NoopObserver, ProgressRecord, ProgressSummary, ProgressTracker,
    SearchObserver,
};
pub use runner::{SearchStatus, TabuResult, TabuRunner, TabuSearch, TerminationReason};
pub use tenure::{TabuTenure, DEFAULT_TENURE};
