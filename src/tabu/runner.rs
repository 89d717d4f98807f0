//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a caller-supplied tour
//! 2. At each iteration:
//!    a. Scan the 2-opt neighborhood (and, optionally, the swap neighborhood)
//!    b. Keep the shortest admissible neighbor: not tabu, or tabu but shorter
//!       than the best tour seen (aspiration). Ties go to the first one found.
//!    c. Apply it and record its move in the tabu memory
//!    d. Update the best tour, or count one more iteration without improvement
//!    e. Notify the observer
//! 3. Terminate on the iteration cap, the time limit, or stagnation
//! 4. Otherwise adapt the tenure to stagnation, if enabled
//!
//! The engine is synchronous and owns all of its state, so independent
//! searches may run in parallel over one shared [`DistanceMatrix`].
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::error::SearchError;
use crate::local_search::{neighborhood, Candidate, MoveKind};
use crate::models::{tour_length, validate_tour};

use super::config::TabuConfig;
use super::memory::TabuMemory;
use super::observer::{IterationEvent, MoveCounts, NoopObserver, SearchObserver};

/// Smallest tenure the intensification band may shrink to.
const MIN_INTENSIFIED_TENURE: usize = 3;

/// Largest `|d(i, j) - d(j, i)|` accepted without a warning.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// `max_iterations` reached.
    MaxIterations,
    /// Wall-clock budget spent.
    TimeLimit,
    /// Too many iterations without a new best tour.
    Stagnation,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MaxIterations => "iteration limit reached",
            Self::TimeLimit => "time limit reached",
            Self::Stagnation => "no improvement",
        })
    }
}

/// Lifecycle state of a [`TabuSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// More iterations may run.
    Running,
    /// The search has stopped for good.
    Terminated(TerminationReason),
}

impl SearchStatus {
    /// Returns `true` while the search may still step.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Result of a Tabu Search run.
#[derive(Debug, Clone, Serialize)]
pub struct TabuResult {
    /// Best tour found.
    pub best_tour: Vec<usize>,
    /// Length of the best tour.
    pub best_length: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Iteration at which the best tour was found (0 = initial tour).
    pub best_iteration: usize,
    /// Moves that produced a new best tour, per kind.
    pub move_counts: MoveCounts,
    /// Why the search stopped.
    pub termination: TerminationReason,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// Best admissible candidate found so far within one iteration.
#[derive(Default)]
struct Selection {
    chosen: Option<(Candidate, f64)>,
    admissible: bool,
}

impl Selection {
    fn consider(&mut self, candidate: Candidate, length: f64) {
        self.admissible = true;
        // Strict comparison: ties keep the earlier candidate, NaN never wins.
        let better = match self.chosen {
            Some((_, best)) => length < best,
            None => length < f64::INFINITY,
        };
        if better {
            self.chosen = Some((candidate, length));
        }
    }
}

/// A single tabu search over one tour, advanced one iteration at a time.
///
/// Use [`TabuRunner`] to run to completion in one call.
///
/// # Examples
///
/// ```
/// use tsp_tabu::distance::DistanceMatrix;
/// use tsp_tabu::tabu::{NoopObserver, TabuConfig, TabuSearch};
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let config = TabuConfig::default().with_max_iterations(10);
/// let mut search = TabuSearch::new(&[0, 2, 1, 3], &dm, config).unwrap();
///
/// search.step(&mut NoopObserver);
/// assert_eq!(search.iteration(), 1);
/// assert!((search.best_length() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct TabuSearch<'a> {
    distances: &'a DistanceMatrix,
    config: TabuConfig,
    memory: TabuMemory,
    base_tenure: usize,
    max_no_improvement: usize,
    time_budget: Option<Duration>,
    current_tour: Vec<usize>,
    current_length: f64,
    best_tour: Vec<usize>,
    best_length: f64,
    iteration: usize,
    no_improvement: usize,
    best_iteration: usize,
    move_counts: MoveCounts,
    started: Instant,
    status: SearchStatus,
}

impl<'a> TabuSearch<'a> {
    /// Validates the input and prepares a search starting at `initial_tour`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidTour`] if the tour is not a permutation of
    ///   `[0, n)` or `n < 3`
    /// - [`SearchError::DistanceMatrixMismatch`] if the matrix is not n×n
    /// - [`SearchError::InvalidConfiguration`] if the configuration is unusable
    pub fn new(
        initial_tour: &[usize],
        distances: &'a DistanceMatrix,
        config: TabuConfig,
    ) -> Result<Self, SearchError> {
        validate_tour(initial_tour)?;
        let n = initial_tour.len();
        if distances.size() != n {
            return Err(SearchError::DistanceMatrixMismatch {
                expected: n,
                actual: distances.size(),
            });
        }
        config.validate()?;
        if !distances.is_symmetric(SYMMETRY_TOLERANCE) {
            tracing::warn!(
                locations = n,
                "asymmetric distance matrix, 2-opt deltas assume symmetry"
            );
        }

        let base_tenure = config.tabu_tenure.resolve(n);
        let max_no_improvement = config
            .max_no_improvement
            .unwrap_or(base_tenure.saturating_mul(2));
        let time_budget = config.time_budget();
        let current_tour = initial_tour.to_vec();
        let current_length = tour_length(&current_tour, distances);

        let mut search = Self {
            distances,
            memory: TabuMemory::new(base_tenure),
            base_tenure,
            max_no_improvement,
            time_budget,
            best_tour: current_tour.clone(),
            best_length: current_length,
            current_tour,
            current_length,
            iteration: 0,
            no_improvement: 0,
            best_iteration: 0,
            move_counts: MoveCounts::default(),
            started: Instant::now(),
            status: SearchStatus::Running,
            config,
        };
        if search.config.max_iterations == 0 {
            search.status = SearchStatus::Terminated(TerminationReason::MaxIterations);
        } else if search.time_budget == Some(Duration::ZERO) {
            search.status = SearchStatus::Terminated(TerminationReason::TimeLimit);
        }
        Ok(search)
    }

    /// Runs one iteration and reports the resulting status.
    ///
    /// Does nothing once the search has terminated.
    pub fn step(&mut self, observer: &mut dyn SearchObserver) -> SearchStatus {
        if !self.status.is_running() {
            return self.status;
        }

        self.iteration += 1;
        let iteration = self.iteration;
        let tenure = self.memory.tenure();

        let selection = self.select(iteration);
        let applied = selection.chosen.map(|(candidate, _)| candidate.mv);
        match applied {
            Some(mv) => {
                mv.apply(&mut self.current_tour);
                // Re-summed so rounding from deltas never accumulates.
                self.current_length = tour_length(&self.current_tour, self.distances);
                self.memory.add(mv, iteration);

                if self.current_length < self.best_length {
                    self.best_tour.clone_from(&self.current_tour);
                    self.best_length = self.current_length;
                    self.best_iteration = iteration;
                    self.no_improvement = 0;
                    self.move_counts.record(mv.kind());
                    tracing::trace!(iteration, best_length = self.best_length, %mv, "new best tour");
                } else {
                    self.no_improvement += 1;
                }
            }
            None => {
                self.no_improvement += 1;
                tracing::debug!(
                    iteration,
                    admissible = selection.admissible,
                    "no admissible move, search stalled"
                );
            }
        }

        observer.on_iteration(&IterationEvent {
            iteration,
            current_tour: &self.current_tour,
            current_length: self.current_length,
            best_tour: &self.best_tour,
            best_length: self.best_length,
            applied,
            tenure,
        });

        self.status = self.check_termination();
        if self.status.is_running() && self.config.dynamic_tabu {
            self.adapt_tenure();
        }
        self.status
    }

    /// Steps until termination and returns the outcome.
    #[tracing::instrument(level = "debug", name = "Tabu Search", skip_all)]
    pub fn run(mut self, observer: &mut dyn SearchObserver) -> TabuResult {
        tracing::debug!(
            locations = self.current_tour.len(),
            initial_length = self.current_length,
            tenure = self.base_tenure,
            max_iterations = self.config.max_iterations,
            max_no_improvement = self.max_no_improvement,
            "starting tabu search"
        );
        while self.step(observer).is_running() {}
        let result = self.into_result();
        tracing::info!(
            best_length = result.best_length,
            iterations = result.iterations,
            reason = %result.termination,
            "tabu search finished"
        );
        result
    }

    /// Consumes the search and packages its best tour.
    ///
    /// A search stopped before terminating reports the iteration cap as
    /// its reason.
    pub fn into_result(self) -> TabuResult {
        let termination = match self.status {
            SearchStatus::Terminated(reason) => reason,
            SearchStatus::Running => TerminationReason::MaxIterations,
        };
        TabuResult {
            best_tour: self.best_tour,
            best_length: self.best_length,
            iterations: self.iteration,
            best_iteration: self.best_iteration,
            move_counts: self.move_counts,
            termination,
            elapsed: self.started.elapsed(),
        }
    }

    /// Current lifecycle state.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Iterations completed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Tour the search is currently at.
    pub fn current_tour(&self) -> &[usize] {
        &self.current_tour
    }

    /// Length of the current tour.
    pub fn current_length(&self) -> f64 {
        self.current_length
    }

    /// Best tour seen so far.
    pub fn best_tour(&self) -> &[usize] {
        &self.best_tour
    }

    /// Length of the best tour.
    pub fn best_length(&self) -> f64 {
        self.best_length
    }

    /// Iterations since the best tour last improved.
    pub fn no_improvement_count(&self) -> usize {
        self.no_improvement
    }

    /// Tenure currently applied to new tabu entries.
    pub fn tenure(&self) -> usize {
        self.memory.tenure()
    }

    /// Tenure resolved from the configuration at start.
    pub fn base_tenure(&self) -> usize {
        self.base_tenure
    }

    /// Effective stagnation limit.
    pub fn max_no_improvement(&self) -> usize {
        self.max_no_improvement
    }

    /// Configuration in use.
    pub fn config(&self) -> &TabuConfig {
        &self.config
    }

    /// Tabu memory, for inspection.
    pub fn memory(&self) -> &TabuMemory {
        &self.memory
    }

    /// Tabu memory, for seeding forbidden moves before stepping.
    pub fn memory_mut(&mut self) -> &mut TabuMemory {
        &mut self.memory
    }

    fn select(&mut self, iteration: usize) -> Selection {
        let mut selection = Selection::default();
        self.scan(MoveKind::TwoOpt, iteration, &mut selection);
        if self.config.use_swap && (!selection.admissible || !self.config.prioritize_two_opt) {
            self.scan(MoveKind::Swap, iteration, &mut selection);
        }
        selection
    }

    fn scan(&mut self, kind: MoveKind, iteration: usize, selection: &mut Selection) {
        let Self {
            distances,
            config,
            memory,
            current_tour,
            current_length,
            best_length,
            ..
        } = self;

        for candidate in neighborhood(kind, current_tour.as_slice(), *distances) {
            let length = *current_length + candidate.delta;
            let aspirates = config.aspiration_enabled && length < *best_length;
            if aspirates || !memory.is_tabu(&candidate.mv, iteration) {
                selection.consider(candidate, length);
            }
        }
    }

    fn check_termination(&self) -> SearchStatus {
        if self.iteration >= self.config.max_iterations {
            return SearchStatus::Terminated(TerminationReason::MaxIterations);
        }
        if let Some(budget) = self.time_budget {
            if self.started.elapsed() >= budget {
                return SearchStatus::Terminated(TerminationReason::TimeLimit);
            }
        }
        if self.no_improvement >= self.max_no_improvement {
            return SearchStatus::Terminated(TerminationReason::Stagnation);
        }
        SearchStatus::Running
    }

    fn adapt_tenure(&mut self) {
        let base = self.base_tenure;
        let next = if self.no_improvement > self.config.diversification_threshold {
            base.saturating_mul(2).min(base.saturating_add(10))
        } else if self.no_improvement > self.config.intensification_threshold {
            base.min((base / 2).max(MIN_INTENSIFIED_TENURE))
        } else {
            base
        };
        if next != self.memory.tenure() {
            tracing::debug!(
                iteration = self.iteration,
                no_improvement = self.no_improvement,
                from = self.memory.tenure(),
                to = next,
                "tabu tenure adjusted"
            );
            self.memory.set_tenure(next);
        }
    }
}

/// Runs a Tabu Search to completion.
pub struct TabuRunner;

impl TabuRunner {
    /// Optimizes `initial_tour` without observing progress.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_tabu::distance::DistanceMatrix;
    /// use tsp_tabu::tabu::{TabuConfig, TabuRunner};
    ///
    /// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    /// let result = TabuRunner::run(&[0, 2, 1, 3], &dm, &TabuConfig::default()).unwrap();
    /// assert!((result.best_length - 4.0).abs() < 1e-10);
    /// ```
    pub fn run(
        initial_tour: &[usize],
        distances: &DistanceMatrix,
        config: &TabuConfig,
    ) -> Result<TabuResult, SearchError> {
        Self::run_with_observer(initial_tour, distances, config, &mut NoopObserver)
    }

    /// Optimizes `initial_tour`, notifying `observer` after every iteration.
    pub fn run_with_observer(
        initial_tour: &[usize],
        distances: &DistanceMatrix,
        config: &TabuConfig,
        observer: &mut dyn SearchObserver,
    ) -> Result<TabuResult, SearchError> {
        let search = TabuSearch::new(initial_tour, distances, config.clone())?;
        Ok(search.run(observer))
    }
}
