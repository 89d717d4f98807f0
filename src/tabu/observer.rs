//! Progress notifications emitted by the search.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::local_search::{Move, MoveKind};

/// Per-kind move tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MoveCounts {
    /// 2-opt moves.
    pub two_opt: usize,
    /// City swaps.
    pub swap: usize,
}

impl MoveCounts {
    /// Adds one move of the given kind.
    pub fn record(&mut self, kind: MoveKind) {
        match kind {
            MoveKind::TwoOpt => self.two_opt += 1,
            MoveKind::Swap => self.swap += 1,
        }
    }

    /// Count for one kind.
    pub fn get(&self, kind: MoveKind) -> usize {
        match kind {
            MoveKind::TwoOpt => self.two_opt,
            MoveKind::Swap => self.swap,
        }
    }

    /// Sum over all kinds.
    pub fn total(&self) -> usize {
        self.two_opt + self.swap
    }
}

/// Snapshot of the search after one iteration.
///
/// Borrows the engine's tours for the duration of the callback only.
#[derive(Debug, Clone, Copy)]
pub struct IterationEvent<'a> {
    /// Iteration just completed (1-based).
    pub iteration: usize,
    /// Tour the search is currently at.
    pub current_tour: &'a [usize],
    /// Length of `current_tour`.
    pub current_length: f64,
    /// Best tour seen so far.
    pub best_tour: &'a [usize],
    /// Length of `best_tour`.
    pub best_length: f64,
    /// Move applied this iteration, `None` when the search stalled.
    pub applied: Option<Move>,
    /// Tenure in effect during this iteration.
    pub tenure: usize,
}

/// Receives one event per iteration.
///
/// Implemented for closures taking `&IterationEvent`, so a plain
/// `|event| ...` works as an observer.
pub trait SearchObserver {
    /// Called synchronously after each iteration.
    fn on_iteration(&mut self, event: &IterationEvent<'_>);
}

impl<F> SearchObserver for F
where
    F: FnMut(&IterationEvent<'_>),
{
    fn on_iteration(&mut self, event: &IterationEvent<'_>) {
        self(event)
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_iteration(&mut self, _event: &IterationEvent<'_>) {}
}

/// One recorded iteration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressRecord {
    /// Iteration number.
    pub iteration: usize,
    /// Time since the tracker was created.
    pub elapsed: Duration,
    /// Current tour length.
    pub current_length: f64,
    /// Best length so far.
    pub best_length: f64,
    /// Kind of the applied move, if any.
    pub move_kind: Option<MoveKind>,
}

/// Aggregate statistics over a tracked run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    /// Length before optimization.
    pub initial_length: f64,
    /// Best length at the end.
    pub final_length: f64,
    /// `initial_length - final_length`.
    pub improvement: f64,
    /// Improvement as a percentage of the initial length.
    pub improvement_pct: f64,
    /// Iterations recorded.
    pub iterations: usize,
    /// Time until the last recorded iteration.
    pub elapsed: Duration,
    /// Iterations per second, zero if no time elapsed.
    pub iterations_per_second: f64,
    /// Applied moves per kind.
    pub move_counts: MoveCounts,
}

/// Observer that keeps the full length history of a run.
///
/// # Examples
///
/// ```
/// use tsp_tabu::distance::DistanceMatrix;
/// use tsp_tabu::tabu::{ProgressTracker, TabuConfig, TabuRunner};
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let config = TabuConfig::default().with_max_iterations(5);
/// let mut tracker = ProgressTracker::new();
/// let result = TabuRunner::run_with_observer(&[0, 2, 1, 3], &dm, &config, &mut tracker).unwrap();
///
/// let summary = tracker.summary().unwrap();
/// assert_eq!(summary.iterations, result.iterations);
/// assert!((summary.final_length - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    started: Instant,
    initial_length: Option<f64>,
    records: Vec<ProgressRecord>,
    move_counts: MoveCounts,
}

impl ProgressTracker {
    /// Creates an empty tracker; its clock starts now.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            initial_length: None,
            records: Vec::new(),
            move_counts: MoveCounts::default(),
        }
    }

    /// Sets the reference length used for improvement figures.
    ///
    /// Without it, the first recorded current length is used.
    pub fn with_initial_length(mut self, length: f64) -> Self {
        self.initial_length = Some(length);
        self
    }

    /// Recorded iterations in order.
    pub fn records(&self) -> &[ProgressRecord] {
        &self.records
    }

    /// Applied moves per kind.
    pub fn move_counts(&self) -> MoveCounts {
        self.move_counts
    }

    /// Best length after each recorded iteration.
    pub fn best_history(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.best_length).collect()
    }

    /// Iterations at which the best length strictly decreased.
    pub fn improvement_iterations(&self) -> Vec<usize> {
        self.records
            .windows(2)
            .filter(|w| w[1].best_length < w[0].best_length)
            .map(|w| w[1].iteration)
            .collect()
    }

    /// Summarizes the run, or `None` if nothing was recorded.
    pub fn summary(&self) -> Option<ProgressSummary> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        let initial_length = self.initial_length.unwrap_or(first.current_length);
        let final_length = last.best_length;
        let improvement = initial_length - final_length;
        let improvement_pct = if initial_length > 0.0 {
            improvement / initial_length * 100.0
        } else {
            0.0
        };
        let secs = last.elapsed.as_secs_f64();
        let iterations = self.records.len();
        Some(ProgressSummary {
            initial_length,
            final_length,
            improvement,
            improvement_pct,
            iterations,
            elapsed: last.elapsed,
            iterations_per_second: if secs > 0.0 {
                iterations as f64 / secs
            } else {
                0.0
            },
            move_counts: self.move_counts,
        })
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchObserver for ProgressTracker {
    fn on_iteration(&mut self, event: &IterationEvent<'_>) {
        let move_kind = event.applied.map(|mv| mv.kind());
        if let Some(kind) = move_kind {
            self.move_counts.record(kind);
        }
        self.records.push(ProgressRecord {
            iteration: event.iteration,
            elapsed: self.started.elapsed(),
            current_length: event.current_length,
            best_length: event.best_length,
            move_kind,
        });
    }
}
