//! Error types raised before a search starts.

use std::fmt;

/// Errors detected while validating search input.
///
/// Every variant is raised synchronously, before the first iteration runs.
/// The engine itself never fails mid-run.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The initial tour is not a permutation of `[0, n)`, or `n < 3`.
    InvalidTour {
        /// What was wrong with the tour.
        reason: String,
    },
    /// A configuration value cannot be used.
    InvalidConfiguration {
        /// Which option was rejected and why.
        reason: String,
    },
    /// The distance matrix size does not match the tour length.
    DistanceMatrixMismatch {
        /// Tour length.
        expected: usize,
        /// Distance matrix dimension.
        actual: usize,
    },
    /// A city selection is out of range, duplicated, or too small.
    InvalidSelection {
        /// What was wrong with the selection.
        reason: String,
    },
}

impl SearchError {
    pub(crate) fn invalid_tour(reason: impl Into<String>) -> Self {
        Self::InvalidTour {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_selection(reason: impl Into<String>) -> Self {
        Self::InvalidSelection {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTour { reason } => write!(f, "invalid tour: {reason}"),
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
            Self::DistanceMatrixMismatch { expected, actual } => write!(
                f,
                "distance matrix is {actual}x{actual} but the tour has {expected} locations"
            ),
            Self::InvalidSelection { reason } => write!(f, "invalid city selection: {reason}"),
        }
    }
}

impl std::error::Error for SearchError {}
