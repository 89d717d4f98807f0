//! Move descriptors shared by every neighborhood.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::models::{apply_swap, apply_two_opt};

use super::swap::swap_delta;
use super::two_opt::two_opt_delta;

/// Move family a [`Move`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    /// Edge exchange: reverse the segment between two tour positions.
    TwoOpt,
    /// Exchange the cities at two tour positions.
    Swap,
}

impl MoveKind {
    /// Short label used in logs and reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::TwoOpt => "2opt",
            Self::Swap => "swap",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A tagged move descriptor `(kind, i, j)` over tour positions.
///
/// Move identity is symmetric: `(i, j)` and `(j, i)` of the same kind
/// compare equal and hash alike, so the tabu memory treats them as one key.
///
/// # Examples
///
/// ```
/// use tsp_tabu::local_search::Move;
///
/// assert_eq!(Move::two_opt(1, 4), Move::two_opt(4, 1));
/// assert_ne!(Move::two_opt(1, 4), Move::swap(1, 4));
///
/// let mut tour = vec![0, 1, 2, 3, 4, 5];
/// Move::two_opt(1, 4).apply(&mut tour);
/// assert_eq!(tour, vec![0, 1, 4, 3, 2, 5]);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Move {
    kind: MoveKind,
    i: usize,
    j: usize,
}

impl Move {
    /// Creates a move of the given family over positions `i` and `j`.
    pub fn new(kind: MoveKind, i: usize, j: usize) -> Self {
        Self { kind, i, j }
    }

    /// Creates a 2-opt move removing the edges leaving positions `i` and `j`.
    pub fn two_opt(i: usize, j: usize) -> Self {
        Self {
            kind: MoveKind::TwoOpt,
            i,
            j,
        }
    }

    /// Creates a swap move exchanging the cities at positions `i` and `j`.
    pub fn swap(i: usize, j: usize) -> Self {
        Self {
            kind: MoveKind::Swap,
            i,
            j,
        }
    }

    /// Move family.
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Positions as given at construction.
    pub fn positions(&self) -> (usize, usize) {
        (self.i, self.j)
    }

    /// Positions ordered so that the first is not greater than the second.
    pub fn normalized(&self) -> (usize, usize) {
        if self.i <= self.j {
            (self.i, self.j)
        } else {
            (self.j, self.i)
        }
    }

    /// Length change this move would cause on `tour`, in O(1).
    pub fn delta(&self, tour: &[usize], distances: &DistanceMatrix) -> f64 {
        let (i, j) = self.normalized();
        match self.kind {
            MoveKind::TwoOpt => two_opt_delta(tour, distances, i, j),
            MoveKind::Swap => swap_delta(tour, distances, i, j),
        }
    }

    /// Applies this move to `tour` in place.
    pub fn apply(&self, tour: &mut [usize]) {
        let (i, j) = self.normalized();
        match self.kind {
            MoveKind::TwoOpt => apply_two_opt(tour, i, j),
            MoveKind::Swap => apply_swap(tour, i, j),
        }
    }

    /// Returns a copy of `tour` with this move applied.
    pub fn applied_to(&self, tour: &[usize]) -> Vec<usize> {
        let mut next = tour.to_vec();
        self.apply(&mut next);
        next
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.normalized() == other.normalized()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.normalized().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.kind, self.i, self.j)
    }
}

/// A neighbor of the current tour: the move producing it and its length delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Move that turns the current tour into this neighbor.
    pub mv: Move,
    /// `neighbor_length - current_length`.
    pub delta: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symmetric_equality() {
        assert_eq!(Move::two_opt(2, 5), Move::two_opt(5, 2));
        assert_eq!(Move::swap(0, 3), Move::swap(3, 0));
        assert_ne!(Move::two_opt(2, 5), Move::two_opt(2, 6));
        assert_ne!(Move::two_opt(2, 5), Move::swap(2, 5));
    }

    #[test]
    fn test_symmetric_hash() {
        let mut set = HashSet::new();
        set.insert(Move::two_opt(1, 3));
        assert!(set.contains(&Move::two_opt(3, 1)));
        assert!(!set.insert(Move::two_opt(3, 1)));
    }

    #[test]
    fn test_normalized_keeps_given_positions() {
        let mv = Move::swap(4, 1);
        assert_eq!(mv.positions(), (4, 1));
        assert_eq!(mv.normalized(), (1, 4));
    }

    #[test]
    fn test_applied_to_leaves_input_untouched() {
        let tour = vec![0, 1, 2, 3, 4];
        let next = Move::two_opt(0, 3).applied_to(&tour);
        assert_eq!(tour, vec![0, 1, 2, 3, 4]);
        assert_eq!(next, vec![0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_delta_matches_length_change() {
        use crate::models::tour_length;

        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let crossed = [0, 2, 1, 3];
        let before = tour_length(&crossed, &dm);
        for mv in [Move::two_opt(2, 0), Move::two_opt(1, 3), Move::swap(1, 2), Move::swap(3, 0)] {
            let after = tour_length(&mv.applied_to(&crossed), &dm);
            assert!((mv.delta(&crossed, &dm) - (after - before)).abs() < 1e-12, "{mv}");
        }
        // Uncrossing the square shortens it by 2√2 - 2.
        assert!((Move::two_opt(0, 2).delta(&crossed, &dm) - (2.0 - 8f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::two_opt(1, 4).to_string(), "2opt(1, 4)");
        assert_eq!(MoveKind::Swap.to_string(), "swap");
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&MoveKind::TwoOpt).expect("serialize");
        assert_eq!(json, "\"two_opt\"");
    }
}
