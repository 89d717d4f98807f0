//! 2-opt neighborhood over closed tours.
//!
//! # Algorithm
//!
//! A 2-opt move at positions `(i, j)` with `i + 1 < j` removes the edges
//! `(t[i], t[i+1])` and `(t[j], t[j+1 mod n])` and reconnects the tour by
//! reversing positions `[i+1, j]`. Its length change is
//!
//! ```text
//! delta = d(t[i], t[j]) + d(t[i+1], t[j+1]) - d(t[i], t[i+1]) - d(t[j], t[j+1])
//! ```
//!
//! Moves are generated in a fixed order: first every `(i, j)` with
//! `j < n - 1`, then the wrap-around family `(i, n - 1)`, whose second
//! removed edge is the closing edge `(t[n-1], t[0])`. Search tie-breaking
//! depends on this order.
//!
//! # Complexity
//!
//! O(n²) moves per neighborhood, O(1) per delta.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;

use super::moves::{Candidate, Move};

/// Enumerates 2-opt position pairs for a tour of `n` locations.
///
/// Yields nothing when `n < 3`.
pub fn two_opt_moves(n: usize) -> impl Iterator<Item = Move> {
    let outer = n.saturating_sub(2);
    let general = (0..outer).flat_map(move |i| (i + 2..n - 1).map(move |j| Move::two_opt(i, j)));
    let wrap = (0..outer).map(move |i| Move::two_opt(i, n - 1));
    general.chain(wrap)
}

/// Lazily yields every 2-opt neighbor of `tour` as a move plus length delta.
///
/// Each call builds a fresh iterator; nothing is shared between calls.
///
/// # Examples
///
/// ```
/// use tsp_tabu::distance::DistanceMatrix;
/// use tsp_tabu::local_search::two_opt_neighborhood;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let crossed = [0, 2, 1, 3];
/// let best = two_opt_neighborhood(&crossed, &dm)
///     .min_by(|a, b| a.delta.total_cmp(&b.delta))
///     .unwrap();
/// assert!(best.delta < 0.0);
/// ```
pub fn two_opt_neighborhood<'a>(
    tour: &'a [usize],
    distances: &'a DistanceMatrix,
) -> impl Iterator<Item = Candidate> + 'a {
    two_opt_moves(tour.len()).map(move |mv| Candidate {
        mv,
        delta: mv.delta(tour, distances),
    })
}

/// Yields every 2-opt neighbor as a full tour copy together with its move.
///
/// Reference form of [`two_opt_neighborhood`]; O(n) per neighbor.
pub fn two_opt_neighbor_tours(tour: &[usize]) -> impl Iterator<Item = (Vec<usize>, Move)> + '_ {
    two_opt_moves(tour.len()).map(move |mv| (mv.applied_to(tour), mv))
}

/// Length change of the 2-opt move at positions `i < j`.
///
/// Each removed edge is paired with the added edge sharing an endpoint, so
/// the degenerate `(0, n - 1)` reversal yields exactly zero on a symmetric
/// matrix.
pub(crate) fn two_opt_delta(tour: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = tour.len();
    let a = tour[i];
    let b = tour[i + 1];
    let c = tour[j];
    let d = tour[(j + 1) % n];

    (distances.get(a, c) - distances.get(c, d)) + (distances.get(b, d) - distances.get(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tour_length;

    fn unit_square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    fn pentagon() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            (0.0, 0.0),
            (4.0, 1.0),
            (3.0, 5.0),
            (-1.0, 4.0),
            (1.5, 2.0),
        ])
    }

    #[test]
    fn test_move_order_and_count() {
        let moves: Vec<(usize, usize)> = two_opt_moves(5).map(|m| m.positions()).collect();
        assert_eq!(
            moves,
            vec![(0, 2), (0, 3), (1, 3), (0, 4), (1, 4), (2, 4)]
        );
    }

    #[test]
    fn test_moves_are_distinct_and_valid() {
        let n = 9;
        let moves: Vec<Move> = two_opt_moves(n).collect();
        // (n - 2) * (n - 3) / 2 general moves plus n - 2 wrap moves
        assert_eq!(moves.len(), (n - 2) * (n - 3) / 2 + (n - 2));
        for (k, mv) in moves.iter().enumerate() {
            let (i, j) = mv.positions();
            assert!(i + 1 < j && j < n, "bad move {mv}");
            assert!(!moves[..k].contains(mv), "duplicate move {mv}");
        }
    }

    #[test]
    fn test_triangle_has_single_wrap_move() {
        let moves: Vec<(usize, usize)> = two_opt_moves(3).map(|m| m.positions()).collect();
        assert_eq!(moves, vec![(0, 2)]);
    }

    #[test]
    fn test_too_small_yields_nothing() {
        assert_eq!(two_opt_moves(2).count(), 0);
        assert_eq!(two_opt_moves(0).count(), 0);
    }

    #[test]
    fn test_delta_matches_full_length() {
        let dm = pentagon();
        let tour = vec![0, 2, 4, 1, 3];
        let base = tour_length(&tour, &dm);
        for cand in two_opt_neighborhood(&tour, &dm) {
            let next = cand.mv.applied_to(&tour);
            let full = tour_length(&next, &dm);
            assert!(
                (base + cand.delta - full).abs() < 1e-9,
                "delta mismatch for {}",
                cand.mv
            );
        }
    }

    #[test]
    fn test_uncrosses_square() {
        let dm = unit_square();
        let crossed = [0, 2, 1, 3];
        let improving: Vec<Candidate> = two_opt_neighborhood(&crossed, &dm)
            .filter(|c| c.delta < -1e-10)
            .collect();
        assert_eq!(improving.len(), 1);
        assert_eq!(improving[0].mv, Move::two_opt(0, 2));
    }

    #[test]
    fn test_full_reversal_delta_is_zero() {
        let dm = pentagon();
        let tour = [3, 1, 4, 0, 2];
        assert_eq!(two_opt_delta(&tour, &dm, 0, 4), 0.0);
    }

    #[test]
    fn test_neighbor_tours_differ_in_two_edges() {
        let tour = vec![0, 1, 2, 3, 4, 5];
        let edges = |t: &[usize]| {
            let n = t.len();
            (0..n)
                .map(|k| {
                    let (a, b) = (t[k], t[(k + 1) % n]);
                    (a.min(b), a.max(b))
                })
                .collect::<Vec<_>>()
        };
        let original = edges(&tour);
        for (neighbor, mv) in two_opt_neighbor_tours(&tour) {
            let changed = edges(&neighbor)
                .iter()
                .filter(|e| !original.contains(e))
                .count();
            let (i, j) = mv.positions();
            if i == 0 && j == tour.len() - 1 {
                assert_eq!(changed, 0, "full reversal keeps every edge");
            } else {
                assert_eq!(changed, 2, "move {mv} should replace two edges");
            }
        }
    }
}
