//! City-swap neighborhood.
//!
//! # Algorithm
//!
//! A swap move at positions `(i, j)` with `i < j` exchanges the two cities.
//! It touches at most four edges: the ones entering and leaving each
//! position. When the positions are adjacent (including across the closing
//! edge) those edges overlap, so each affected edge is counted once.
//!
//! # Complexity
//!
//! O(n²) moves per neighborhood, O(1) per delta.

use crate::distance::DistanceMatrix;

use super::moves::{Candidate, Move};

/// Enumerates swap position pairs `i < j` for a tour of `n` locations.
pub fn swap_moves(n: usize) -> impl Iterator<Item = Move> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| Move::swap(i, j)))
}

/// Lazily yields every swap neighbor of `tour` as a move plus length delta.
pub fn swap_neighborhood<'a>(
    tour: &'a [usize],
    distances: &'a DistanceMatrix,
) -> impl Iterator<Item = Candidate> + 'a {
    swap_moves(tour.len()).map(move |mv| Candidate {
        mv,
        delta: mv.delta(tour, distances),
    })
}

/// Length change of swapping the cities at positions `i` and `j`.
pub(crate) fn swap_delta(tour: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = tour.len();
    let city_after = |p: usize| {
        if p == i {
            tour[j]
        } else if p == j {
            tour[i]
        } else {
            tour[p]
        }
    };

    // Edges are identified by the position they leave from.
    let starts = [(i + n - 1) % n, i, (j + n - 1) % n, j];
    let mut delta = 0.0;
    for (k, &p) in starts.iter().enumerate() {
        if starts[..k].contains(&p) {
            continue;
        }
        let q = (p + 1) % n;
        delta += distances.get(city_after(p), city_after(q)) - distances.get(tour[p], tour[q]);
    }
    delta
}
