//! Neighborhoods over closed tours.
//!
//! - [`two_opt`] — Edge exchange by segment reversal
//! - [`swap`] — Exchange of two cities' positions
//!
//! Every neighborhood yields [`Candidate`]s tagged with a [`Move`], so the
//! search treats all move families uniformly.

mod moves;
mod swap;
mod two_opt;

pub use moves::{Candidate, Move, MoveKind};
pub use swap::{swap_moves, swap_neighborhood};
pub use two_opt::{two_opt_moves, two_opt_neighbor_tours, two_opt_neighborhood};

use crate::distance::DistanceMatrix;

/// Builds the neighborhood of `tour` for the given move family.
pub fn neighborhood<'a>(
    kind: MoveKind,
    tour: &'a [usize],
    distances: &'a DistanceMatrix,
) -> Box<dyn Iterator<Item = Candidate> + 'a> {
    match kind {
        MoveKind::TwoOpt => Box::new(two_opt_neighborhood(tour, distances)),
        MoveKind::Swap => Box::new(swap_neighborhood(tour, distances)),
    }
}
