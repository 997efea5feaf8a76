//! Piece invariants: the flat index encoding and the per-size piece limit.

use super::Invariant;
use crate::types::{Occupancy, PIECES_PER_SIZE, PieceIndex, Size};

/// Invariant: splitting an index into `(size, cell)` and joining it again
/// gives back the same index.
pub struct IndexBijectionInvariant;

impl Invariant<PieceIndex> for IndexBijectionInvariant {
    fn holds(index: &PieceIndex) -> bool {
        let (size, cell) = index.to_parts();
        PieceIndex::from_parts(size, cell) == *index
    }

    fn description() -> &'static str {
        "Position index and (size, cell) are interchangeable"
    }
}

/// Invariant: no size has more than 3 pieces placed.
///
/// This is the game's piece-supply rule. Players do not enforce it; it is
/// only observed so drivers can validate moves upstream.
pub struct PieceLimitInvariant;

impl Invariant<Occupancy> for PieceLimitInvariant {
    fn holds(occupancy: &Occupancy) -> bool {
        Size::ALL
            .iter()
            .all(|&size| occupancy.count_in(size) <= PIECES_PER_SIZE)
    }

    fn description() -> &'static str {
        "At most 3 pieces of each size are placed"
    }
}
