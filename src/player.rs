//! Per-player piece tracking and win queries.

use crate::invariants::{Invariant, PieceLimitInvariant};
use crate::position::Cell;
use crate::rules::{self, Catalog, WinningTriple};
use crate::types::{Occupancy, PIECES_PER_SIZE, PieceIndex, Size};
use derive_getters::Getters;
use tracing::{debug, instrument, warn};

/// One player's pieces on the board.
///
/// A player owns a 27-slot occupancy record and a reference to the shared
/// [`Catalog`]. The color is opaque here; renderers decide what it means.
///
/// Placement is not validated: placing a fourth piece of a size, or playing
/// on after a win, is allowed. Drivers enforce move legality upstream.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Player<C> {
    /// Color identity of this player's pieces.
    color: C,

    /// Color for pieces on a winning line, if the renderer wants one.
    highlight: Option<C>,

    /// Which of the 27 positions hold a piece.
    occupancy: Occupancy,

    #[getter(skip)]
    catalog: &'static Catalog,
}

impl<C> Player<C> {
    /// Creates a player with no pieces placed.
    pub fn new(color: C) -> Self {
        Self {
            color,
            highlight: None,
            occupancy: Occupancy::new(),
            catalog: Catalog::standard(),
        }
    }

    /// Sets the highlight color used for winning pieces.
    pub fn with_highlight(mut self, highlight: C) -> Self {
        self.highlight = Some(highlight);
        self
    }

    /// The catalog this player is checked against.
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Places a piece at `index`. Placing twice is a no-op.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: PieceIndex) {
        if self.occupancy.set(index) {
            debug!("Position already occupied");
            return;
        }
        debug!(size = %index.size(), cell = %index.cell(), "Piece placed");

        if !PieceLimitInvariant::holds(&self.occupancy) {
            warn!(
                size = %index.size(),
                placed = self.count_placed(index.size()),
                "More pieces placed than a player holds"
            );
        }
    }

    /// Places a piece of `size` on `cell`.
    pub fn place_at(&mut self, size: Size, cell: Cell) {
        self.place(PieceIndex::from_parts(size, cell));
    }

    /// Removes the piece at `index`. Removing an empty position is a no-op.
    #[instrument(skip(self))]
    pub fn remove(&mut self, index: PieceIndex) {
        if self.occupancy.clear(index) {
            debug!(size = %index.size(), cell = %index.cell(), "Piece removed");
        } else {
            debug!("Position already empty");
        }
    }

    /// Removes the piece of `size` from `cell`.
    pub fn remove_at(&mut self, size: Size, cell: Cell) {
        self.remove(PieceIndex::from_parts(size, cell));
    }

    /// Removes every piece.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        debug!(placed = self.occupancy.len(), "Clearing pieces");
        self.occupancy.reset();
    }

    /// Whether a piece sits at `index`.
    pub fn is_placed(&self, index: PieceIndex) -> bool {
        self.occupancy.get(index)
    }

    /// Number of pieces of `size` on the board (0-9).
    pub fn count_placed(&self, size: Size) -> usize {
        self.occupancy.count_in(size)
    }

    /// Pieces of `size` left in hand.
    ///
    /// Negative when more than 3 pieces of that size were placed; the value
    /// is reported as-is rather than clamped.
    pub fn count_remaining(&self, size: Size) -> i32 {
        PIECES_PER_SIZE as i32 - self.count_placed(size) as i32
    }

    /// Pieces left in hand as `(small, medium, large)`.
    pub fn remaining_by_size(&self) -> (i32, i32, i32) {
        (
            self.count_remaining(Size::Small),
            self.count_remaining(Size::Medium),
            self.count_remaining(Size::Large),
        )
    }

    /// Whether every index in `indices` holds a piece.
    ///
    /// An empty slice is vacuously satisfied.
    pub fn has_all(&self, indices: &[PieceIndex]) -> bool {
        rules::has_all(&self.occupancy, indices)
    }

    /// The first satisfied triple in catalog order, if any.
    #[instrument(skip(self))]
    pub fn first_win(&self) -> Option<&'static WinningTriple> {
        rules::first_win(&self.occupancy, self.catalog)
    }

    /// Every satisfied triple in catalog order.
    #[instrument(skip(self))]
    pub fn all_wins(&self) -> Vec<&'static WinningTriple> {
        rules::all_wins(&self.occupancy, self.catalog)
    }

    /// Whether any triple is satisfied.
    pub fn has_won(&self) -> bool {
        self.first_win().is_some()
    }

    /// Satisfied triples passing through `index`.
    ///
    /// Right after placing at `index`, this is the set of wins that move
    /// completed.
    #[instrument(skip(self))]
    pub fn wins_through(&self, index: PieceIndex) -> Vec<&'static WinningTriple> {
        self.catalog
            .containing(index)
            .filter(|triple| self.has_all(&triple.indices()))
            .collect()
    }

    /// Placed pieces with their decoded size and cell, in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (PieceIndex, Size, Cell)> + '_ {
        self.occupancy
            .occupied()
            .map(|index| (index, index.size(), index.cell()))
    }

    /// Distinct pieces that lie on a satisfied triple, in catalog order.
    ///
    /// Renderers draw these in the highlight color.
    #[instrument(skip(self))]
    pub fn highlighted(&self) -> Vec<PieceIndex> {
        let mut pieces = Vec::new();
        for index in self.all_wins().into_iter().flat_map(|t| t.indices()) {
            if !pieces.contains(&index) {
                pieces.push(index);
            }
        }
        pieces
    }
}

impl<C: Default> Default for Player<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}
