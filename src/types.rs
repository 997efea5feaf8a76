//! Core domain types for Otrio: piece sizes, flat position indices and the
//! per-player occupancy record.

use crate::error::{OtrioError, OtrioErrorKind};
use crate::position::{CELLS, Cell};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of piece sizes.
pub const SIZES: usize = 3;

/// Number of flat position indices (sizes x cells).
pub const POSITIONS: usize = SIZES * CELLS;

/// Pieces of each size a player holds in a full game.
pub const PIECES_PER_SIZE: usize = 3;

/// Ring size of an Otrio piece.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Size {
    /// Small ring (rank 0).
    Small,
    /// Medium ring (rank 1).
    Medium,
    /// Large ring (rank 2).
    Large,
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: [Size; SIZES] = [Size::Small, Size::Medium, Size::Large];

    /// Rank of this size (0 = small, 2 = large).
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Creates a size from its rank.
    ///
    /// # Errors
    ///
    /// Returns [`OtrioErrorKind::InvalidSizeRank`] if `rank >= 3`.
    #[track_caller]
    pub fn from_rank(rank: usize) -> Result<Self, OtrioError> {
        match Self::ALL.get(rank) {
            Some(&size) => Ok(size),
            None => Err(OtrioError::new(OtrioErrorKind::InvalidSizeRank(rank))),
        }
    }

    /// Get label for this size (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }

    /// Flat indices belonging to this size, in cell order.
    pub fn indices(self) -> impl Iterator<Item = PieceIndex> {
        Cell::ALL
            .into_iter()
            .map(move |cell| PieceIndex::from_parts(self, cell))
    }
}

/// Flat position index in `0..27`, encoding `size_rank * 9 + cell`.
///
/// This is the only storage key for pieces; `(Size, Cell)` is a derived view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct PieceIndex(u8);

impl PieceIndex {
    /// Creates an index, rejecting values outside `0..27`.
    ///
    /// # Errors
    ///
    /// Returns [`OtrioErrorKind::InvalidPieceIndex`] if `index >= 27`.
    #[track_caller]
    pub fn new(index: usize) -> Result<Self, OtrioError> {
        if index < POSITIONS {
            Ok(Self(index as u8))
        } else {
            Err(OtrioError::new(OtrioErrorKind::InvalidPieceIndex(index)))
        }
    }

    /// Combines a size and a cell into a flat index.
    pub const fn from_parts(size: Size, cell: Cell) -> Self {
        Self((size.rank() * CELLS + cell.to_index()) as u8)
    }

    /// Builds an index from a value already known to be in range.
    pub(crate) const fn new_unchecked(index: usize) -> Self {
        debug_assert!(index < POSITIONS);
        Self(index as u8)
    }

    /// The flat value in `0..27`.
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Size of the piece at this index.
    pub const fn size(self) -> Size {
        Size::ALL[self.get() / CELLS]
    }

    /// Cell of the piece at this index.
    pub const fn cell(self) -> Cell {
        Cell::ALL[self.get() % CELLS]
    }

    /// Splits the index into `(size, cell)`.
    pub const fn to_parts(self) -> (Size, Cell) {
        (self.size(), self.cell())
    }

    /// Every index in ascending order.
    pub fn all() -> impl Iterator<Item = PieceIndex> {
        (0..POSITIONS).map(Self::new_unchecked)
    }
}

impl TryFrom<usize> for PieceIndex {
    type Error = OtrioError;

    #[track_caller]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<PieceIndex> for usize {
    fn from(index: PieceIndex) -> Self {
        index.get()
    }
}

impl From<(Size, Cell)> for PieceIndex {
    fn from((size, cell): (Size, Cell)) -> Self {
        Self::from_parts(size, cell)
    }
}

/// Converts a raw size rank and cell number into a flat index.
///
/// # Errors
///
/// Returns [`OtrioErrorKind::InvalidSizeRank`] or
/// [`OtrioErrorKind::InvalidCell`] when either argument is out of range.
#[track_caller]
#[instrument]
pub fn to_index(size_rank: usize, cell: usize) -> Result<PieceIndex, OtrioError> {
    let size = Size::from_rank(size_rank)?;
    let cell = Cell::try_from_index(cell)?;
    Ok(PieceIndex::from_parts(size, cell))
}

/// Splits a flat index into its size and cell.
pub const fn from_index(index: PieceIndex) -> (Size, Cell) {
    index.to_parts()
}

/// One player's 27 occupancy flags, one per [`PieceIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupancy {
    /// Flags in index order.
    flags: [bool; POSITIONS],
}

impl Occupancy {
    /// Creates an empty record.
    pub const fn new() -> Self {
        Self {
            flags: [false; POSITIONS],
        }
    }

    /// Whether a piece sits at `index`.
    pub const fn get(&self, index: PieceIndex) -> bool {
        self.flags[index.get()]
    }

    /// Marks `index` occupied. Returns the previous flag.
    pub fn set(&mut self, index: PieceIndex) -> bool {
        std::mem::replace(&mut self.flags[index.get()], true)
    }

    /// Marks `index` empty. Returns the previous flag.
    pub fn clear(&mut self, index: PieceIndex) -> bool {
        std::mem::replace(&mut self.flags[index.get()], false)
    }

    /// Empties every flag.
    pub fn reset(&mut self) {
        self.flags = [false; POSITIONS];
    }

    /// Number of occupied flags among the 9 indices of `size`.
    pub fn count_in(&self, size: Size) -> usize {
        let start = size.rank() * CELLS;
        self.flags[start..start + CELLS].iter().filter(|&&f| f).count()
    }

    /// Number of occupied flags overall.
    pub fn len(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// True when no piece is placed.
    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|&f| f)
    }

    /// Occupied indices in ascending order.
    pub fn occupied(&self) -> impl Iterator<Item = PieceIndex> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, f)| **f)
            .map(|(i, _)| PieceIndex::new_unchecked(i))
    }

    /// All flags in index order.
    pub fn flags(&self) -> &[bool; POSITIONS] {
        &self.flags
    }
}

impl Default for Occupancy {
    fn default() -> Self {
        Self::new()
    }
}
