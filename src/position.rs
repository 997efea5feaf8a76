//! Cell enum naming the nine squares of the Otrio grid.

use crate::error::{OtrioError, OtrioErrorKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the grid.
pub const CELLS: usize = 9;

/// A cell on the 3x3 Otrio grid (0-8, row-major).
///
/// Every cell holds up to three rings of a player's color, one per size.
/// The cell is independent of piece size; combine it with a
/// [`Size`](crate::Size) to get a [`PieceIndex`](crate::PieceIndex).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (cell 0)
    TopLeft,
    /// Top-center (cell 1)
    TopCenter,
    /// Top-right (cell 2)
    TopRight,
    /// Middle-left (cell 3)
    MiddleLeft,
    /// Center (cell 4)
    Center,
    /// Middle-right (cell 5)
    MiddleRight,
    /// Bottom-left (cell 6)
    BottomLeft,
    /// Bottom-center (cell 7)
    BottomCenter,
    /// Bottom-right (cell 8)
    BottomRight,
}

impl Cell {
    /// All 9 cells in row-major order.
    pub const ALL: [Cell; CELLS] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Get label for this cell (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Parse from label or number (0-8).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Cell> {
        if let Ok(num) = s.trim().parse::<usize>() {
            return Self::from_index(num);
        }

        // Labels are matched case-insensitively and exactly, so "center"
        // never resolves to "Top-center".
        let s_lower = s.trim().to_lowercase();
        <Cell as strum::IntoEnumIterator>::iter().find(|cell| cell.label().to_lowercase() == s_lower)
    }

    /// Converts cell to grid index (0-8).
    pub const fn to_index(self) -> usize {
        self as usize
    }

    /// Creates cell from grid index.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CELLS {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Creates cell from grid index, reporting out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`OtrioErrorKind::InvalidCell`] if `index >= 9`.
    #[track_caller]
    pub fn try_from_index(index: usize) -> Result<Self, OtrioError> {
        match Self::from_index(index) {
            Some(cell) => Ok(cell),
            None => Err(OtrioError::new(OtrioErrorKind::InvalidCell(index))),
        }
    }

    /// Row of this cell (0 = top).
    pub const fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this cell (0 = left).
    pub const fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Creates cell from row and column.
    pub const fn at(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<usize> for Cell {
    type Error = OtrioError;

    #[track_caller]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::try_from_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.to_index(), i);
            assert_eq!(Cell::from_index(i), Some(*cell));
        }
        assert_eq!(Cell::from_index(9), None);
    }

    #[test]
    fn test_row_and_column() {
        assert_eq!((Cell::TopLeft.row(), Cell::TopLeft.column()), (0, 0));
        assert_eq!((Cell::MiddleRight.row(), Cell::MiddleRight.column()), (1, 2));
        assert_eq!((Cell::BottomCenter.row(), Cell::BottomCenter.column()), (2, 1));
        assert_eq!(Cell::at(1, 1), Some(Cell::Center));
        assert_eq!(Cell::at(3, 0), None);
    }

    #[test]
    fn test_try_from_index_rejects_out_of_range() {
        let err = Cell::try_from_index(9).unwrap_err();
        assert_eq!(err.kind(), OtrioErrorKind::InvalidCell(9));
        assert_eq!(Cell::try_from(4).unwrap(), Cell::Center);
    }

    #[test]
    fn test_from_label_or_number() {
        assert_eq!(Cell::from_label_or_number("4"), Some(Cell::Center));
        assert_eq!(Cell::from_label_or_number("center"), Some(Cell::Center));
        assert_eq!(Cell::from_label_or_number("Top-Center"), Some(Cell::TopCenter));
        assert_eq!(Cell::from_label_or_number(" bottom-right "), Some(Cell::BottomRight));
        assert_eq!(Cell::from_label_or_number("12"), None);
        assert_eq!(Cell::from_label_or_number("nowhere"), None);
    }
}
