//! The catalog of winning triples.
//!
//! Otrio has 49 ways for one player to win, built from three geometric
//! families:
//! - 9 nested triples: small, medium and large rings on the same cell
//! - 24 same-size lines: 8 lines for each of the 3 sizes
//! - 16 ramps: small→medium→large (and large→medium→small) along each line
//!
//! The catalog is generated at compile time and shared by reference; it is
//! never rebuilt per player or per query.

use crate::error::{OtrioError, OtrioErrorKind};
use crate::invariants::{CatalogInvariants, InvariantSet, InvariantViolation};
use crate::position::{CELLS, Cell};
use crate::types::{PieceIndex, Size};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of winning triples per player.
pub const CATALOG_LEN: usize = 49;

/// Row or column number in `0..3`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct LineNumber(u8);

impl LineNumber {
    /// Top row or left column.
    pub const FIRST: Self = Self(0);
    /// Middle row or column.
    pub const SECOND: Self = Self(1);
    /// Bottom row or right column.
    pub const THIRD: Self = Self(2);

    /// Creates a line number, rejecting values outside `0..3`.
    ///
    /// # Errors
    ///
    /// Returns [`OtrioErrorKind::InvalidLineNumber`] if `n >= 3`.
    #[track_caller]
    pub fn new(n: usize) -> Result<Self, OtrioError> {
        if n < 3 {
            Ok(Self(n as u8))
        } else {
            Err(OtrioError::new(OtrioErrorKind::InvalidLineNumber(n)))
        }
    }

    /// The number in `0..3`.
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for LineNumber {
    type Error = OtrioError;

    #[track_caller]
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n as usize)
    }
}

impl From<LineNumber> for u8 {
    fn from(n: LineNumber) -> Self {
        n.0
    }
}

/// One of the 8 three-cell lines on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// Horizontal line (0 = top).
    #[display("row {}", _0)]
    Row(LineNumber),
    /// Vertical line (0 = left).
    #[display("column {}", _0)]
    Column(LineNumber),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// All lines: rows, then columns, then diagonals.
    pub const ALL: [Line; 8] = [
        Line::Row(LineNumber::FIRST),
        Line::Row(LineNumber::SECOND),
        Line::Row(LineNumber::THIRD),
        Line::Column(LineNumber::FIRST),
        Line::Column(LineNumber::SECOND),
        Line::Column(LineNumber::THIRD),
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// Cells along this line, in reading order.
    pub const fn cells(self) -> [Cell; 3] {
        let [a, b, c] = match self {
            Line::Row(r) => {
                let r = r.get() * 3;
                [r, r + 1, r + 2]
            }
            Line::Column(c) => {
                let c = c.get();
                [c, c + 3, c + 6]
            }
            Line::Diagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        };
        [Cell::ALL[a], Cell::ALL[b], Cell::ALL[c]]
    }
}

/// Which geometric family a winning triple comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinFamily {
    /// All three sizes stacked on one cell.
    Nested {
        /// The shared cell.
        cell: Cell,
    },
    /// Three rings of one size along a line.
    SameSize {
        /// The shared size.
        size: Size,
        /// The line.
        line: Line,
    },
    /// Small, medium, large along a line in reading order.
    Ascending {
        /// The line.
        line: Line,
    },
    /// Large, medium, small along a line in reading order.
    Descending {
        /// The line.
        line: Line,
    },
}

impl std::fmt::Display for WinFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinFamily::Nested { cell } => write!(f, "nested at {}", cell),
            WinFamily::SameSize { size, line } => write!(f, "{} {}", size, line),
            WinFamily::Ascending { line } => write!(f, "ascending {}", line),
            WinFamily::Descending { line } => write!(f, "descending {}", line),
        }
    }
}

/// Three position indices whose joint occupancy wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningTriple {
    indices: [PieceIndex; 3],
    family: WinFamily,
}

impl WinningTriple {
    const PLACEHOLDER: Self = Self {
        indices: [PieceIndex::new_unchecked(0); 3],
        family: WinFamily::Nested { cell: Cell::TopLeft },
    };

    /// Builds the triple a family describes.
    pub const fn from_family(family: WinFamily) -> Self {
        let indices = match family {
            WinFamily::Nested { cell } => [
                PieceIndex::from_parts(Size::Small, cell),
                PieceIndex::from_parts(Size::Medium, cell),
                PieceIndex::from_parts(Size::Large, cell),
            ],
            WinFamily::SameSize { size, line } => along(line, [size, size, size]),
            WinFamily::Ascending { line } => along(line, ASCENDING),
            WinFamily::Descending { line } => along(line, DESCENDING),
        };
        Self { indices, family }
    }

    /// The three indices, in the order they were enumerated.
    pub const fn indices(&self) -> [PieceIndex; 3] {
        self.indices
    }

    /// The family this triple belongs to.
    pub const fn family(&self) -> WinFamily {
        self.family
    }

    /// The triple decomposed into `(size, cell)` pairs for drawing.
    pub fn pieces(&self) -> [(Size, Cell); 3] {
        self.indices.map(PieceIndex::to_parts)
    }

    /// Whether `index` is one of the three.
    pub fn contains(&self, index: PieceIndex) -> bool {
        self.indices.contains(&index)
    }

    /// The indices as plain integers.
    pub fn to_array(&self) -> [usize; 3] {
        self.indices.map(PieceIndex::get)
    }
}

impl std::fmt::Display for WinningTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices;
        write!(f, "({}, {}, {}) {}", a, b, c, self.family)
    }
}

const ASCENDING: [Size; 3] = [Size::Small, Size::Medium, Size::Large];
const DESCENDING: [Size; 3] = [Size::Large, Size::Medium, Size::Small];

const fn along(line: Line, sizes: [Size; 3]) -> [PieceIndex; 3] {
    let [a, b, c] = line.cells();
    [
        PieceIndex::from_parts(sizes[0], a),
        PieceIndex::from_parts(sizes[1], b),
        PieceIndex::from_parts(sizes[2], c),
    ]
}

// Ranges into `Line::ALL`: rows, columns, diagonals.
const LINE_GROUPS: [(usize, usize); 3] = [(0, 3), (3, 6), (6, 8)];

const fn build() -> [WinningTriple; CATALOG_LEN] {
    let mut triples = [WinningTriple::PLACEHOLDER; CATALOG_LEN];
    let mut n = 0;

    let mut cell = 0;
    while cell < CELLS {
        triples[n] = WinningTriple::from_family(WinFamily::Nested {
            cell: Cell::ALL[cell],
        });
        n += 1;
        cell += 1;
    }

    let mut group = 0;
    while group < LINE_GROUPS.len() {
        let (start, end) = LINE_GROUPS[group];
        let mut size = 0;
        while size < Size::ALL.len() {
            let s = Size::ALL[size];
            let mut l = start;
            while l < end {
                let line = Line::ALL[l];
                triples[n] = WinningTriple::from_family(WinFamily::SameSize { size: s, line });
                n += 1;
                l += 1;
            }
            size += 1;
        }
        group += 1;
    }

    let mut l = 0;
    while l < Line::ALL.len() {
        let line = Line::ALL[l];
        triples[n] = WinningTriple::from_family(WinFamily::Ascending { line });
        n += 1;
        l += 1;
    }

    let mut l = 0;
    while l < Line::ALL.len() {
        let line = Line::ALL[l];
        triples[n] = WinningTriple::from_family(WinFamily::Descending { line });
        n += 1;
        l += 1;
    }

    assert!(n == CATALOG_LEN, "catalog must hold exactly 49 triples");
    triples
}

static STANDARD: Catalog = Catalog { triples: build() };

/// Returns the 49 winning triples in catalog order.
pub fn winning_triples() -> &'static [WinningTriple; CATALOG_LEN] {
    &STANDARD.triples
}

/// Immutable, shared set of winning triples.
#[derive(Debug, PartialEq, Eq)]
pub struct Catalog {
    triples: [WinningTriple; CATALOG_LEN],
}

impl Catalog {
    /// The standard catalog. Every player shares this instance.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Iterates triples in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, WinningTriple> {
        self.triples.iter()
    }

    /// Number of triples (always 49).
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Triple at catalog position `i`.
    pub fn get(&self, i: usize) -> Option<&WinningTriple> {
        self.triples.get(i)
    }

    /// All triples as a slice.
    pub fn as_slice(&self) -> &[WinningTriple] {
        &self.triples
    }

    /// Triples that pass through `index`, in catalog order.
    pub fn containing(&self, index: PieceIndex) -> impl Iterator<Item = &WinningTriple> + '_ {
        self.triples.iter().filter(move |t| t.contains(index))
    }

    /// Builds a catalog from arbitrary triples, for invariant tests.
    #[cfg(test)]
    pub(crate) fn from_triples(triples: [WinningTriple; CATALOG_LEN]) -> Self {
        Self { triples }
    }

    /// Checks the catalog invariants.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant.
    #[instrument(skip(self))]
    pub fn verify(&self) -> Result<(), Vec<InvariantViolation>> {
        let result = CatalogInvariants::check_all(self);
        debug!(ok = result.is_ok(), "Catalog verified");
        result
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a WinningTriple;
    type IntoIter = std::slice::Iter<'a, WinningTriple>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
