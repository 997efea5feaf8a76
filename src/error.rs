//! Error types for Otrio index conversion.

use derive_more::{Display, Error};
use tracing::instrument;

/// Specific kinds of Otrio errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum OtrioErrorKind {
    /// Size rank outside 0..3.
    #[display("Invalid size rank {} (must be 0-2)", _0)]
    InvalidSizeRank(usize),

    /// Cell outside 0..9.
    #[display("Invalid cell {} (must be 0-8)", _0)]
    InvalidCell(usize),

    /// Row or column number outside 0..3.
    #[display("Invalid line number {} (must be 0-2)", _0)]
    InvalidLineNumber(usize),

    /// Flat position index outside 0..27.
    #[display("Invalid position index {} (must be 0-26)", _0)]
    InvalidPieceIndex(usize),
}

/// Otrio error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Otrio error: {} at {}:{}", kind, file, line)]
pub struct OtrioError {
    /// What went wrong.
    pub kind: OtrioErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl OtrioError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: OtrioErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> OtrioErrorKind {
        self.kind
    }
}

impl From<OtrioErrorKind> for OtrioError {
    #[track_caller]
    fn from(kind: OtrioErrorKind) -> Self {
        Self::new(kind)
    }
}
