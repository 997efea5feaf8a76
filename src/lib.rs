//! Strictly Otrio - piece tracking and win detection for Otrio
//!
//! Otrio is played on a 3x3 grid where each cell can hold a small, medium
//! and large ring. A player wins by lining up three rings of one size, by
//! nesting all three sizes on one cell, or by laying out small→medium→large
//! (either direction) along a line.
//!
//! # Architecture
//!
//! - **Catalog**: the fixed set of 49 winning triples, built at compile time
//!   and shared by every player
//! - **Player**: one player's 27 occupancy flags with placement, removal,
//!   piece counts and win queries
//! - **Invariants**: first-class checks over the catalog and piece records
//!
//! Rendering, turn order and move legality live outside this crate.
//!
//! # Example
//!
//! ```
//! use strictly_otrio::{Cell, Player, Size};
//!
//! let mut red = Player::new("red");
//! red.place_at(Size::Small, Cell::Center);
//! red.place_at(Size::Medium, Cell::Center);
//! assert!(red.first_win().is_none());
//!
//! red.place_at(Size::Large, Cell::Center);
//! let win = red.first_win().unwrap();
//! assert_eq!(win.to_array(), [4, 13, 22]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod invariants;
mod kani_support;
mod player;
mod position;
mod rules;
mod types;

// Crate-level exports - Errors
pub use error::{OtrioError, OtrioErrorKind};

// Crate-level exports - Board geometry
pub use position::{CELLS, Cell};
pub use types::{
    Occupancy, PIECES_PER_SIZE, POSITIONS, PieceIndex, SIZES, Size, from_index, to_index,
};

// Crate-level exports - Rules
pub use rules::{
    CATALOG_LEN, Catalog, Line, LineNumber, WinFamily, WinningTriple, all_wins, first_win, has_all,
    winning_triples,
};

// Crate-level exports - Player state
pub use player::Player;

// Crate-level exports - Invariants
pub use invariants::{
    CatalogCoverageInvariant, CatalogDistinctInvariant, CatalogFamilyInvariant,
    CatalogInvariants, CatalogSizeInvariant, IndexBijectionInvariant, Invariant, InvariantSet,
    InvariantViolation, PieceLimitInvariant,
};
