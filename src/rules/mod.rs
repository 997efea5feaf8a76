//! Game rules for Otrio.
//!
//! This module contains the fixed catalog of winning triples and pure
//! functions that evaluate an occupancy record against it. Rules are
//! separated from piece storage so invariants and players can share them.

pub mod catalog;
pub mod win;

pub use catalog::{CATALOG_LEN, Catalog, Line, LineNumber, WinFamily, WinningTriple, winning_triples};
pub use win::{all_wins, first_win, has_all};
