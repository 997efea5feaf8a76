//! Win detection logic for Otrio.

use super::catalog::{Catalog, WinningTriple};
use crate::types::{Occupancy, PieceIndex};
use tracing::{info, instrument, trace};

/// Checks whether every index in `indices` is occupied.
///
/// An empty slice is vacuously satisfied and returns `true`.
#[instrument(skip_all)]
pub fn has_all(occupancy: &Occupancy, indices: &[PieceIndex]) -> bool {
    indices.iter().all(|&index| occupancy.get(index))
}

/// Returns the first satisfied triple in catalog order, or `None`.
///
/// Catalog order only decides which triple is reported when several are
/// satisfied at once; any one of them is a win.
#[instrument(skip_all)]
pub fn first_win<'c>(occupancy: &Occupancy, catalog: &'c Catalog) -> Option<&'c WinningTriple> {
    let found = catalog
        .iter()
        .find(|triple| has_all(occupancy, &triple.indices()));
    match found {
        Some(triple) => info!(%triple, "Winning triple found"),
        None => trace!("No winning triple"),
    }
    found
}

/// Returns every satisfied triple, preserving catalog order.
///
/// Always scans the full catalog. An empty result means no win.
#[instrument(skip_all)]
pub fn all_wins<'c>(occupancy: &Occupancy, catalog: &'c Catalog) -> Vec<&'c WinningTriple> {
    let wins: Vec<_> = catalog
        .iter()
        .filter(|triple| has_all(occupancy, &triple.indices()))
        .collect();
    if !wins.is_empty() {
        info!(count = wins.len(), "Winning triples found");
    }
    wins
}
