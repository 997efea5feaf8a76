//! Catalog invariants: the 49 triples are complete, distinct and
//! geometrically correct.

use super::Invariant;
use crate::rules::{CATALOG_LEN, Catalog, WinFamily, WinningTriple};
use crate::types::POSITIONS;
use std::collections::HashSet;

/// Invariant: the catalog holds exactly 49 triples.
pub struct CatalogSizeInvariant;

impl Invariant<Catalog> for CatalogSizeInvariant {
    fn holds(catalog: &Catalog) -> bool {
        catalog.len() == CATALOG_LEN
    }

    fn description() -> &'static str {
        "Catalog holds exactly 49 winning triples"
    }
}

/// Invariant: no triple repeats an index, and no two triples cover the
/// same set of indices.
pub struct CatalogDistinctInvariant;

impl Invariant<Catalog> for CatalogDistinctInvariant {
    fn holds(catalog: &Catalog) -> bool {
        let mut seen = HashSet::new();
        catalog.iter().all(|triple| {
            let mut key = triple.to_array();
            key.sort_unstable();
            key[0] != key[1] && key[1] != key[2] && seen.insert(key)
        })
    }

    fn description() -> &'static str {
        "Catalog triples are distinct and never repeat an index"
    }
}

/// Invariant: every position index 0..27 appears in some triple.
pub struct CatalogCoverageInvariant;

impl Invariant<Catalog> for CatalogCoverageInvariant {
    fn holds(catalog: &Catalog) -> bool {
        let mut covered = [false; POSITIONS];
        for index in catalog.iter().flat_map(|t| t.indices()) {
            covered[index.get()] = true;
        }
        covered.iter().all(|&c| c)
    }

    fn description() -> &'static str {
        "Every position index belongs to at least one winning triple"
    }
}

/// Invariant: each triple matches the geometry of its family, and the
/// families contribute 9 nested, 24 same-size, 8 ascending and 8
/// descending triples.
pub struct CatalogFamilyInvariant;

impl Invariant<Catalog> for CatalogFamilyInvariant {
    fn holds(catalog: &Catalog) -> bool {
        let mut counts = [0usize; 4];
        for triple in catalog {
            if WinningTriple::from_family(triple.family()) != *triple {
                return false;
            }
            let slot = match triple.family() {
                WinFamily::Nested { .. } => 0,
                WinFamily::SameSize { .. } => 1,
                WinFamily::Ascending { .. } => 2,
                WinFamily::Descending { .. } => 3,
            };
            counts[slot] += 1;
        }
        counts == [9, 24, 8, 8]
    }

    fn description() -> &'static str {
        "Catalog families have the expected geometry and counts"
    }
}
