//! First-class invariants for Otrio.
//!
//! Invariants are logical properties that must hold for the catalog and for
//! a player's pieces. They are testable independently and serve as
//! documentation of system guarantees.

#[cfg(kani)]
mod verification;

pub mod catalog;
pub mod pieces;

pub use catalog::{
    CatalogCoverageInvariant, CatalogDistinctInvariant, CatalogFamilyInvariant,
    CatalogSizeInvariant,
};
pub use pieces::{IndexBijectionInvariant, PieceLimitInvariant};

/// A logical property that must hold for a given state.
pub trait Invariant<S: ?Sized> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two to four invariants.
pub trait InvariantSet<S: ?Sized> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S: ?Sized, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All catalog invariants as a composable set.
pub type CatalogInvariants = (
    CatalogSizeInvariant,
    CatalogDistinctInvariant,
    CatalogCoverageInvariant,
    CatalogFamilyInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, Occupancy, PieceIndex, Size};

    #[test]
    fn test_catalog_invariants_hold_for_standard() {
        assert!(CatalogInvariants::check_all(Catalog::standard()).is_ok());
    }

    #[test]
    fn test_catalog_invariants_report_each_violation() {
        let mut triples = *crate::winning_triples();
        // Replace the last descending ramp with a copy of the first nested triple.
        triples[48] = triples[0];
        let broken = Catalog::from_triples(triples);

        let violations = CatalogInvariants::check_all(&broken).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                CatalogDistinctInvariant::description(),
                CatalogFamilyInvariant::description(),
            ]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type PieceInvariants = (PieceLimitInvariant, PieceLimitInvariant);
        let mut occ = Occupancy::new();
        assert!(PieceInvariants::check_all(&occ).is_ok());

        for index in Size::Small.indices().take(4) {
            occ.set(index);
        }
        assert_eq!(PieceInvariants::check_all(&occ).unwrap_err().len(), 2);
        assert!(IndexBijectionInvariant::holds(&PieceIndex::new(26).unwrap()));
    }
}
