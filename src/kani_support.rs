//! Kani arbitrary implementations for Otrio types.
//!
//! These implementations allow Kani to explore all possible values of our
//! types during model checking.

#[cfg(kani)]
use crate::{Cell, Occupancy, PieceIndex, Size};

#[cfg(kani)]
impl kani::Arbitrary for Size {
    fn any() -> Self {
        let rank: u8 = kani::any();
        kani::assume(rank < 3);
        Size::ALL[rank as usize]
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Cell {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 9);
        Cell::ALL[index as usize]
    }
}

#[cfg(kani)]
impl kani::Arbitrary for PieceIndex {
    fn any() -> Self {
        PieceIndex::from_parts(kani::any(), kani::any())
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Occupancy {
    fn any() -> Self {
        let flags: [bool; crate::POSITIONS] = kani::any();
        let mut occupancy = Occupancy::new();
        for index in PieceIndex::all() {
            if flags[index.get()] {
                occupancy.set(index);
            }
        }
        occupancy
    }
}
