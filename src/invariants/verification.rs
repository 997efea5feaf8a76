//! Formal verification of invariants using Kani model checker.
//!
//! These proof harnesses verify that invariants hold for all index values
//! and all occupancy records.

#[cfg(kani)]
mod proofs {
    use crate::{IndexBijectionInvariant, Invariant, Occupancy, PieceIndex, Player, to_index};

    /// Proves: every index survives a split into (size, cell) and back.
    #[kani::proof]
    fn verify_index_bijection() {
        let index: PieceIndex = kani::any();
        assert!(IndexBijectionInvariant::holds(&index));

        let (size, cell) = index.to_parts();
        let rebuilt = to_index(size.rank(), cell.to_index());
        assert!(matches!(rebuilt, Ok(i) if i == index));
    }

    /// Proves: placing on an empty position then removing it restores the
    /// record exactly.
    #[kani::proof]
    #[kani::unwind(28)]
    fn verify_place_remove_round_trip() {
        let occupancy: Occupancy = kani::any();
        let index: PieceIndex = kani::any();
        kani::assume(!occupancy.get(index));

        let mut player = Player::new(());
        for i in occupancy.occupied() {
            player.place(i);
        }
        player.place(index);
        assert!(player.is_placed(index));
        player.remove(index);
        assert!(*player.occupancy() == occupancy);
    }
}
