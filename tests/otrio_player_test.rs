//! Tests for Otrio player state tracking and win queries.

use strictly_otrio::{Cell, PieceIndex, Player, Size, WinFamily, WinningTriple};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Several tests share the process; only the first install succeeds.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn at(i: usize) -> PieceIndex {
    PieceIndex::new(i).unwrap()
}

fn place_all(player: &mut Player<()>, indices: &[usize]) {
    for &i in indices {
        player.place(at(i));
    }
}

fn arrays(wins: Vec<&WinningTriple>) -> Vec<[usize; 3]> {
    wins.into_iter().map(WinningTriple::to_array).collect()
}

#[test]
fn test_fresh_player_has_no_win() {
    init_tracing();
    let player = Player::new(());
    assert!(player.first_win().is_none());
    assert!(player.all_wins().is_empty());
    assert!(!player.has_won());
}

#[test]
fn test_players_share_standard_catalog() {
    init_tracing();
    let red = Player::new("red");
    let blue = Player::new("blue");
    assert!(std::ptr::eq(red.catalog(), strictly_otrio::Catalog::standard()));
    assert!(std::ptr::eq(red.catalog(), blue.catalog()));
}

#[test]
fn test_nested_win_on_center() {
    init_tracing();
    let mut player = Player::new(());
    place_all(&mut player, &[4, 13, 22]);

    let win = player.first_win().expect("Nested center should win");
    assert_eq!(win.to_array(), [4, 13, 22]);
    assert_eq!(win.family(), WinFamily::Nested { cell: Cell::Center });
    assert_eq!(arrays(player.all_wins()), vec![[4, 13, 22]]);
}

#[test]
fn test_two_same_size_rows() {
    init_tracing();
    let mut player = Player::new(());
    place_all(&mut player, &[0, 1, 2, 18, 19, 20]);

    assert_eq!(arrays(player.all_wins()), vec![[0, 1, 2], [18, 19, 20]]);
    assert_eq!(player.first_win().unwrap().to_array(), [0, 1, 2]);
}

#[test]
fn test_partial_row_is_not_a_win() {
    init_tracing();
    let mut player = Player::new(());
    place_all(&mut player, &[0, 1]);
    assert!(player.first_win().is_none());
    assert!(player.all_wins().is_empty());
}

#[test]
fn test_descending_diagonal_win() {
    init_tracing();
    let mut player = Player::new(());
    player.place_at(Size::Large, Cell::TopRight);
    player.place_at(Size::Medium, Cell::Center);
    player.place_at(Size::Small, Cell::BottomLeft);

    let win = player.first_win().unwrap();
    assert_eq!(win.to_array(), [20, 13, 6]);
    assert_eq!(
        win.pieces(),
        [
            (Size::Large, Cell::TopRight),
            (Size::Medium, Cell::Center),
            (Size::Small, Cell::BottomLeft),
        ]
    );
}

#[test]
fn test_replay_of_mixed_position() {
    init_tracing();
    let mut player = Player::new("red").with_highlight("bright red");
    for cell in [Cell::Center, Cell::BottomRight, Cell::BottomLeft] {
        player.place_at(Size::Small, cell);
    }
    assert!(player.first_win().is_none());

    // Small top row plus large top row: two same-size wins.
    for cell in [Cell::TopRight, Cell::TopLeft, Cell::TopCenter] {
        player.place_at(Size::Small, cell);
    }
    for cell in [Cell::TopLeft, Cell::TopCenter, Cell::TopRight] {
        player.place_at(Size::Large, cell);
    }
    player.place(at(24));
    player.place(at(12));

    let wins = arrays(player.all_wins());
    assert!(wins.contains(&[0, 1, 2]));
    assert!(wins.contains(&[18, 19, 20]));
    assert!(wins.contains(&[0, 12, 24]));
    assert!(wins.contains(&[2, 4, 6]));
    assert_eq!(player.count_remaining(Size::Small), -3);
    assert_eq!(player.count_remaining(Size::Large), -1);
}

#[test]
fn test_place_remove_round_trip() {
    init_tracing();
    let mut player = Player::new(());
    place_all(&mut player, &[3, 14]);
    let before = *player.occupancy();

    player.place(at(25));
    assert!(player.is_placed(at(25)));
    player.remove(at(25));
    assert_eq!(*player.occupancy(), before);

    player.remove_at(Size::Small, Cell::MiddleLeft);
    assert!(!player.is_placed(at(3)));
}

#[test]
fn test_counts_sum_to_three() {
    init_tracing();
    let mut player = Player::new(());
    place_all(&mut player, &[0, 9, 10, 18, 19, 20]);
    for size in Size::ALL {
        assert_eq!(
            player.count_placed(size) as i32 + player.count_remaining(size),
            3
        );
    }
    assert_eq!(player.remaining_by_size(), (2, 1, 0));
}

#[test]
fn test_has_all_empty_is_vacuously_true() {
    init_tracing();
    let player = Player::new(());
    assert!(player.has_all(&[]));
}

#[test]
fn test_has_all_matches_every_catalog_triple() {
    init_tracing();
    for triple in strictly_otrio::winning_triples() {
        let mut player = Player::new(());
        for index in triple.indices() {
            player.place(index);
        }
        assert!(player.has_all(&triple.indices()));
        assert_eq!(player.first_win(), Some(triple), "triple {}", triple);

        player.remove(triple.indices()[1]);
        assert!(!player.has_all(&triple.indices()));
    }
}

#[test]
fn test_play_continues_after_win() {
    init_tracing();
    let mut player = Player::new(());
    place_all(&mut player, &[4, 13, 22]);
    assert!(player.has_won());
    player.place_at(Size::Small, Cell::TopLeft);
    assert_eq!(player.count_placed(Size::Small), 2);
    assert!(player.has_won());
}

#[test]
fn test_occupied_view_for_renderer() {
    init_tracing();
    let mut player = Player::new(());
    player.place_at(Size::Large, Cell::BottomRight);
    player.place_at(Size::Small, Cell::TopCenter);

    let pieces: Vec<_> = player.occupied().collect();
    assert_eq!(
        pieces,
        vec![
            (at(1), Size::Small, Cell::TopCenter),
            (at(26), Size::Large, Cell::BottomRight),
        ]
    );
    assert!(player.highlighted().is_empty());
}
