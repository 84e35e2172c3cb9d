use kingshand::board::{Board, Card, Companion, CompanionRegistry, GameState, House, Player, HELD};
use kingshand::search::apply_move;
use kingshand::{Move, Seat};
use pretty_assertions::assert_eq;

fn state() -> GameState {
    let board = Board::new(vec![
        Card::mover(0),
        Card::new(House::Stark, "Arya", 5),
        Card::new(House::Tully, "Edmure", 9),
        Card::new(House::Tyrell, "Loras", 20),
        Card::new(House::Greyjoy, "Asha", 31),
    ]);
    GameState::new(board, Player::default(), Player::default(), CompanionRegistry::standard())
}

#[test]
fn jon_copies_the_house_twice_without_capturing() {
    let mut s = state();
    assert_eq!(apply_move(&mut s, Seat::Two, Move::Jon { target: 9 }), Some(House::Tully));
    let held = &s.player2.cards()[&House::Tully];
    assert_eq!(held.len(), 2);
    assert!(held.iter().all(|c| c.location == HELD && c.name == "Jon Snow"));
    assert_eq!(s.board, state().board);
    assert_eq!(s.player1.card_count(), 0);
    assert!(!s.companions.contains(Companion::Jon));
}

#[test]
fn jon_on_empty_cell_still_consumes_jon() {
    let mut s = state();
    assert_eq!(apply_move(&mut s, Seat::One, Move::Jon { target: 35 }), None);
    assert_eq!(s.player1.card_count(), 0);
    assert!(!s.companions.contains(Companion::Jon));
    assert_eq!(s.companions.len(), 5);
}

#[test]
fn gendry_adds_a_baratheon() {
    let mut s = state();
    assert_eq!(apply_move(&mut s, Seat::One, Move::Gendry), Some(House::Baratheon));
    assert_eq!(s.player1.house_count(House::Baratheon), 1);
    assert_eq!(s.board, state().board);
    assert!(!s.companions.contains(Companion::Gendry));
}

#[test]
fn ramsay_swaps_cards_including_the_mover() {
    let mut s = state();
    assert_eq!(apply_move(&mut s, Seat::One, Move::Ramsay { first: 0, second: 20 }), None);
    assert_eq!(s.board.mover_location(), Some(20));
    assert_eq!(s.board.card_at(0).map(|c| c.name.as_str()), Some("Loras"));
    assert_eq!(s.board.len(), 5);
    assert_eq!(s.player1.card_count(), 0);
}

#[test]
fn sandor_removes_anything_but_the_mover() {
    let mut s = state();
    assert_eq!(apply_move(&mut s, Seat::One, Move::Sandor { target: 31 }), None);
    assert!(s.board.card_at(31).is_none());
    assert_eq!(s.board.len(), 4);
    assert_eq!(s.player1.card_count(), 0, "Sandor discards, he does not capture");

    let mut s = state();
    apply_move(&mut s, Seat::One, Move::Sandor { target: 0 });
    assert_eq!(s.board.mover_location(), Some(0));
    assert_eq!(s.board.len(), 5);
    assert!(!s.companions.contains(Companion::Sandor));
}

#[test]
fn jaqen_removes_two_cards_and_two_companions() {
    let mut s = state();
    let mv = Move::Jaqen { first: 5, second: 20, discard: Companion::Sandor };
    assert_eq!(apply_move(&mut s, Seat::One, mv), None);
    assert_eq!(
        s.companions.names().collect::<Vec<_>>(),
        vec![Companion::Jon, Companion::Gendry, Companion::Ramsay, Companion::Melisandre]
    );
    assert_eq!(s.board.locations(), vec![0, 9, 31]);
    assert_eq!(s.board.card_at(9), state().board.card_at(9));
    assert_eq!(s.board.card_at(31), state().board.card_at(31));
}

#[test]
fn jaqen_tolerates_missing_targets_and_companions() {
    let mut s = state();
    s.companions.remove(Companion::Sandor);
    let mv = Move::Jaqen { first: 5, second: 34, discard: Companion::Sandor };
    assert_eq!(apply_move(&mut s, Seat::One, mv), None);
    assert_eq!(s.board.locations(), vec![0, 9, 20, 31]);
    assert!(!s.companions.contains(Companion::Jaqen));
    assert_eq!(s.companions.len(), 4);
}

#[test]
fn melisandre_only_consumes_herself() {
    let mut s = state();
    assert_eq!(apply_move(&mut s, Seat::Two, Move::Melisandre), None);
    assert_eq!(s.board, state().board);
    assert_eq!(s.companions.len(), 5);
    assert!(!s.companions.contains(Companion::Melisandre));
}

#[test]
fn stale_companion_is_harmless() {
    let mut s = state();
    s.companions.remove(Companion::Gendry);
    assert_eq!(apply_move(&mut s, Seat::One, Move::Gendry), Some(House::Baratheon));
    assert_eq!(s.companions.len(), 5);
}
