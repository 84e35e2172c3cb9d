use kingshand::board::{Board, Card, Companion, CompanionRegistry, House, Move};
use kingshand::search::{companion_moves, normal_moves};
use pretty_assertions::assert_eq;

fn small_board() -> Board {
    Board::new(vec![
        Card::mover(14),
        Card::new(House::Stark, "Arya", 12),
        Card::new(House::Tully, "Edmure", 2),
        Card::new(House::Lannister, "Tyrion", 33),
        Card::new(House::Tyrell, "Loras", 32),
    ])
}

#[test]
fn normal_moves_follow_row_and_column_in_board_order() {
    let moves = normal_moves(&small_board());
    assert_eq!(moves, vec![Move::Normal(12), Move::Normal(2), Move::Normal(32)]);
}

#[test]
fn normal_moves_empty_without_mover_or_line() {
    let no_mover = Board::new(vec![Card::new(House::Stark, "Arya", 12)]);
    assert!(normal_moves(&no_mover).is_empty());
    let isolated = Board::new(vec![Card::mover(0), Card::new(House::Stark, "Arya", 7), Card::new(House::Tully, "Edmure", 35)]);
    assert!(normal_moves(&isolated).is_empty());
}

#[test]
fn companion_moves_cover_every_parameterisation() {
    let board = Board::new(vec![
        Card::mover(0),
        Card::new(House::Stark, "Arya", 5),
        Card::new(House::Tully, "Edmure", 9),
        Card::new(House::Tyrell, "Loras", 20),
    ]);
    let moves = companion_moves(&board, &CompanionRegistry::standard());
    let count = |c: Companion| moves.iter().filter(|m| m.companion() == Some(c)).count();
    assert_eq!(count(Companion::Jon), 3);
    assert_eq!(count(Companion::Gendry), 1);
    assert_eq!(count(Companion::Sandor), 3);
    assert_eq!(count(Companion::Ramsay), 6);
    assert_eq!(count(Companion::Jaqen), 3 * 5);
    assert_eq!(count(Companion::Melisandre), 1);
    assert_eq!(moves.len(), 29);

    // Registry order, then board order within a companion.
    assert_eq!(moves[0], Move::Jon { target: 5 });
    assert_eq!(moves[3], Move::Gendry);
    assert_eq!(moves[moves.len() - 1], Move::Melisandre);
    assert!(moves.contains(&Move::Ramsay { first: 0, second: 20 }), "Ramsay may pick the mover");
    assert!(!moves.iter().any(|m| matches!(m, Move::Jon { target: 0 } | Move::Sandor { target: 0 })));
    assert!(!moves.iter().any(|m| matches!(m, Move::Jaqen { first: 0, .. } | Move::Jaqen { discard: Companion::Jaqen, .. })));
}

#[test]
fn jaqen_needs_another_companion_to_discard() {
    let board = small_board();
    let alone: CompanionRegistry = [Companion::Jaqen].into_iter().collect();
    assert!(companion_moves(&board, &alone).is_empty());

    let with_sandor: CompanionRegistry = [Companion::Jaqen, Companion::Sandor].into_iter().collect();
    let moves = companion_moves(&board, &with_sandor);
    // Sandor: 4 targets. Jaqen: C(4,2) pairs x 1 discard.
    assert_eq!(moves.len(), 4 + 6);
    assert!(moves.contains(&Move::Jaqen { first: 12, second: 2, discard: Companion::Sandor }));
}

#[test]
fn empty_registry_has_no_companion_moves() {
    assert!(companion_moves(&small_board(), &CompanionRegistry::new()).is_empty());
}
