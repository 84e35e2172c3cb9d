use crate::board::{row_col, Board, Companion, CompanionRegistry, GameState, Location, Move, Phase};

/// Normal moves: every card sharing a row or a column with the mover, in board order.
/// Empty when the mover is missing or isolated.
pub fn normal_moves(board: &Board) -> Vec<Move> {
    let Some(mover) = board.mover_location() else { return Vec::new() };
    let (mrow, mcol) = row_col(mover);
    board
        .cards()
        .iter()
        .filter(|c| !c.is_mover())
        .filter(|c| {
            let (row, col) = row_col(c.location);
            row == mrow || col == mcol
        })
        .map(|c| Move::Normal(c.location))
        .collect()
}

/// Every parameterisation of every companion still in the registry.
/// Companions are enumerated in registry order; candidates are never deduplicated across them.
pub fn companion_moves(board: &Board, companions: &CompanionRegistry) -> Vec<Move> {
    let mut moves = Vec::new();
    if companions.is_empty() { return moves; }
    let targets = board.non_mover_locations();
    for companion in companions.names() {
        match companion {
            Companion::Jon => moves.extend(targets.iter().map(|&target| Move::Jon { target })),
            Companion::Sandor => moves.extend(targets.iter().map(|&target| Move::Sandor { target })),
            Companion::Gendry => moves.push(Move::Gendry),
            Companion::Melisandre => moves.push(Move::Melisandre),
            Companion::Ramsay => {
                for (first, second) in pairs(&board.locations()) {
                    moves.push(Move::Ramsay { first, second });
                }
            }
            Companion::Jaqen => {
                let discards: Vec<Companion> = companions.names().filter(|&c| c != Companion::Jaqen).collect();
                for (first, second) in pairs(&targets) {
                    moves.extend(discards.iter().map(|&discard| Move::Jaqen { first, second, discard }));
                }
            }
        }
    }
    moves
}

pub fn generate(state: &GameState, phase: Phase) -> Vec<Move> {
    match phase {
        Phase::Normal => normal_moves(&state.board),
        Phase::ChooseCompanion => companion_moves(&state.board, &state.companions),
    }
}

/// Unordered pairs `(a[i], a[j])` with `i < j`.
fn pairs(locs: &[Location]) -> impl Iterator<Item = (Location, Location)> + '_ {
    locs.iter().enumerate().flat_map(move |(i, &a)| locs[i + 1..].iter().map(move |&b| (a, b)))
}
