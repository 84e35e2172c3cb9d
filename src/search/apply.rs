use log::{trace, warn};

use crate::board::{row_col, Board, Card, CompanionRegistry, GameState, House, Location, Move, Player, Seat};

const JON_SNOW: &str = "Jon Snow";
const GENDRY: &str = "Gendry";

/// Applies `mv` for `seat` in place and returns the house captured this ply, if any.
/// Invalid moves leave the state untouched and return `None`.
pub fn apply_move(state: &mut GameState, seat: Seat, mv: Move) -> Option<House> {
    let (board, companions, player) = state.split_mut(seat);
    match mv {
        Move::Normal(target) => apply_normal(board, player, target),
        _ => apply_companion(board, companions, player, mv),
    }
}

/// Moves the mover onto `target`, capturing the target card and every card of the same house
/// strictly between the mover and the target on that row or column.
pub fn apply_normal(board: &mut Board, player: &mut Player, target: Location) -> Option<House> {
    let movers = board.cards().iter().filter(|c| c.is_mover()).count();
    let (Some(mover_idx), Some(target_idx)) = (board.mover_index(), board.index_at(target)) else {
        warn!("normal move to {target} ignored: no mover or no card there");
        return None;
    };
    if movers != 1 || mover_idx == target_idx {
        warn!("normal move to {target} ignored: {movers} mover(s) on board");
        return None;
    }

    let cards = board.cards_mut();
    let house = cards[target_idx].house;
    let (mrow, mcol) = row_col(cards[mover_idx].location);
    let (trow, tcol) = row_col(target);

    let mut captured = vec![target_idx];
    for (i, c) in cards.iter().enumerate() {
        if i == mover_idx || i == target_idx || c.house != house { continue; }
        let (row, col) = row_col(c.location);
        let between = if mrow == trow {
            row == mrow && strictly_between(col, mcol, tcol)
        } else if mcol == tcol {
            col == mcol && strictly_between(row, mrow, trow)
        } else {
            false
        };
        if between { captured.push(i); }
    }

    for &i in &captured { player.add_card(cards[i].clone()); }
    cards[mover_idx].location = target;

    captured.sort_unstable_by(|a, b| b.cmp(a));
    for i in captured {
        if i != mover_idx { cards.remove(i); }
    }
    Some(house)
}

#[inline]
fn strictly_between(x: i8, a: i8, b: i8) -> bool { a.min(b) < x && x < a.max(b) }

/// Plays a companion action. The acting companion leaves the registry whatever the effect did.
pub fn apply_companion(board: &mut Board, companions: &mut CompanionRegistry, player: &mut Player, mv: Move) -> Option<House> {
    let acting = mv.companion()?;
    let house = match mv {
        Move::Jon { target } => match board.card_at(target) {
            Some(card) if !card.is_mover() => {
                let house = card.house;
                for _ in 0..2 { player.add_card(Card::held(house, JON_SNOW)); }
                Some(house)
            }
            _ => None,
        },
        Move::Gendry => {
            player.add_card(Card::held(House::Baratheon, GENDRY));
            Some(House::Baratheon)
        }
        Move::Ramsay { first, second } => {
            if !board.swap_locations(first, second) { trace!("Ramsay swap {first}<->{second} missed a card"); }
            None
        }
        Move::Sandor { target } => {
            board.remove_at(target);
            None
        }
        Move::Jaqen { first, second, discard } => {
            board.remove_at(first);
            board.remove_at(second);
            companions.remove(discard);
            None
        }
        Move::Melisandre | Move::Normal(_) => None,
    };
    companions.remove(acting);
    house
}
