use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Agent, Board, Card, CompanionRegistry, GameState, House, Location, Player, BOARD_CELLS};

/// Cards per house in the standard deck. With the mover they fill the 6x6 grid.
pub const DECK: [(House, usize); 7] = [
    (House::Stark, 8),
    (House::Greyjoy, 7),
    (House::Lannister, 6),
    (House::Targaryen, 5),
    (House::Baratheon, 4),
    (House::Tully, 3),
    (House::Tyrell, 2),
];

/// House cards of the standard deck, unplaced, in deck order.
pub fn standard_deck() -> Vec<(House, String)> {
    DECK.iter()
        .flat_map(|&(house, n)| (1..=n).map(move |i| (house, format!("{house} {i}"))))
        .collect()
}

/// Shuffles the standard deck plus the mover onto the full grid.
pub fn random_board(rng: &mut SmallRng) -> Board {
    let mut locs: Vec<Location> = (0..BOARD_CELLS).collect();
    locs.shuffle(rng);
    let mut cards: Vec<Card> = standard_deck()
        .into_iter()
        .zip(locs.iter().copied())
        .map(|((house, name), loc)| Card::new(house, name, loc))
        .collect();
    cards.push(Card::mover(locs[locs.len() - 1]));
    Board::new(cards)
}

/// A fresh game between two engine seats with the full companion pool. Same seed, same deal.
pub fn random_state(seed: u64) -> GameState {
    let mut rng = SmallRng::seed_from_u64(seed);
    GameState::new(
        random_board(&mut rng),
        Player::new(Agent::Minimax),
        Player::new(Agent::Minimax),
        CompanionRegistry::standard(),
    )
}
