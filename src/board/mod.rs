pub mod companion;
pub mod moves;
pub mod player;
pub mod state;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GameError, Result};

pub use companion::{Companion, CompanionInfo, CompanionRegistry};
pub use moves::Move;
pub use player::{Agent, Player, Seat};
pub use state::{GameState, Phase};

/// Board location: `row * 6 + col` for cards in play, [`HELD`] for cards in a holding.
pub type Location = i8;

pub const BOARD_SIDE: i8 = 6;
pub const BOARD_CELLS: i8 = BOARD_SIDE * BOARD_SIDE;
pub const HELD: Location = -1;
pub const MOVER_NAME: &str = "Varys";

#[inline]
pub fn row_col(loc: Location) -> (i8, i8) { (loc / BOARD_SIDE, loc % BOARD_SIDE) }

#[inline]
pub fn on_board(loc: Location) -> bool { (0..BOARD_CELLS).contains(&loc) }

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum House {
    Stark,
    Greyjoy,
    Lannister,
    Targaryen,
    Baratheon,
    Tully,
    Tyrell,
    /// Tag carried by the mover token itself. Never captured.
    Varys,
}

impl House {
    /// Houses that can be captured, in deck order.
    pub const CAPTURABLE: [House; 7] = [
        House::Stark,
        House::Greyjoy,
        House::Lannister,
        House::Targaryen,
        House::Baratheon,
        House::Tully,
        House::Tyrell,
    ];
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Debug::fmt(self, f) }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub house: House,
    pub name: String,
    pub location: Location,
}

impl Card {
    pub fn new(house: House, name: impl Into<String>, location: Location) -> Self {
        Self { house, name: name.into(), location }
    }

    pub fn mover(location: Location) -> Self { Self::new(House::Varys, MOVER_NAME, location) }

    /// Synthetic card that only ever lives in a holding (Jon Snow copies, Gendry).
    pub fn held(house: House, name: impl Into<String>) -> Self { Self::new(house, name, HELD) }

    #[inline]
    pub fn is_mover(&self) -> bool { self.name == MOVER_NAME }
}

/// Cards currently in play, mover token included, in insertion order.
/// Move enumeration follows this order, so it is part of the search's determinism.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new(cards: Vec<Card>) -> Self { Self { cards } }

    pub fn cards(&self) -> &[Card] { &self.cards }

    pub(crate) fn cards_mut(&mut self) -> &mut Vec<Card> { &mut self.cards }

    pub fn len(&self) -> usize { self.cards.len() }

    pub fn is_empty(&self) -> bool { self.cards.is_empty() }

    pub fn mover_index(&self) -> Option<usize> { self.cards.iter().position(Card::is_mover) }

    pub fn mover(&self) -> Option<&Card> { self.mover_index().map(|i| &self.cards[i]) }

    pub fn mover_location(&self) -> Option<Location> { self.mover().map(|c| c.location) }

    pub fn index_at(&self, loc: Location) -> Option<usize> {
        self.cards.iter().position(|c| c.location == loc)
    }

    pub fn card_at(&self, loc: Location) -> Option<&Card> { self.index_at(loc).map(|i| &self.cards[i]) }

    /// Removes the card at `loc` unless it is the mover token.
    pub fn remove_at(&mut self, loc: Location) -> Option<Card> {
        let idx = self.index_at(loc)?;
        if self.cards[idx].is_mover() { return None; }
        Some(self.cards.remove(idx))
    }

    /// Exchanges the locations of the cards at `a` and `b`. Returns false if either is missing.
    pub fn swap_locations(&mut self, a: Location, b: Location) -> bool {
        match (self.index_at(a), self.index_at(b)) {
            (Some(i), Some(j)) => {
                self.cards[i].location = b;
                self.cards[j].location = a;
                true
            }
            _ => false,
        }
    }

    pub fn count_house(&self, house: House) -> usize {
        self.cards.iter().filter(|c| c.house == house).count()
    }

    /// Locations of every card except the mover token, in board order.
    pub fn non_mover_locations(&self) -> Vec<Location> {
        self.cards.iter().filter(|c| !c.is_mover()).map(|c| c.location).collect()
    }

    pub fn locations(&self) -> Vec<Location> { self.cards.iter().map(|c| c.location).collect() }

    /// Checks the structural invariants: one mover, locations on the grid, no shared cells.
    pub fn validate(&self) -> Result<()> {
        let movers = self.cards.iter().filter(|c| c.is_mover()).count();
        match movers {
            0 => return Err(GameError::MissingMover),
            1 => {}
            n => return Err(GameError::MultipleMovers(n)),
        }
        let mut seen = [false; BOARD_CELLS as usize];
        for c in &self.cards {
            if !on_board(c.location) { return Err(GameError::LocationOutOfRange(c.location as i64)); }
            let slot = &mut seen[c.location as usize];
            if *slot { return Err(GameError::DuplicateLocation(c.location)); }
            *slot = true;
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIDE {
            for col in 0..BOARD_SIDE {
                let tag = match self.card_at(row * BOARD_SIDE + col) {
                    Some(c) if c.is_mover() => "**".to_string(),
                    Some(c) => format!("{}", c.house).chars().take(2).collect(),
                    None => "..".to_string(),
                };
                write!(f, "{tag} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_col_matches_integer_division() {
        assert_eq!(row_col(0), (0, 0));
        assert_eq!(row_col(16), (2, 4));
        assert_eq!(row_col(35), (5, 5));
    }

    #[test]
    fn remove_at_never_takes_the_mover() {
        let mut b = Board::new(vec![Card::mover(3), Card::new(House::Stark, "Arya", 4)]);
        assert!(b.remove_at(3).is_none());
        assert_eq!(b.remove_at(4).map(|c| c.name), Some("Arya".to_string()));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn validate_flags_duplicates_and_missing_mover() {
        let dup = Board::new(vec![Card::mover(0), Card::new(House::Tully, "Edmure", 5), Card::new(House::Tyrell, "Loras", 5)]);
        assert!(matches!(dup.validate(), Err(GameError::DuplicateLocation(5))));
        let none = Board::new(vec![Card::new(House::Tully, "Edmure", 5)]);
        assert!(matches!(none.validate(), Err(GameError::MissingMover)));
    }
}
