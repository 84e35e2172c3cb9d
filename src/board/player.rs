use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Card, House};

/// Who is driving a seat. Only used to guess the searching side when the caller does not say.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Agent {
    Human,
    #[default]
    #[serde(alias = "minimax_agent")]
    Minimax,
    #[serde(alias = "random_agent")]
    Random,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub agent: Agent,
    #[serde(default)]
    cards: BTreeMap<House, Vec<Card>>,
    #[serde(default)]
    banners: BTreeMap<House, u32>,
}

impl Player {
    pub fn new(agent: Agent) -> Self { Self { agent, ..Self::default() } }

    /// Holdings only grow: cards are appended and never taken back.
    pub fn add_card(&mut self, card: Card) { self.cards.entry(card.house).or_default().push(card); }

    pub fn cards(&self) -> &BTreeMap<House, Vec<Card>> { &self.cards }

    pub fn banners(&self) -> &BTreeMap<House, u32> { &self.banners }

    pub fn set_banner(&mut self, house: House, tally: u32) { self.banners.insert(house, tally); }

    pub fn card_count(&self) -> usize { self.cards.values().map(Vec::len).sum() }

    pub fn house_count(&self, house: House) -> usize { self.cards.get(&house).map_or(0, Vec::len) }

    pub fn banner_total(&self) -> u32 { self.banners.values().sum() }
}

/// Side to move. `One` is the maximizing side: scores are always `player1 - player2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    #[inline]
    pub fn is_max(self) -> bool { self == Seat::One }

    /// Agent-tag heuristic for callers that cannot name the side to move:
    /// a human in seat one facing a non-human means the engine sits in seat two.
    pub fn infer(player1: &Player, player2: &Player) -> Self {
        if player1.agent == Agent::Human && player2.agent != Agent::Human { Seat::Two } else { Seat::One }
    }
}
