use serde::{Deserialize, Serialize};

use super::{Board, CompanionRegistry, Player, Seat};
use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Normal,
    ChooseCompanion,
}

/// Snapshot of a game between two plies. Cloning it is how the search isolates branches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    #[serde(default)]
    pub player1: Player,
    #[serde(default)]
    pub player2: Player,
    #[serde(default)]
    pub companions: CompanionRegistry,
}

impl GameState {
    pub fn new(board: Board, player1: Player, player2: Player, companions: CompanionRegistry) -> Self {
        Self { board, player1, player2, companions }
    }

    pub fn from_json(s: &str) -> Result<Self> { Ok(serde_json::from_str(s)?) }

    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.player1,
            Seat::Two => &self.player2,
        }
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::One => &mut self.player1,
            Seat::Two => &mut self.player2,
        }
    }

    /// Mutable board, registry and one player at once, as the applicator needs them.
    pub(crate) fn split_mut(&mut self, seat: Seat) -> (&mut Board, &mut CompanionRegistry, &mut Player) {
        let player = match seat {
            Seat::One => &mut self.player1,
            Seat::Two => &mut self.player2,
        };
        (&mut self.board, &mut self.companions, player)
    }

    pub fn validate(&self) -> Result<()> { self.board.validate() }
}
