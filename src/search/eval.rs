use serde::{Deserialize, Serialize};

use crate::board::{GameState, Player};

pub type Score = f32;

pub const CARD_WEIGHT: Score = 1.84;
pub const BANNER_WEIGHT: Score = 2.96;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub cards: Score,
    pub banners: Score,
}

impl Default for EvalWeights {
    fn default() -> Self { Self { cards: CARD_WEIGHT, banners: BANNER_WEIGHT } }
}

// Seat-agnostic: positive means player one is ahead.
pub fn evaluate(player1: &Player, player2: &Player, weights: &EvalWeights) -> Score {
    let cards = player1.card_count() as Score - player2.card_count() as Score;
    let banners = player1.banner_total() as Score - player2.banner_total() as Score;
    weights.cards * cards + weights.banners * banners
}

pub fn evaluate_state(state: &GameState, weights: &EvalWeights) -> Score {
    evaluate(&state.player1, &state.player2, weights)
}
