// Alpha-beta engine for Hand of the King
pub mod board;
pub mod deal;
pub mod error;
pub mod protocol;
pub mod search;

pub use board::{Board, Card, Companion, CompanionRegistry, GameState, House, Move, Phase, Player, Seat};
pub use error::{GameError, Result};
pub use search::{get_move, SearchParams, SearchResult, Searcher};
