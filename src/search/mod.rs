pub mod alphabeta;
pub mod apply;
pub mod eval;
pub mod movegen;

pub use alphabeta::{get_move, SearchParams, SearchResult, Searcher, DEFAULT_DEPTH};
pub use apply::{apply_companion, apply_move, apply_normal};
pub use eval::{evaluate, evaluate_state, EvalWeights, Score};
pub use movegen::{companion_moves, generate, normal_moves};
