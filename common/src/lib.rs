pub mod config;
pub mod logger;
pub mod tictactoe;

pub use tictactoe::{
    Board, GameError, GameOutcome, Player, apply_move, is_full, legal_moves, new_game,
    select_move, winner,
};
