mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, apply_move, is_full, is_valid_move, legal_moves, new_game};
pub use bot_controller::{SearchResult, search, select_move};
pub use error::GameError;
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_SIZE, CELL_COUNT, Cell, FirstPlayerMode, GameOutcome, Player, WinningLine};
pub use win_detector::{WIN_LINES, outcome, winner, winning_line};
