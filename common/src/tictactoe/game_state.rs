use rand::Rng;

use crate::log;
use super::board::{Board, apply_move, new_game};
use super::bot_controller::select_move;
use super::error::GameError;
use super::types::{FirstPlayerMode, GameOutcome, Player, WinningLine};
use super::win_detector::{outcome, winning_line};

/// A single game between the human and the computer. Unlike the bare rules
/// functions, the session enforces strict turn alternation and refuses moves
/// once the game is decided.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_player: Player,
    pub first_player: Player,
    pub status: GameOutcome,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
}

impl TicTacToeGameState {
    pub fn new<R: Rng + ?Sized>(first_player_mode: FirstPlayerMode, rng: &mut R) -> Self {
        let first_player = match first_player_mode {
            FirstPlayerMode::Human => Player::Human,
            FirstPlayerMode::Computer => Player::Computer,
            FirstPlayerMode::Random => {
                if rng.random_bool(0.5) {
                    Player::Human
                } else {
                    Player::Computer
                }
            }
        };

        Self {
            board: new_game(),
            current_player: first_player,
            first_player,
            status: GameOutcome::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, first_player_mode: FirstPlayerMode, rng: &mut R) {
        *self = Self::new(first_player_mode, rng);
        log!("New game, {:?} moves first", self.first_player);
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn place_mark(&mut self, player: Player, index: usize) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        if player != self.current_player {
            return Err(GameError::NotYourTurn(player));
        }

        self.board = apply_move(&self.board, index, player)?;
        self.last_move = Some(index);
        self.check_game_over();

        if !self.is_over() {
            self.current_player = player.opponent();
        }

        Ok(())
    }

    /// Lets the selector choose and place the computer's mark.
    pub fn play_computer_turn(&mut self) -> Result<usize, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_player != Player::Computer {
            return Err(GameError::NotYourTurn(Player::Computer));
        }

        let index = select_move(&self.board)?;
        self.place_mark(Player::Computer, index)?;
        Ok(index)
    }

    fn check_game_over(&mut self) {
        self.status = outcome(&self.board);
        self.winning_line = winning_line(&self.board);

        if self.is_over() {
            log!("Game over: {:?}", self.status);
        }
    }
}
