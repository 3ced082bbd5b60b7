use std::io::{BufRead, Write};
use std::time::Duration;

use rand::Rng;
use tictactoe_common::log;
use tictactoe_common::tictactoe::{FirstPlayerMode, GameError, GameOutcome, Player, TicTacToeGameState};

use crate::command::{Command, parse_command};
use crate::config::Config;
use crate::ui::{HELP, TITLE, outcome_message, render_board};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTally {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub ties: u32,
}

impl ScoreTally {
    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::HumanWin => self.human_wins += 1,
            GameOutcome::ComputerWin => self.computer_wins += 1,
            GameOutcome::Tie => self.ties += 1,
            GameOutcome::InProgress => {}
        }
    }
}

/// Drives a local human-versus-computer game over line-based text I/O.
pub struct TicTacToeRunner<R: Rng> {
    game: TicTacToeGameState,
    first_player_mode: FirstPlayerMode,
    bot_delay: Duration,
    show_cell_numbers: bool,
    tally: ScoreTally,
    rng: R,
}

impl<R: Rng> TicTacToeRunner<R> {
    pub fn new(config: &Config, mut rng: R) -> Self {
        let game = TicTacToeGameState::new(config.first_player, &mut rng);
        Self {
            game,
            first_player_mode: config.first_player,
            bot_delay: Duration::from_millis(config.bot_delay_ms),
            show_cell_numbers: config.show_cell_numbers,
            tally: ScoreTally::default(),
            rng,
        }
    }

    #[cfg(test)]
    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    #[cfg(test)]
    pub fn game(&self) -> &TicTacToeGameState {
        &self.game
    }

    pub fn run(&mut self, input: impl BufRead, output: &mut impl Write) -> std::io::Result<ScoreTally> {
        writeln!(output, "{}", TITLE)?;
        writeln!(output, "{}", HELP)?;
        self.start_game(output)?;

        for line in input.lines() {
            let command = match parse_command(&line?) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            match command {
                Command::Place(index) => self.human_turn(index, output)?,
                Command::Reset => {
                    self.game.reset(self.first_player_mode, &mut self.rng);
                    self.start_game(output)?;
                }
                Command::Help => writeln!(output, "{}", HELP)?,
                Command::Quit => break,
            }
        }

        writeln!(
            output,
            "Final score: you {}, bot {}, ties {}",
            self.tally.human_wins, self.tally.computer_wins, self.tally.ties
        )?;
        Ok(self.tally)
    }

    fn start_game(&mut self, output: &mut impl Write) -> std::io::Result<()> {
        if self.game.current_player == Player::Computer {
            writeln!(output, "Bot moves first.")?;
            return self.computer_turn(output);
        }
        self.draw(output)?;
        writeln!(output, "Your move (X).")
    }

    fn human_turn(&mut self, index: usize, output: &mut impl Write) -> std::io::Result<()> {
        match self.game.place_mark(Player::Human, index) {
            Ok(()) => {}
            Err(GameError::GameOver) => {
                return writeln!(output, "Game is over. Press r to play again or q to quit.");
            }
            Err(GameError::IndexOutOfRange(_)) => {
                return writeln!(output, "There is no cell {}.", index + 1);
            }
            Err(GameError::CellOccupied(_)) => {
                return writeln!(output, "Cell {} is already taken.", index + 1);
            }
            Err(e) => return writeln!(output, "{}", e),
        }

        if self.finish_if_over(output)? {
            return Ok(());
        }
        self.computer_turn(output)
    }

    fn computer_turn(&mut self, output: &mut impl Write) -> std::io::Result<()> {
        if !self.bot_delay.is_zero() {
            std::thread::sleep(self.bot_delay);
        }

        match self.game.play_computer_turn() {
            Ok(index) => writeln!(output, "Bot takes cell {}.", index + 1)?,
            Err(e) => {
                log!("Bot could not move: {}", e);
                return Ok(());
            }
        }

        if !self.finish_if_over(output)? {
            self.draw(output)?;
            writeln!(output, "Your move (X).")?;
        }
        Ok(())
    }

    fn finish_if_over(&mut self, output: &mut impl Write) -> std::io::Result<bool> {
        let Some(message) = outcome_message(self.game.status) else {
            return Ok(false);
        };

        self.tally.record(self.game.status);
        self.draw(output)?;
        writeln!(output, "Game Over: {}", message)?;
        writeln!(output, "Press r to play again or q to quit.")?;
        Ok(true)
    }

    fn draw(&self, output: &mut impl Write) -> std::io::Result<()> {
        let board = render_board(
            &self.game.board,
            self.show_cell_numbers,
            self.game.winning_line.as_ref(),
        );
        writeln!(output, "{}", board)
    }
}
