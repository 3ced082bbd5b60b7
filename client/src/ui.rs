use tictactoe_common::tictactoe::{BOARD_SIZE, Board, GameOutcome, WinningLine};

pub const TITLE: &str = "Tic Tac Toe";
pub const HELP: &str = "Enter 1-9 to mark a cell (1 is top left, 9 is bottom right), r to reset, q to quit.";

/// Draws the grid. Empty cells show their 1-based number when requested;
/// cells of a completed line are wrapped in brackets.
pub fn render_board(board: &Board, show_cell_numbers: bool, winning_line: Option<&WinningLine>) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row_index, row)| {
            row.iter()
                .enumerate()
                .map(|(column, cell)| {
                    let index = row_index * BOARD_SIZE + column;
                    let symbol = match cell.player() {
                        Some(player) => player.symbol(),
                        None if show_cell_numbers => char::from(b'1' + index as u8),
                        None => ' ',
                    };
                    if winning_line.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn outcome_message(outcome: GameOutcome) -> Option<&'static str> {
    match outcome {
        GameOutcome::InProgress => None,
        GameOutcome::HumanWin => Some("Player Wins!"),
        GameOutcome::ComputerWin => Some("Bot Wins!"),
        GameOutcome::Tie => Some("It's a Tie!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::tictactoe::{Player, apply_move, new_game};

    #[test]
    fn test_empty_board_shows_cell_numbers() {
        let rendered = render_board(&new_game(), true, None);
        assert_eq!(
            rendered,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_marks_and_blank_cells() {
        let board = apply_move(&new_game(), 0, Player::Human).unwrap();
        let board = apply_move(&board, 4, Player::Computer).unwrap();
        let rendered = render_board(&board, false, None);
        assert!(rendered.starts_with(" X |   |   "));
        assert!(rendered.contains(" O "));
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let mut board = new_game();
        for index in [0, 1, 2] {
            board = apply_move(&board, index, Player::Computer).unwrap();
        }
        let line = WinningLine::new(Player::Computer, [0, 1, 2]);
        let rendered = render_board(&board, true, Some(&line));
        assert!(rendered.starts_with("[O]|[O]|[O]"));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(outcome_message(GameOutcome::InProgress), None);
        assert_eq!(outcome_message(GameOutcome::HumanWin), Some("Player Wins!"));
        assert_eq!(outcome_message(GameOutcome::ComputerWin), Some("Bot Wins!"));
        assert_eq!(outcome_message(GameOutcome::Tie), Some("It's a Tie!"));
    }
}
