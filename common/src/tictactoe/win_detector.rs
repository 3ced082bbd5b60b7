use super::board::{Board, is_full};
use super::types::{Cell, GameOutcome, Player, WinningLine};

/// Rows, then columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|line| line.player)
}

/// First completed line in `WIN_LINES` order. On an impossible board where
/// both sides hold a line, the earlier line wins.
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let player = cells[a].player()?;
        (cells[b] == cells[a] && cells[c] == cells[a]).then(|| WinningLine::new(player, line))
    })
}

pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(player) = winner(board) {
        return player.into();
    }
    if is_full(board) {
        GameOutcome::Tie
    } else {
        GameOutcome::InProgress
    }
}

/// Search-time check for a single side, mirroring the fixed terminal order
/// the selector evaluates (computer, then human).
pub(crate) fn has_won(board: &Board, player: Player) -> bool {
    let cells = board.cells();
    let cell = Cell::from(player);
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&index| cells[index] == cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::apply_move;

    #[test]
    fn test_every_line_is_detected_for_both_players() {
        for player in [Player::Human, Player::Computer] {
            for line in WIN_LINES {
                let mut board = Board::default();
                for index in line {
                    board = apply_move(&board, index, player).unwrap();
                }

                assert_eq!(winner(&board), Some(player), "line {:?}", line);
                assert_eq!(winning_line(&board).unwrap().cells, line);
                assert!(has_won(&board, player));
                assert!(!has_won(&board, player.opponent()));
            }
        }
    }

    #[test]
    fn test_no_winner_without_completed_line() {
        let board = Board::from_symbols("XX. OO. ...");
        assert_eq!(winner(&board), None);
        assert_eq!(outcome(&board), GameOutcome::InProgress);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_symbols("XXO ... ...");
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board = Board::from_symbols("XOX XOO OXX");
        assert!(is_full(&board));
        assert_eq!(winner(&board), None);
        assert_eq!(outcome(&board), GameOutcome::Tie);
    }

    #[test]
    fn test_win_on_last_cell_is_not_tie() {
        let board = Board::from_symbols("XOX OXO OXX");
        assert!(is_full(&board));
        assert_eq!(outcome(&board), GameOutcome::HumanWin);
    }

    #[test]
    fn test_computer_win_outcome() {
        let board = Board::from_symbols("XX. OOO X..");
        assert_eq!(outcome(&board), GameOutcome::ComputerWin);
        assert_eq!(winning_line(&board).unwrap().cells, [3, 4, 5]);
    }

    #[test]
    fn test_both_lines_reports_first_in_evaluation_order() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            Cell::Computer, Cell::Computer, Cell::Computer,
            Cell::Empty, Cell::Empty, Cell::Empty,
            Cell::Human, Cell::Human, Cell::Human,
        ]);
        assert_eq!(winner(&board), Some(Player::Computer));

        let board = Board::from_symbols("XXX ... OOO");
        assert_eq!(winner(&board), Some(Player::Human));

        let board = Board::from_symbols("O.X O.X O.X");
        assert_eq!(winner(&board), Some(Player::Computer));
    }
}
