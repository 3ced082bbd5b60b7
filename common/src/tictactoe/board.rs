use std::fmt;

use super::error::GameError;
use super::types::{BOARD_SIZE, CELL_COUNT, Cell, Player};

/// Nine cells in row-major order: row 0 holds indices 0..=2, row 2 holds 6..=8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Builds a board from nine symbols: `X` human, `O` computer, anything
    /// else empty. Whitespace is skipped.
    #[cfg(test)]
    pub fn from_symbols(symbols: &str) -> Self {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let marks = symbols.chars().filter(|c| !c.is_whitespace());
        for (cell, symbol) in cells.iter_mut().zip(marks) {
            *cell = match symbol {
                'X' => Cell::Human,
                'O' => Cell::Computer,
                _ => Cell::Empty,
            };
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn marks_of(&self, player: Player) -> usize {
        let cell = Cell::from(player);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    // Unchecked place/clear pair used by the search for in-place backtracking.
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        self.cells[index] = player.into();
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let symbols: String = row.iter().map(Cell::symbol).collect();
            write!(f, "{}", symbols)?;
        }
        Ok(())
    }
}

pub fn new_game() -> Board {
    Board::default()
}

/// Returns a copy of `board` with `index` marked for `player`. Whose turn it
/// is is not checked here; see `TicTacToeGameState` for turn enforcement.
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, GameError> {
    match board.cell(index) {
        None => Err(GameError::IndexOutOfRange(index)),
        Some(Cell::Empty) => {
            let mut next = *board;
            next.place(index, player);
            Ok(next)
        }
        Some(_) => Err(GameError::CellOccupied(index)),
    }
}

pub fn is_full(board: &Board) -> bool {
    board.cells.iter().all(|cell| !cell.is_empty())
}

pub fn legal_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.cell(index).is_some_and(|cell| cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_empty() {
        let board = new_game();
        assert!(board.cells().iter().all(Cell::is_empty));
        assert_eq!(legal_moves(&board), (0..9).collect::<Vec<_>>());
        assert!(!is_full(&board));
    }

    #[test]
    fn test_apply_move_marks_only_target_cell() {
        let board = new_game();
        let next = apply_move(&board, 4, Player::Computer).unwrap();

        assert_eq!(next.cell(4), Some(Cell::Computer));
        assert_eq!(next.marks_of(Player::Computer), 1);
        assert_eq!(next.marks_of(Player::Human), 0);
        assert_eq!(board, new_game());
    }

    #[test]
    fn test_apply_move_on_occupied_cell_fails_and_keeps_board() {
        let board = Board::from_symbols("X.. .O. ...");
        let before = board;

        assert_eq!(
            apply_move(&board, 0, Player::Computer),
            Err(GameError::CellOccupied(0))
        );
        assert_eq!(
            apply_move(&board, 4, Player::Human),
            Err(GameError::CellOccupied(4))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_out_of_range() {
        let board = new_game();
        assert_eq!(
            apply_move(&board, 9, Player::Human),
            Err(GameError::IndexOutOfRange(9))
        );
        assert_eq!(
            apply_move(&board, usize::MAX, Player::Human),
            Err(GameError::IndexOutOfRange(usize::MAX))
        );
    }

    #[test]
    fn test_apply_move_does_not_enforce_turn_order() {
        let board = apply_move(&new_game(), 0, Player::Human).unwrap();
        let board = apply_move(&board, 1, Player::Human).unwrap();

        assert_eq!(board.marks_of(Player::Human), 2);
    }

    #[test]
    fn test_legal_moves_are_ascending_empty_cells() {
        let board = Board::from_symbols("X.O .X. O..");
        assert_eq!(legal_moves(&board), vec![1, 3, 5, 7, 8]);
        assert!(is_valid_move(&board, 1));
        assert!(!is_valid_move(&board, 0));
        assert!(!is_valid_move(&board, 9));
    }

    #[test]
    fn test_is_full() {
        assert!(is_full(&Board::from_symbols("XOX XOO OXX")));
        assert!(!is_full(&Board::from_symbols("XOX XO. OXX")));
    }

    #[test]
    fn test_display_renders_rows() {
        let board = Board::from_symbols("X.O .X. O..");
        assert_eq!(board.to_string(), "X.O\n.X.\nO..");
    }
}
