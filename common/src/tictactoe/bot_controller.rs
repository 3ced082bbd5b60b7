use crate::log_debug;
use super::board::{Board, is_full, legal_moves};
use super::error::GameError;
use super::types::{CELL_COUNT, Player};
use super::win_detector::{has_won, outcome};

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const TIE_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub index: usize,
    pub score: i32,
    pub nodes_visited: u64,
}

/// Picks the computer's cell. See [`search`] for the scoring rules.
pub fn select_move(board: &Board) -> Result<usize, GameError> {
    search(board).map(|result| result.index)
}

/// Full-depth minimax with the computer maximizing. Leaves score +1, -1 or 0
/// regardless of depth, so a slow win is worth as much as a fast one. Among
/// equally scored moves the lowest index is kept.
///
/// A board that is already won or full has no move to offer and yields
/// `GameError::NoLegalMoves`.
pub fn search(board: &Board) -> Result<SearchResult, GameError> {
    if outcome(board).is_over() {
        return Err(GameError::NoLegalMoves);
    }

    let mut scratch = *board;
    let mut nodes_visited = 1;
    let mut best: Option<(usize, i32)> = None;

    for index in legal_moves(board) {
        scratch.place(index, Player::Computer);
        let score = minimax(&mut scratch, false, &mut nodes_visited);
        scratch.clear(index);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    let (index, score) = best.ok_or(GameError::NoLegalMoves)?;
    log_debug!(
        "Selected cell {} with score {} after {} nodes",
        index,
        score,
        nodes_visited
    );

    Ok(SearchResult {
        index,
        score,
        nodes_visited,
    })
}

fn minimax(board: &mut Board, is_maximizing: bool, nodes_visited: &mut u64) -> i32 {
    *nodes_visited += 1;

    if has_won(board, Player::Computer) {
        return WIN_SCORE;
    }
    if has_won(board, Player::Human) {
        return LOSS_SCORE;
    }
    if is_full(board) {
        return TIE_SCORE;
    }

    let mover = if is_maximizing {
        Player::Computer
    } else {
        Player::Human
    };
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in 0..CELL_COUNT {
        if !board.cells()[index].is_empty() {
            continue;
        }

        board.place(index, mover);
        let score = minimax(board, !is_maximizing, nodes_visited);
        board.clear(index);

        best_score = if is_maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}
