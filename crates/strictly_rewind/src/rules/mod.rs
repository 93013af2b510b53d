//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating and advancing a
//! board. Nothing here mutates its input; a move yields a fresh board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, LINES, WinResult, check_winner};

use crate::{Board, MoveError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// State of a board as judged by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// Moves can still be made.
    InProgress,
    /// `player` completed `line`.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Board is full with no winner.
    Draw,
}

/// Returns true iff `index` is on the board and its square is empty.
#[instrument(skip(board))]
pub fn is_legal_move(board: &Board, index: usize) -> bool {
    Position::from_index(index).is_some_and(|pos| board.is_empty(pos))
}

/// Returns a new board with `player` marked at `index`.
///
/// # Errors
///
/// `MoveError::InvalidIndex` if `index` is not 0-8,
/// `MoveError::SquareOccupied` if the square already holds a mark.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, MoveError> {
    let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
    if !board.is_empty(pos) {
        debug!(?pos, "Refusing to overwrite square");
        return Err(MoveError::SquareOccupied(pos));
    }
    Ok(board.with_mark(pos, player))
}

/// Judges the board: win first, then draw, otherwise in progress.
#[instrument]
pub fn evaluate(board: &Board) -> Evaluation {
    match check_winner(board) {
        WinResult::Winner { player, line } => Evaluation::Won { player, line },
        WinResult::NoWinner if is_full(board) => Evaluation::Draw,
        WinResult::NoWinner => Evaluation::InProgress,
    }
}
