//! Named board positions and their display locations.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions, in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 1-based column.
    pub fn column(self) -> u8 {
        (self.to_index() % 3 + 1) as u8
    }

    /// 1-based row.
    pub fn row(self) -> u8 {
        (self.to_index() / 3 + 1) as u8
    }

    /// Display location derived from the index.
    pub fn location(self) -> Location {
        Location::new(self.column(), self.row())
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

/// Column/row pair shown in the move list, both 1-based.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("(col {}, row {})", col, row)]
pub struct Location {
    /// Column, 1-3.
    col: u8,
    /// Row, 1-3.
    row: u8,
}

impl Location {
    /// Column, 1-3.
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Row, 1-3.
    pub fn row(&self) -> u8 {
        self.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_bounds() {
        assert_eq!(Position::from_index(0), Some(Position::TopLeft));
        assert_eq!(Position::from_index(8), Some(Position::BottomRight));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_location_formula() {
        for pos in Position::ALL {
            let i = pos.to_index();
            assert_eq!(pos.location().col() as usize, i % 3 + 1);
            assert_eq!(pos.location().row() as usize, i / 3 + 1);
        }
    }

    #[test]
    fn test_bottom_left_label_is_column_row() {
        assert_eq!(Position::BottomLeft.location().to_string(), "(col 1, row 3)");
    }

    #[test]
    fn test_valid_moves_skip_occupied() {
        let board = Board::new().with_mark(Position::Center, crate::Player::X);
        let moves = Position::valid_moves(&board);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Position::Center));
    }
}
