//! Monotonic history invariant: each entry adds exactly its own move.

use super::Invariant;
use crate::{Board, History};

/// Invariant: every board is the previous board plus one new mark.
///
/// Entry 0 is the empty board with no move. Entry k holds a move whose
/// square was empty in entry k-1 and the boards differ nowhere else.
pub struct MonotonicHistoryInvariant;

impl Invariant<History> for MonotonicHistoryInvariant {
    fn holds(history: &History) -> bool {
        let Some(start) = history.get(0) else {
            return false;
        };
        if *start.board() != Board::new() || start.last_move().is_some() {
            return false;
        }

        history.entries().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(mov) = after.last_move() else {
                return false;
            };
            before.board().is_empty(mov.position)
                && before.board().with_mark(mov.position, mov.player) == *after.board()
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to the previous board"
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{GameController, Move, Player, Position};

    /// History whose second entry claims a move that is not on its board
    /// and was played by the wrong mark.
    pub(crate) fn corrupt_history() -> History {
        let wrong_board = Board::new().with_mark(Position::TopLeft, Player::O);
        History::new().append(wrong_board, Move::new(Player::O, Position::Center))
    }

    #[test]
    fn test_new_history_holds() {
        assert!(MonotonicHistoryInvariant::holds(&History::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let mut game = GameController::new();
        for index in [4, 0, 8, 2] {
            game.on_cell_click(index).unwrap();
        }
        assert!(MonotonicHistoryInvariant::holds(game.history()));
        let counts: Vec<usize> = game
            .history()
            .entries()
            .iter()
            .map(|entry| entry.board().occupied())
            .collect();
        assert_eq!(counts, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_board_mismatch_violates() {
        assert!(!MonotonicHistoryInvariant::holds(&corrupt_history()));
    }

    #[test]
    fn test_overwrite_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let overwritten = first.with_mark(Position::Center, Player::O);
        let history = History::new()
            .append(first, Move::new(Player::X, Position::Center))
            .append(overwritten, Move::new(Player::O, Position::Center));
        assert!(!MonotonicHistoryInvariant::holds(&history));
    }
}
