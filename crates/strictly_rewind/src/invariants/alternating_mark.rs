//! Alternating mark invariant: X plays odd steps, O plays even steps.

use super::Invariant;
use crate::{History, Player};

/// Invariant: players alternate, starting with X.
pub struct AlternatingMarkInvariant;

impl Invariant<History> for AlternatingMarkInvariant {
    fn holds(history: &History) -> bool {
        history
            .entries()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| {
                entry
                    .last_move()
                    .is_some_and(|mov| mov.player == Player::to_move_at(step - 1))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameController, Move, Position};

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = GameController::new();
        for index in [0, 4, 2, 6, 8] {
            game.on_cell_click(index).unwrap();
        }
        assert!(AlternatingMarkInvariant::holds(game.history()));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let first = Board::new().with_mark(Position::TopLeft, Player::X);
        let second = first.with_mark(Position::Center, Player::X);
        let history = History::new()
            .append(first, Move::new(Player::X, Position::TopLeft))
            .append(second, Move::new(Player::X, Position::Center));
        assert!(!AlternatingMarkInvariant::holds(&history));
    }
}
