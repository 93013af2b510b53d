//! Bounded length invariant: at most one entry per square plus the start.

use super::Invariant;
use crate::History;
use crate::history::MAX_ENTRIES;

/// Invariant: history never holds more than ten entries.
pub struct BoundedLengthInvariant;

impl Invariant<History> for BoundedLengthInvariant {
    fn holds(history: &History) -> bool {
        (1..=MAX_ENTRIES).contains(&history.len())
    }

    fn description() -> &'static str {
        "History holds between 1 and 10 entries"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::{HistoryInvariants, InvariantSet};
    use crate::{GameController, Move, Player, Position};

    fn drawn_game() -> History {
        let mut game = GameController::new();
        for index in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
            game.on_cell_click(index).unwrap();
        }
        game.history().clone()
    }

    #[test]
    fn test_new_history_holds() {
        assert!(BoundedLengthInvariant::holds(&History::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let history = drawn_game();
        assert_eq!(history.len(), MAX_ENTRIES);
        assert!(BoundedLengthInvariant::holds(&history));
    }

    #[test]
    fn test_eleventh_entry_violates() {
        let full = drawn_game();
        let board = *full.last().board();
        let overlong = full.append(board, Move::new(Player::O, Position::Center));
        assert_eq!(overlong.len(), MAX_ENTRIES + 1);
        assert!(!BoundedLengthInvariant::holds(&overlong));

        let violations = HistoryInvariants::check_all(&overlong).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description == BoundedLengthInvariant::description())
        );
    }
}
