//! Read-only projection handed to front ends on every render.

use super::controller::GameController;
use super::history::{Order, entry_label, reverse_for_display};
use super::rules::Line;
use super::types::Square;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryItem {
    /// Button text, e.g. `Go to move #3 at (col 1, row 2)`.
    label: String,
    /// Step a click on this row jumps to.
    step: usize,
    /// Whether this row is the displayed step.
    current: bool,
}

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Squares of the displayed board.
    board: [Square; 9],
    /// Line to highlight, if the displayed board is won.
    winning_line: Option<Line>,
    /// Status text.
    status: String,
    /// Move list in display order.
    history: Vec<HistoryItem>,
    /// Displayed step.
    current_step: usize,
    /// Order the move list is shown in.
    order: Order,
}

impl GameView {
    /// Whether the square at `index` belongs to the winning line.
    pub fn is_winning_square(&self, index: usize) -> bool {
        self.winning_line
            .is_some_and(|line| line.iter().any(|pos| pos.to_index() == index))
    }
}

impl From<&GameController> for GameView {
    #[instrument(skip(game), fields(step = game.step()))]
    fn from(game: &GameController) -> Self {
        let step = game.step();
        let history = reverse_for_display(game.history().entries(), game.order())
            .into_iter()
            .map(|(index, entry)| HistoryItem {
                label: entry_label(index, entry),
                step: index,
                current: index == step,
            })
            .collect();

        Self {
            board: *game.current().board().squares(),
            winning_line: game.winning_line(),
            status: game.status().to_string(),
            history,
            current_step: step,
            order: game.order(),
        }
    }
}
