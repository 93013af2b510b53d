//! Game controller: turns input events into history transitions.
//!
//! The controller is the only mutable state holder. Boards and histories
//! are values it replaces wholesale, so every transition either commits
//! completely or leaves the previous state untouched.

use super::action::{Move, MoveError};
use super::history::{History, HistoryEntry, MAX_ENTRIES, Order};
use super::input::Input;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::position::Position;
use super::rules::{self, Line, WinResult};
use super::types::Player;
use super::view::GameView;
use tracing::{debug, instrument, warn};

/// Status line derived from the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// The displayed board has three in a row.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// All nine squares filled without a winner.
    #[display("Draw.")]
    Draw,
    /// The game continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Owns the history, the current step and the display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameController {
    history: History,
    step: usize,
    x_is_next: bool,
    order: Order,
}

impl GameController {
    /// Fresh game: empty board, X to move, ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(Order::Ascending)
    }

    /// Fresh game with the move list shown in `order`.
    #[instrument]
    pub fn with_order(order: Order) -> Self {
        Self {
            history: History::new(),
            step: 0,
            x_is_next: true,
            order,
        }
    }

    /// The authoritative history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed entry.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Current move-list order.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Player who places the next mark.
    pub fn to_move(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// The displayed entry.
    pub fn current(&self) -> &HistoryEntry {
        // step < history.len() holds after every transition
        self.history.get(self.step).unwrap_or(self.history.last())
    }

    /// Winner scan of the displayed board.
    pub fn win_result(&self) -> WinResult {
        rules::check_winner(self.current().board())
    }

    /// Winning line of the displayed board, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.win_result().line()
    }

    /// Status derived from the displayed board and step.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn status(&self) -> Status {
        if let WinResult::Winner { player, .. } = self.win_result() {
            Status::Winner(player)
        } else if self.history.len() == MAX_ENTRIES && self.step == MAX_ENTRIES - 1 {
            Status::Draw
        } else {
            Status::NextPlayer(self.to_move())
        }
    }

    /// Places the next mark at `index` on the displayed board.
    ///
    /// Any entries after the current step are discarded first. The state is
    /// left unchanged when the displayed board already has a winner or the
    /// square is not playable.
    ///
    /// # Errors
    ///
    /// `GameOver`, `SquareOccupied` or `InvalidIndex` for a rejected click,
    /// `InvariantViolation` if the new history fails its checks (debug
    /// builds only).
    #[instrument(skip(self), fields(step = self.step, player = ?self.to_move()))]
    pub fn on_cell_click(&mut self, index: usize) -> Result<(), MoveError> {
        let board = *self.current().board();

        if self.win_result() != WinResult::NoWinner {
            debug!("Board already won, ignoring click");
            return Err(MoveError::GameOver);
        }

        if !rules::is_legal_move(&board, index) {
            let err = match Position::from_index(index) {
                Some(pos) => MoveError::SquareOccupied(pos),
                None => MoveError::InvalidIndex(index),
            };
            debug!(%err, "Ignoring illegal click");
            return Err(err);
        }

        let player = self.to_move();
        let position = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        let next = rules::apply_move(&board, index, player)?;
        let history = self
            .history
            .truncate(self.step)
            .append(next, Move::new(player, position));

        #[cfg(debug_assertions)]
        HistoryInvariants::check_all(&history).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "History invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        self.history = history;
        self.step = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;
        debug!(step = self.step, ?position, "Move accepted");
        Ok(())
    }

    /// Displays the entry at `target` without changing the history.
    ///
    /// # Errors
    ///
    /// `InvalidStep` if no entry exists at `target`.
    #[instrument(skip(self), fields(step = self.step, len = self.history.len()))]
    pub fn on_history_jump(&mut self, target: usize) -> Result<(), MoveError> {
        if target >= self.history.len() {
            debug!("Ignoring jump past the end of history");
            return Err(MoveError::InvalidStep(target));
        }
        self.step = target;
        self.x_is_next = target % 2 == 0;
        debug!("Jumped");
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self), fields(order = ?self.order))]
    pub fn on_toggle_order(&mut self) {
        self.order = self.order.toggle();
    }

    /// Dispatches a front-end input.
    ///
    /// # Errors
    ///
    /// Whatever the underlying transition rejects with.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Result<(), MoveError> {
        match input {
            Input::Click(index) => self.on_cell_click(index),
            Input::Jump(step) => self.on_history_jump(step),
            Input::ToggleOrder => {
                self.on_toggle_order();
                Ok(())
            }
        }
    }

    /// Read-only projection for rendering.
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
