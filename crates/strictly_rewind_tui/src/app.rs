//! Application state and key handling for the terminal UI.

use crossterm::event::KeyCode;
use strictly_rewind::{GameController, GameView, MoveError, Order, Position};
use tracing::{debug, instrument};

/// Pane receiving arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor, Enter places a mark.
    #[default]
    Board,
    /// Arrows move through the move list, Enter jumps.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameController,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    running: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(order: Order) -> Self {
        Self {
            game: GameController::with_order(order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            running: true,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Projection to draw.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step.min(self.game.history().len() - 1)
    }

    /// False once the player asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.running = false;
            }
            KeyCode::Char('o') => self.game.on_toggle_order(),
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    let index = digit as usize - 1;
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    let result = self.game.on_cell_click(index);
                    self.after(result);
                }
            }
            KeyCode::Enter => {
                let result = match self.focus {
                    Focus::Board => self.game.on_cell_click(self.cursor.to_index()),
                    Focus::History => self.game.on_history_jump(self.selected_step()),
                };
                self.after(result);
            }
            KeyCode::Up | KeyCode::Down if self.focus == Focus::History => {
                self.move_selection(key == KeyCode::Down);
            }
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    /// Rejected inputs change nothing; accepted ones resync the selection.
    fn after(&mut self, result: Result<(), MoveError>) {
        match result {
            Ok(()) => self.selected_step = self.game.step(),
            Err(err) => debug!(%err, "Input ignored"),
        }
    }

    /// Moves the move-list highlight one row in display order.
    fn move_selection(&mut self, down: bool) {
        let last = self.game.history().len() - 1;
        let selected = self.selected_step();
        // Rows run start-first when ascending, latest-first when descending.
        let toward_later = down == (self.game.order() == Order::Ascending);
        self.selected_step = if toward_later {
            (selected + 1).min(last)
        } else {
            selected.saturating_sub(1)
        };
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
