//! Strictly Rewind - tic-tac-toe with time travel
//!
//! Pure game rules, an immutable move history and a controller that
//! turns front-end gestures into history transitions.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over board snapshots (win, draw, apply)
//! - **History**: snapshot sequence with truncate/append and display order
//! - **Invariants**: composable properties the history must satisfy
//! - **Controller**: step pointer, turn flag and event handling
//! - **View**: read-only projection for rendering
//!
//! # Example
//!
//! ```
//! use strictly_rewind::GameController;
//!
//! let mut game = GameController::new();
//! for index in [0, 4, 1, 5, 2] {
//!     game.on_cell_click(index).unwrap();
//! }
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! game.on_history_jump(2).unwrap();
//! game.on_cell_click(8).unwrap();
//! assert_eq!(game.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
pub mod history;
mod input;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use controller::{GameController, Status};
pub use history::{History, HistoryEntry, Order};
pub use input::{Input, InputParseError};
pub use invariants::{Invariant, InvariantSet, InvariantViolation};
pub use position::{Location, Position};
pub use rules::{Evaluation, Line, WinResult};
pub use types::{Board, Player, Square};
pub use view::{GameView, HistoryItem};
