//! Move history with time-travel support.
//!
//! A [`History`] is a value: [`History::truncate`] and [`History::append`]
//! return new histories instead of editing in place, so a controller can
//! swap its history wholesale after every accepted move.

use super::action::Move;
use super::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Most entries a 3x3 game can produce: the empty board plus nine moves.
pub const MAX_ENTRIES: usize = 10;

/// A board snapshot and the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Move that produced the board; `None` for the game start.
    last_move: Option<Move>,
}

impl HistoryEntry {
    /// Entry for the empty starting board.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Entry recording `last_move` and the board it produced.
    pub fn new(board: Board, last_move: Move) -> Self {
        Self {
            board,
            last_move: Some(last_move),
        }
    }
}

/// Ordering of the move list when shown to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Order {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl Order {
    /// Flips between ascending and descending.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for the toggle control.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }
}

/// Ordered sequence of snapshots; entry 0 is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// History holding only the game start.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::start()],
        }
    }

    /// Number of entries, always at least one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the start entry cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `step`.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// Most recent entry.
    pub fn last(&self) -> &HistoryEntry {
        // entries is never empty
        &self.entries[self.entries.len() - 1]
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Prefix ending at `upto_step` inclusive.
    ///
    /// A step past the end keeps every entry.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn truncate(&self, upto_step: usize) -> Self {
        let keep = upto_step.saturating_add(1).min(self.entries.len());
        if keep < self.entries.len() {
            debug!(discarded = self.entries.len() - keep, "Discarding abandoned future");
        }
        Self {
            entries: self.entries[..keep].to_vec(),
        }
    }

    /// Copy of this history with one entry appended.
    #[instrument(skip(self, board), fields(len = self.entries.len()))]
    pub fn append(&self, board: Board, last_move: Move) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend_from_slice(&self.entries);
        entries.push(HistoryEntry::new(board, last_move));
        Self { entries }
    }

    /// Move-list label for the entry at `step`.
    pub fn label(&self, step: usize) -> Option<String> {
        self.get(step).map(|entry| entry_label(step, entry))
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Text shown for an entry in the move list.
pub fn entry_label(step: usize, entry: &HistoryEntry) -> String {
    match entry.last_move() {
        Some(mov) if step > 0 => format!("Go to move #{} at {}", step, mov.location()),
        _ => "Go to game start".to_string(),
    }
}

/// Pairs each entry with its step and orders them for display.
///
/// Steps keep referring to the authoritative index whatever the order.
pub fn reverse_for_display(entries: &[HistoryEntry], order: Order) -> Vec<(usize, &HistoryEntry)> {
    let indexed = entries.iter().enumerate();
    match order {
        Order::Ascending => indexed.collect(),
        Order::Descending => indexed.rev().collect(),
    }
}
