//! Headless replay: scripted inputs in, rendered view out.

use strictly_rewind::{GameController, GameView, Input, InputParseError, Order};
use tracing::{debug, info, instrument};

/// Parses every token, then feeds the inputs to a fresh game.
///
/// Inputs the game rejects are skipped, exactly as a click on an
/// occupied square is ignored in the terminal UI.
///
/// # Errors
///
/// Returns the first token that is not a valid input; no input is
/// applied in that case.
#[instrument(skip(tokens), fields(count = tokens.len()))]
pub fn replay<S: AsRef<str>>(tokens: &[S], order: Order) -> Result<GameController, InputParseError> {
    let inputs = tokens
        .iter()
        .map(|token| token.as_ref().parse::<Input>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut game = GameController::with_order(order);
    for input in inputs {
        if let Err(err) = game.handle(input) {
            debug!(%input, %err, "Input ignored");
        }
    }
    info!(step = game.step(), status = %game.status(), "Replay finished");
    Ok(game)
}

/// Plain-text rendering: board, status and move list.
///
/// Winning squares are bracketed and the displayed step is marked `>`.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let symbol = view.board()[index].symbol();
                if view.is_winning_square(index) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    out.push('\n');
    out.push_str(view.status());
    out.push('\n');
    for item in view.history() {
        let marker = if *item.current() { ">" } else { " " };
        out.push_str(&format!("{} {}. {}\n", marker, item.step(), item.label()));
    }
    out
}

/// Pretty JSON rendering of the view.
pub fn render_json(view: &GameView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_skips_rejected_inputs() {
        let game = replay(&["4", "4", "j9", "0"], Order::Ascending).unwrap();
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_replay_stops_on_bad_token() {
        let err = replay(&["4", "nope"], Order::Ascending).unwrap_err();
        assert_eq!(err.token, "nope");
    }

    #[test]
    fn test_render_text_win() {
        let game = replay(&["0", "4", "1", "5", "2"], Order::Ascending).unwrap();
        let text = render_text(&game.view());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("[X]|[X]|[X]"));
        assert_eq!(lines.next(), Some("---+---+---"));
        assert_eq!(lines.next(), Some("   | O | O "));
        assert!(text.contains("\nWinner: X\n"));
        assert!(text.contains("> 5. Go to move #5 at (col 3, row 1)"));
        assert!(text.contains("  0. Go to game start"));
    }

    #[test]
    fn test_render_json_round_trips_view() {
        let game = replay(&["4", "t"], Order::Ascending).unwrap();
        let json = render_json(&game.view()).unwrap();
        let back: GameView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game.view());
    }
}
