//! Tests for the headless replay front end.

use strictly_rewind::{GameView, Order};
use strictly_rewind_tui::replay::{render_json, render_text, replay};

#[test]
fn test_draw_replay_text() {
    let game = replay(&["0", "2", "1", "3", "5", "4", "6", "7", "8"], Order::Ascending)
        .expect("Valid tokens");
    let text = render_text(&game.view());
    assert!(text.contains("\nDraw.\n"));
    assert!(!text.contains('['));
    assert_eq!(text.lines().filter(|l| l.contains("Go to")).count(), 10);
}

#[test]
fn test_jump_then_move_replay() {
    let game = replay(&["0", "4", "1", "5", "2", "j2", "8"], Order::Ascending)
        .expect("Valid tokens");
    assert_eq!(game.history().len(), 4);
    let text = render_text(&game.view());
    assert!(text.contains("> 3. Go to move #3 at (col 3, row 3)"));
    assert!(!text.contains("#4"));
}

#[test]
fn test_descending_json() {
    let game = replay(&["4", "0"], Order::Descending).expect("Valid tokens");
    let json = render_json(&game.view()).expect("Serializable view");
    let view: GameView = serde_json::from_str(&json).expect("Round trip");

    let steps: Vec<usize> = view.history().iter().map(|item| *item.step()).collect();
    assert_eq!(steps, vec![2, 1, 0]);
    assert_eq!(view.status(), "Next player: X");

    let value: serde_json::Value = serde_json::from_str(&json).expect("Valid JSON");
    assert_eq!(value["order"], "Descending");
    assert_eq!(value["current_step"], 2);
    assert!(value["winning_line"].is_null());
}

#[test]
fn test_winning_line_in_json() {
    let game = replay(&["2", "0", "4", "1", "6"], Order::Ascending).expect("Valid tokens");
    let value = serde_json::to_value(game.view()).expect("Serializable view");
    assert_eq!(value["status"], "Winner: X");
    assert_eq!(
        value["winning_line"],
        serde_json::json!(["TopRight", "Center", "BottomLeft"])
    );
}
