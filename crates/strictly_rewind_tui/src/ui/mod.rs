//! Screen layout for the terminal UI.

mod board;
mod history;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

pub use board::render_board;
pub use history::render_history;

const HELP: &str = "1-9/arrows+Enter: play  Tab: switch pane  o: change order  q: quit";

/// Draws the whole screen from the app's current view.
pub fn draw(f: &mut Frame, app: &App) {
    let view = app.view();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(13),
            Constraint::Length(1),
        ])
        .split(f.area());

    let status = Paragraph::new(view.status().clone())
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    f.render_widget(status, rows[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(36)])
        .split(rows[1]);
    render_board(f, panes[0], app, &view);
    render_history(f, panes[1], app, &view);

    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, rows[2]);
}
