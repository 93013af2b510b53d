//! Move list rendering.

use super::board::focus_style;
use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use strictly_rewind::GameView;

/// Renders the move list in display order, current step in bold.
pub fn render_history(f: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let focused = app.focus() == Focus::History;
    let title = format!(" Moves ({}) ", view.order().label());

    let items: Vec<ListItem> = view
        .history()
        .iter()
        .map(|item| {
            let style = if *item.current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(item.label().clone()).style(style)
        })
        .collect();

    let selected_row = view
        .history()
        .iter()
        .position(|item| *item.step() == app.selected_step());

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(focus_style(focused)),
        )
        .highlight_style(if focused {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default()
        });

    let mut state = ListState::default().with_selected(selected_row);
    f.render_stateful_widget(list, area, &mut state);
}
