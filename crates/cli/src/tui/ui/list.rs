//! Variable list rendering, one row per entry with its remove control.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use crate::tui::app::{App, Focus};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::List;
    let mut items: Vec<ListItem> = Vec::new();

    for row in &app.view.rows {
        let is_selected = focused && row.position == app.selected;
        let style = if is_selected {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        } else {
            Style::default()
        };

        let prefix = if is_selected { " > " } else { "   " };
        items.push(
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}{}", prefix, row.value)),
                Span::styled("  [x]", Style::default().fg(Color::Red)),
            ]))
            .style(style),
        );
    }

    // Empty state
    if items.is_empty() {
        items.push(ListItem::new(Span::styled(
            " (no variables)",
            Style::default().fg(Color::DarkGray).italic(),
        )));
    }

    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let list = List::new(items).block(
        Block::default().borders(Borders::ALL).border_style(Style::default().fg(border)),
    );

    // We don't use ListState for selection since we manually handle the styling
    frame.render_widget(list, area);
}
