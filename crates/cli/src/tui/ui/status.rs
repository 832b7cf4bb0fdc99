//! Status bar rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::{App, Focus};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let (left_text, right_text) = match app.focus {
        Focus::Input => (" [Enter] add  [Tab] list  [Esc] quit", "Input"),
        Focus::List => (" [j/k] navigate  [d] remove  [Tab] input  [q] quit", "List"),
    };

    // If there's a status message, show it on the right
    let (right_content, right_len) = match &app.status {
        Some(status) => {
            let style = if status.is_error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            (Span::styled(status.text.as_str(), style), status.text.len())
        }
        None => {
            (Span::styled(right_text, Style::default().fg(Color::DarkGray)), right_text.len())
        }
    };

    let left = Span::styled(left_text, Style::default().fg(Color::DarkGray));

    // Calculate padding for right-alignment
    let padding =
        area.width.saturating_sub(left_text.len() as u16 + right_len as u16 + 2) as usize;

    let line = Line::from(vec![left, Span::raw(" ".repeat(padding)), right_content]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
