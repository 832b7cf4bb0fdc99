//! Input field rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::{App, Focus};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Input;
    let border = if focused { Color::Cyan } else { Color::DarkGray };

    let paragraph = Paragraph::new(app.input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" variable name ")
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(paragraph, area);

    if focused {
        let typed = u16::try_from(app.input.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(typed);
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}
