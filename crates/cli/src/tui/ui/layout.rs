//! Main layout and frame composition.

use ratatui::{prelude::*, widgets::Paragraph};
use vaultclip_core::varlist::ListOwner;

use super::{input, list, status};
use crate::tui::app::App;

/// Draw the entire application UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // Main layout: header, input, list, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Input
            Constraint::Min(3),    // List
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    input::draw(frame, chunks[1], app);
    list::draw(frame, chunks[2], app);
    status::draw(frame, chunks[3], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let owner_text = match app.owner() {
        ListOwner::Settings => "[global]".to_string(),
        ListOwner::Template(name) => format!("[template: {name}]"),
        ListOwner::Unbound => "[unbound]".to_string(),
    };
    let title = format!("vaultclip  {} list", app.kind());

    // Calculate padding for right-alignment
    let padding =
        area.width.saturating_sub(title.len() as u16 + owner_text.len() as u16 + 2) as usize;

    let line = Line::from(vec![
        Span::styled(format!(" {}", title), Style::default().fg(Color::Cyan).bold()),
        Span::raw(" ".repeat(padding)),
        Span::styled(owner_text, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
