//! Event handling: maps keyboard events to application messages.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Focus, Message};

/// Map a key event to an optional message based on the focused pane.
pub fn map_key_event(app: &App, key: KeyEvent) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Global bindings (work in any pane)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Message::Quit);
    }

    match app.focus {
        Focus::Input => map_input_keys(key),
        Focus::List => map_list_keys(key),
    }
}

fn map_input_keys(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char(c) => Some(Message::InputChar(c)),
        KeyCode::Backspace => Some(Message::InputBackspace),
        KeyCode::Enter => Some(Message::InputSubmit),
        KeyCode::Tab | KeyCode::Down => Some(Message::ToggleFocus),
        KeyCode::Esc => Some(Message::Quit),
        _ => None,
    }
}

fn map_list_keys(key: KeyEvent) -> Option<Message> {
    match key.code {
        // Vim-style navigation
        KeyCode::Char('j') | KeyCode::Down => Some(Message::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::SelectPrev),

        // Actions
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
            Some(Message::RemoveSelected)
        }
        KeyCode::Tab | KeyCode::Char('i') => Some(Message::ToggleFocus),
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),

        _ => None,
    }
}
