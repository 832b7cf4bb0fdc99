//! Application state and update logic following The Elm Architecture.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use vaultclip_core::config::{ConfigLoader, Settings};
use vaultclip_core::varlist::{
    EventFlow, KeyPress, ListKind, ListOwner, ListRow, ListView, VariableListWidget,
};

/// Which pane receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

/// Feedback message to display in status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Messages that drive state updates.
#[derive(Debug, Clone)]
pub enum Message {
    // Input handling
    InputChar(char),
    InputBackspace,
    InputSubmit,

    // List handling
    SelectNext,
    SelectPrev,
    RemoveSelected,

    // System
    ToggleFocus,
    Quit,
}

/// Rows as last rendered by the widget.
#[derive(Debug, Default)]
pub struct RowsView {
    pub rows: Vec<ListRow>,
    pub renders: usize,
}

impl ListView for RowsView {
    fn render(&mut self, rows: &[ListRow]) {
        self.rows = rows.to_vec();
        self.renders += 1;
    }
}

/// Main application state.
pub struct App {
    pub settings: Settings,
    widget: VariableListWidget<'static>,
    pub view: RowsView,
    /// Contents of the input field.
    pub input: String,
    pub focus: Focus,
    /// Selected row in the list pane.
    pub selected: usize,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
    save_error: Rc<RefCell<Option<String>>>,
}

impl App {
    pub fn new(
        settings: Settings,
        config_path: Option<PathBuf>,
        kind: ListKind,
        owner: ListOwner,
    ) -> Self {
        let save_error = Rc::new(RefCell::new(None));
        let hook_error = Rc::clone(&save_error);
        let widget = VariableListWidget::new(kind, owner).on_save(move |s| {
            *hook_error.borrow_mut() =
                ConfigLoader::save(config_path.as_deref(), s).err().map(|e| e.to_string());
        });

        let mut app = App {
            settings,
            widget,
            view: RowsView::default(),
            input: String::new(),
            focus: Focus::Input,
            selected: 0,
            status: None,
            should_quit: false,
            save_error,
        };
        app.widget.render(&mut app.settings, &mut app.view);
        app
    }

    pub fn kind(&self) -> ListKind {
        self.widget.kind()
    }

    pub fn owner(&self) -> &ListOwner {
        self.widget.owner()
    }

    /// Process a message and update state.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::InputChar(c) => {
                let flow = self.widget.handle_key(
                    &mut self.settings,
                    KeyPress::Other,
                    &mut self.input,
                    &mut self.view,
                );
                if flow == EventFlow::Propagate {
                    self.input.push(c);
                }
            }
            Message::InputBackspace => {
                self.input.pop();
            }
            Message::InputSubmit => {
                let renders = self.view.renders;
                self.widget.handle_key(
                    &mut self.settings,
                    KeyPress::Enter,
                    &mut self.input,
                    &mut self.view,
                );
                if self.view.renders != renders {
                    self.selected = self.view.rows.len().saturating_sub(1);
                    self.report_save("Added");
                }
            }
            Message::SelectNext => {
                if self.selected < self.view.rows.len().saturating_sub(1) {
                    self.selected += 1;
                }
            }
            Message::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
            }
            Message::RemoveSelected => {
                let Some(row) = self.view.rows.get(self.selected).cloned() else {
                    return;
                };
                self.widget.handle_remove(&mut self.settings, &row.value, &mut self.view);
                self.selected = self.selected.min(self.view.rows.len().saturating_sub(1));
                self.report_save("Removed");
            }
            Message::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Input => Focus::List,
                    Focus::List => Focus::Input,
                };
            }
            Message::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn report_save(&mut self, verb: &str) {
        self.status = Some(match self.save_error.borrow_mut().take() {
            Some(e) => StatusMessage { text: format!("Save failed: {e}"), is_error: true },
            None => StatusMessage { text: format!("{verb} and saved"), is_error: false },
        });
    }
}
