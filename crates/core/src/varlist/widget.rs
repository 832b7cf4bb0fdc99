//! Variable list widget controller.
//!
//! The controller owns no presentation state. An adapter (terminal UI,
//! command line, tests) keeps the input buffer and implements [`ListView`];
//! it forwards key presses and remove clicks here and the controller applies
//! the list transition, persists, notifies and re-renders.

use tracing::debug;

use super::list::{self, ListKind};
use super::owner::ListOwner;
use crate::config::Settings;

/// One rendered entry with its remove control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub position: usize,
    pub value: String,
}

/// Presentation side of the widget.
pub trait ListView {
    /// Replace everything currently shown with `rows`.
    fn render(&mut self, rows: &[ListRow]);
}

/// Key presses the widget distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Enter,
    Other,
}

impl KeyPress {
    /// Map a DOM-style key name.
    pub fn from_key_name(key: &str) -> Self {
        if key == "Enter" { KeyPress::Enter } else { KeyPress::Other }
    }
}

/// Whether an event should continue to enclosing handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    Propagate,
    /// Consumed here; default handling and parent handlers must not run.
    Stop,
}

type SaveHook<'h> = Box<dyn FnMut(&Settings) + 'h>;
type ChangeHook<'h> = Box<dyn FnMut() + 'h>;

pub struct VariableListWidget<'h> {
    kind: ListKind,
    owner: ListOwner,
    on_save: Option<SaveHook<'h>>,
    on_change: Option<ChangeHook<'h>>,
}

impl<'h> VariableListWidget<'h> {
    pub fn new(kind: ListKind, owner: ListOwner) -> Self {
        Self { kind, owner, on_save: None, on_change: None }
    }

    /// Called with the whole settings object after every mutation.
    pub fn on_save(mut self, hook: impl FnMut(&Settings) + 'h) -> Self {
        self.on_save = Some(Box::new(hook));
        self
    }

    /// Called after every mutation, once the change is saved.
    pub fn on_change(mut self, hook: impl FnMut() + 'h) -> Self {
        self.on_change = Some(Box::new(hook));
        self
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn owner(&self) -> &ListOwner {
        &self.owner
    }

    /// Current entries, without creating the list.
    pub fn entries<'s>(&self, settings: &'s Settings) -> &'s [String] {
        self.owner.list(settings, self.kind)
    }

    /// Rebuild the view from the backing list.
    pub fn render(&self, settings: &mut Settings, view: &mut dyn ListView) {
        let rows: Vec<ListRow> = match self.owner.list_mut(settings, self.kind) {
            Some(list) => list
                .iter()
                .enumerate()
                .map(|(position, value)| ListRow { position, value: value.clone() })
                .collect(),
            None => Vec::new(),
        };
        view.render(&rows);
    }

    /// Handle a key press in the input field.
    ///
    /// Only Enter does anything: a non-blank input is trimmed and appended,
    /// and the input is cleared.
    pub fn handle_key(
        &mut self,
        settings: &mut Settings,
        key: KeyPress,
        input: &mut String,
        view: &mut dyn ListView,
    ) -> EventFlow {
        if key != KeyPress::Enter {
            return EventFlow::Propagate;
        }

        let mut scratch = Vec::new();
        let target = match self.owner.list_mut(settings, self.kind) {
            Some(list) => list,
            None => &mut scratch,
        };

        if let Some(added) = list::append(target, input) {
            input.clear();
            debug!(list = %self.kind, value = %added, "added variable");
            self.commit(settings, view);
        }
        EventFlow::Stop
    }

    /// Handle activation of a row's remove control.
    pub fn handle_remove(
        &mut self,
        settings: &mut Settings,
        value: &str,
        view: &mut dyn ListView,
    ) -> EventFlow {
        let removed = self
            .owner
            .list_mut(settings, self.kind)
            .is_some_and(|entries| list::remove(entries, value));

        if removed {
            debug!(list = %self.kind, value = %value, "removed variable");
            self.commit(settings, view);
        }
        EventFlow::Stop
    }

    fn commit(&mut self, settings: &mut Settings, view: &mut dyn ListView) {
        if let Some(save) = self.on_save.as_mut() {
            save(settings);
        }
        if let Some(change) = self.on_change.as_mut() {
            change();
        }
        self.render(settings, view);
    }
}
