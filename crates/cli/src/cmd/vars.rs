//! Non-interactive adapter for the variable list widget.

use std::cell::Cell;
use std::path::Path;

use tracing::error;
use vaultclip_core::config::ConfigLoader;
use vaultclip_core::varlist::{KeyPress, ListKind, ListOwner, ListRow, ListView, VariableListWidget};

use super::load_settings;
use crate::{ListSelector, VarsCommand};

/// Collects the last render for printing.
#[derive(Default)]
struct PrintView {
    rows: Option<Vec<ListRow>>,
}

impl ListView for PrintView {
    fn render(&mut self, rows: &[ListRow]) {
        self.rows = Some(rows.to_vec());
    }
}

pub fn owner_for(selector: &ListSelector) -> ListOwner {
    ListOwner::select(selector.template.is_none(), selector.template.as_deref())
}

pub fn kind_for(selector: &ListSelector) -> ListKind {
    if selector.exclude { ListKind::Exclude } else { ListKind::Include }
}

pub fn run(config: Option<&Path>, command: VarsCommand) {
    let mut settings = load_settings(config, "vars");

    let (selector, action) = match &command {
        VarsCommand::List(s) => (s, None),
        VarsCommand::Add { selector, value } => (selector, Some((true, value.as_str()))),
        VarsCommand::Remove { selector, value } => (selector, Some((false, value.as_str()))),
        VarsCommand::Edit(s) => (s, None),
    };

    if let Some(name) = &selector.template {
        if settings.template(name).is_none() {
            eprintln!("Template not found: {name}");
            std::process::exit(1);
        }
    }

    let kind = kind_for(selector);
    let save_failed = Cell::new(false);
    let mut widget = VariableListWidget::new(kind, owner_for(selector)).on_save(|s| {
        if let Err(e) = ConfigLoader::save(config, s) {
            error!("failed to save settings: {e}");
            save_failed.set(true);
        }
    });
    let mut view = PrintView::default();

    match action {
        None => widget.render(&mut settings, &mut view),
        Some((true, value)) => {
            let mut input = value.to_string();
            widget.handle_key(&mut settings, KeyPress::Enter, &mut input, &mut view);
            if view.rows.is_none() {
                eprintln!("Nothing to add: value is blank");
                std::process::exit(2);
            }
        }
        Some((false, value)) => {
            widget.handle_remove(&mut settings, value, &mut view);
            if view.rows.is_none() {
                eprintln!("Not in the {kind} list: {value}");
                std::process::exit(1);
            }
        }
    }

    if save_failed.get() {
        eprintln!("FAIL vclip vars");
        std::process::exit(1);
    }

    for row in view.rows.unwrap_or_default() {
        println!("{}", row.value);
    }
}
