//! Which settings object owns a variable list.

use super::list::ListKind;
use crate::config::{Settings, Template};

/// Owner of the list a widget edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOwner {
    /// The global settings.
    Settings,
    /// The template with this name.
    Template(String),
    /// Nothing; edits go to a throwaway list.
    Unbound,
}

impl ListOwner {
    /// Pick the owner the way callers pass optional references: a template
    /// name wins only when no global settings are being edited.
    pub fn select(global: bool, template: Option<&str>) -> Self {
        match (global, template) {
            (true, _) => ListOwner::Settings,
            (false, Some(name)) => ListOwner::Template(name.to_string()),
            (false, None) => ListOwner::Unbound,
        }
    }

    /// The owned list, created empty on first access.
    ///
    /// Returns None when the owner is unbound or the template is missing.
    pub fn list_mut<'s>(
        &self,
        settings: &'s mut Settings,
        kind: ListKind,
    ) -> Option<&'s mut Vec<String>> {
        let slot = match self {
            ListOwner::Settings => match kind {
                ListKind::Include => &mut settings.variable_include_list,
                ListKind::Exclude => &mut settings.variable_exclude_list,
            },
            ListOwner::Template(name) => template_slot(settings.template_mut(name)?, kind),
            ListOwner::Unbound => return None,
        };
        Some(slot.get_or_insert_with(Vec::new))
    }

    /// Read-only view of the owned list; empty when absent.
    pub fn list<'s>(&self, settings: &'s Settings, kind: ListKind) -> &'s [String] {
        let slot = match self {
            ListOwner::Settings => match kind {
                ListKind::Include => &settings.variable_include_list,
                ListKind::Exclude => &settings.variable_exclude_list,
            },
            ListOwner::Template(name) => match settings.template(name) {
                Some(t) => match kind {
                    ListKind::Include => &t.variable_include_list,
                    ListKind::Exclude => &t.variable_exclude_list,
                },
                None => return &[],
            },
            ListOwner::Unbound => return &[],
        };
        slot.as_deref().unwrap_or(&[])
    }
}

fn template_slot(template: &mut Template, kind: ListKind) -> &mut Option<Vec<String>> {
    match kind {
        ListKind::Include => &mut template.variable_include_list,
        ListKind::Exclude => &mut template.variable_exclude_list,
    }
}
