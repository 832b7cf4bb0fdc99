//! Include/exclude lists and their pure transitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two variable lists a widget edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Include,
    Exclude,
}

impl ListKind {
    /// Field name of the list on the owning settings or template.
    pub fn field_name(self) -> &'static str {
        match self {
            ListKind::Include => "variableIncludeList",
            ListKind::Exclude => "variableExcludeList",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Include => f.write_str("include"),
            ListKind::Exclude => f.write_str("exclude"),
        }
    }
}

/// Append the trimmed input to the list.
///
/// Returns the appended entry, or None when the input is blank. Duplicates
/// are allowed.
pub fn append(list: &mut Vec<String>, input: &str) -> Option<String> {
    let value = input.trim();
    if value.is_empty() {
        return None;
    }
    list.push(value.to_string());
    Some(value.to_string())
}

/// Remove the first entry equal to `value`. Returns whether anything was
/// removed.
pub fn remove(list: &mut Vec<String>, value: &str) -> bool {
    match list.iter().position(|v| v == value) {
        Some(idx) => {
            list.remove(idx);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_trims_and_rejects_blank() {
        let mut list = Vec::new();
        assert_eq!(append(&mut list, "  foo  "), Some("foo".to_string()));
        assert_eq!(append(&mut list, "   "), None);
        assert_eq!(list, vec!["foo"]);
    }

    #[test]
    fn append_then_remove_round_trips() {
        let mut list = vec!["a".to_string()];
        let before = list.clone();
        append(&mut list, "  foo  ");
        assert!(remove(&mut list, "foo"));
        assert_eq!(list, before);
    }

    #[test]
    fn duplicates_allowed_and_removed_one_at_a_time() {
        let mut list = Vec::new();
        append(&mut list, "x");
        append(&mut list, "y");
        append(&mut list, "x");
        assert!(remove(&mut list, "x"));
        assert_eq!(list, vec!["y", "x"]);
        assert!(!remove(&mut list, "missing"));
    }

    #[test]
    fn field_names() {
        assert_eq!(ListKind::Include.field_name(), "variableIncludeList");
        assert_eq!(ListKind::Exclude.field_name(), "variableExcludeList");
    }
}
