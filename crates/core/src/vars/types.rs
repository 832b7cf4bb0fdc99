//! Ordered variable map.

use serde::ser::{Serialize, Serializer};

/// Insertion-ordered mapping from placeholder token to captured value.
///
/// Inserting an existing key replaces its value but keeps its position, so
/// iteration order matches the order in which keys were first captured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    entries: Vec<(String, String)>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Variables::new();
        for (k, v) in iter {
            vars.insert(k, v);
        }
        vars
    }
}

/// Serializes as a JSON-style object in insertion order.
impl Serialize for Variables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Strip a leading `{{` and a trailing `}}` from a variable key.
///
/// Each side is stripped independently, so `{{title` becomes `title`.
pub fn clean_key(key: &str) -> &str {
    let key = key.strip_prefix("{{").unwrap_or(key);
    key.strip_suffix("}}").unwrap_or(key)
}

/// Replace every `{{key}}` occurrence in `input` with its captured value.
///
/// Keys may be stored with or without their braces. Unknown placeholders are
/// left untouched.
pub fn render_placeholders(input: &str, vars: &Variables) -> String {
    let mut out = input.to_string();
    for (key, value) in vars.iter() {
        let token = format!("{{{{{}}}}}", clean_key(key));
        out = out.replace(&token, value);
    }
    out
}
