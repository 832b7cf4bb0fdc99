//! `obsidian://` URL construction.
//!
//! ```text
//! obsidian://new?file=<enc>[&append=true|&prepend=true|&overwrite=true][&vault=<enc>][&silent=true](&clipboard|&content=<enc>)
//! obsidian://daily?[...same flags...]
//! ```

use urlencoding::encode;

use super::behavior::NoteBehavior;
use crate::strings::sanitize_file_name;

/// Where the note body travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    /// Obsidian reads the content from the system clipboard.
    Clipboard,
    /// Content is percent-encoded into the URL itself.
    Inline(&'a str),
}

/// A note URL without its payload.
///
/// Finishing it with [`NoteUrl::with_payload`] guarantees exactly one of
/// `&clipboard` or `&content=` ends up in the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteUrl {
    base: String,
}

impl NoteUrl {
    /// Build the target part of the URL for a note.
    ///
    /// Daily behaviors ignore `note_name` and `path`.
    pub fn new(
        note_name: &str,
        path: &str,
        vault: Option<&str>,
        behavior: NoteBehavior,
        silent: bool,
    ) -> Self {
        let mut base = if behavior.is_daily() {
            "obsidian://daily?".to_string()
        } else {
            let mut folder = path.to_string();
            if !folder.is_empty() && !folder.ends_with('/') {
                folder.push('/');
            }
            let file = format!("{folder}{}", sanitize_file_name(note_name));
            format!("obsidian://new?file={}", encode(&file))
        };

        if let Some(mode) = behavior.write_mode() {
            base.push_str(mode.query());
        }

        if let Some(vault) = vault.filter(|v| !v.is_empty()) {
            base.push_str("&vault=");
            base.push_str(&encode(vault));
        }

        if silent {
            base.push_str("&silent=true");
        }

        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn with_payload(&self, payload: Payload<'_>) -> String {
        match payload {
            Payload::Clipboard => format!("{}&clipboard", self.base),
            Payload::Inline(content) => format!("{}&content={}", self.base, encode(content)),
        }
    }
}
