//! Sends a finished note to Obsidian.

use tracing::{debug, info, warn};

use super::behavior::NoteBehavior;
use super::delivery::{
    Attempt, ChannelMessage, Clipboard, Fallback, MessageChannel, Navigator,
};
use super::url::{NoteUrl, Payload};
use crate::config::Settings;

/// Dispatch switches read from the global settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOptions {
    pub silent_open: bool,
    pub legacy_mode: bool,
}

impl From<&Settings> for DispatchOptions {
    fn from(settings: &Settings) -> Self {
        Self { silent_open: settings.silent_open, legacy_mode: settings.legacy_mode }
    }
}

/// How the content travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRoute {
    Clipboard,
    Inline,
}

/// Who ended up opening the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenRoute {
    Channel,
    Navigator,
}

/// What a dispatch did. Purely informational; dispatch never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub url: String,
    pub content: ContentRoute,
    pub opened_by: OpenRoute,
    /// Every attempt made, in order.
    pub attempts: Vec<Attempt>,
}

pub struct NoteDispatcher<C, M, N> {
    clipboard: C,
    channel: M,
    navigator: N,
    options: DispatchOptions,
}

impl<C, M, N> NoteDispatcher<C, M, N>
where
    C: Clipboard,
    M: MessageChannel,
    N: Navigator,
{
    pub fn new(clipboard: C, channel: M, navigator: N, options: DispatchOptions) -> Self {
        Self { clipboard, channel, navigator, options }
    }

    /// Send `content` to Obsidian as `note_name` under `path`.
    ///
    /// In legacy mode the content is always inlined. Otherwise the clipboard
    /// is tried first and the content is inlined only if that fails. The URL
    /// goes through the message channel, falling back to the navigator.
    pub async fn save_to_obsidian(
        &self,
        content: &str,
        note_name: &str,
        path: &str,
        vault: Option<&str>,
        behavior: NoteBehavior,
    ) -> DispatchReport {
        let target =
            NoteUrl::new(note_name, path, vault, behavior, self.options.silent_open);
        let mut attempts = Vec::new();

        let (url, route) = if self.options.legacy_mode {
            (target.with_payload(Payload::Inline(content)), ContentRoute::Inline)
        } else {
            let attempt = if self.clipboard.copy(content).await {
                Attempt::Delivered
            } else {
                Attempt::ClipboardFailed
            };
            attempts.push(attempt);

            match attempt.fallback() {
                None => (target.with_payload(Payload::Clipboard), ContentRoute::Clipboard),
                Some(_) => {
                    warn!("clipboard write failed, falling back to URI content");
                    (target.with_payload(Payload::Inline(content)), ContentRoute::Inline)
                }
            }
        };

        debug!(url = %url, behavior = %behavior, "obsidian url");
        let opened_by = self.open_url(&url, &mut attempts).await;

        info!(behavior = %behavior, content = ?route, opened_by = ?opened_by, "sent note to obsidian");
        DispatchReport { url, content: route, opened_by, attempts }
    }

    async fn open_url(&self, url: &str, attempts: &mut Vec<Attempt>) -> OpenRoute {
        let attempt = match self.channel.send(&ChannelMessage::open_url(url)).await {
            Ok(()) => Attempt::Delivered,
            Err(e) => {
                warn!("error opening obsidian url via message channel: {e}");
                Attempt::ChannelRejected
            }
        };
        attempts.push(attempt);

        match attempt.fallback() {
            Some(Fallback::Navigate) => {
                self.navigator.open(url);
                OpenRoute::Navigator
            }
            _ => OpenRoute::Channel,
        }
    }
}
