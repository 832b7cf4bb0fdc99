//! Delivery collaborators and the fallback policy between them.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Action name the message channel's receiver listens for.
pub const OPEN_URL_ACTION: &str = "openObsidianUrl";

/// Places text on the system clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Returns whether the text reached the clipboard.
    async fn copy(&self, text: &str) -> bool;
}

/// Message sent to whatever actually opens URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelMessage {
    pub action: &'static str,
    pub url: String,
}

impl ChannelMessage {
    pub fn open_url(url: impl Into<String>) -> Self {
        Self { action: OPEN_URL_ACTION, url: url.into() }
    }
}

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("no receiver is listening on the message channel")]
    Unavailable,

    #[error("message channel rejected the request: {0}")]
    Rejected(String),
}

/// Hands a URL to the component that opens it.
#[async_trait]
pub trait MessageChannel: Send + Sync {
    async fn send(&self, message: &ChannelMessage) -> Result<(), ChannelError>;
}

/// Last-resort URL opener (the equivalent of opening a new tab).
pub trait Navigator: Send + Sync {
    fn open(&self, url: &str);
}

/// Result of one delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Delivered,
    ClipboardFailed,
    ChannelRejected,
}

/// What to do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Put the content in the URL instead of relying on the clipboard.
    InlineContent,
    /// Open the URL directly.
    Navigate,
}

impl Attempt {
    /// The fallback policy. Each failure has exactly one next step, and no
    /// fallback is ever retried.
    pub fn fallback(self) -> Option<Fallback> {
        match self {
            Attempt::Delivered => None,
            Attempt::ClipboardFailed => Some(Fallback::InlineContent),
            Attempt::ChannelRejected => Some(Fallback::Navigate),
        }
    }
}
