//! Platform collaborators for the note dispatcher.
//!
//! The clipboard and URL opener shell out to the usual platform tools. Both
//! can be overridden with `VCLIP_CLIPBOARD` / `VCLIP_OPENER` (a command line
//! split on whitespace).

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};
use vaultclip_core::dispatch::{
    ChannelError, ChannelMessage, Clipboard, MessageChannel, Navigator, OPEN_URL_ACTION,
};

const CLIPBOARD_ENV: &str = "VCLIP_CLIPBOARD";
const OPENER_ENV: &str = "VCLIP_OPENER";

fn override_command(var: &str) -> Option<Vec<String>> {
    let raw = std::env::var(var).ok()?;
    let parts: Vec<String> = raw.split_whitespace().map(ToString::to_string).collect();
    if parts.is_empty() { None } else { Some(parts) }
}

fn to_cmd(parts: &[&str]) -> Vec<String> {
    parts.iter().map(ToString::to_string).collect()
}

fn clipboard_candidates() -> Vec<Vec<String>> {
    if let Some(cmd) = override_command(CLIPBOARD_ENV) {
        return vec![cmd];
    }
    if cfg!(target_os = "macos") {
        vec![to_cmd(&["pbcopy"])]
    } else if cfg!(windows) {
        vec![to_cmd(&["clip"])]
    } else {
        vec![
            to_cmd(&["wl-copy"]),
            to_cmd(&["xclip", "-selection", "clipboard"]),
            to_cmd(&["xsel", "--clipboard", "--input"]),
        ]
    }
}

fn opener_command() -> Vec<String> {
    if let Some(cmd) = override_command(OPENER_ENV) {
        return cmd;
    }
    if cfg!(target_os = "macos") {
        to_cmd(&["open"])
    } else if cfg!(windows) {
        to_cmd(&["explorer"])
    } else {
        to_cmd(&["xdg-open"])
    }
}

/// Clipboard backed by the first platform tool that accepts the text.
pub struct SystemClipboard;

impl SystemClipboard {
    async fn try_copy(cmd: &[String], text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(&cmd[0])
            .args(&cmd[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
        }
        Ok(child.wait().await?.success())
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn copy(&self, text: &str) -> bool {
        for cmd in clipboard_candidates() {
            match Self::try_copy(&cmd, text).await {
                Ok(true) => {
                    debug!(tool = %cmd[0], "copied note to clipboard");
                    return true;
                }
                Ok(false) => debug!(tool = %cmd[0], "clipboard tool exited with failure"),
                Err(e) => debug!(tool = %cmd[0], "clipboard tool unavailable: {e}"),
            }
        }
        warn!("all clipboard methods failed");
        false
    }
}

/// Message channel whose receiver is the platform URL opener.
pub struct OpenerChannel;

#[async_trait]
impl MessageChannel for OpenerChannel {
    async fn send(&self, message: &ChannelMessage) -> Result<(), ChannelError> {
        if message.action != OPEN_URL_ACTION {
            return Err(ChannelError::Rejected(format!("unsupported action {}", message.action)));
        }
        let cmd = opener_command();
        let status = Command::new(&cmd[0])
            .args(&cmd[1..])
            .arg(&message.url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                debug!(tool = %cmd[0], "opener unavailable: {e}");
                ChannelError::Unavailable
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ChannelError::Rejected(format!("{} exited with {status}", cmd[0])))
        }
    }
}

/// Fallback navigation: hand the URL to the user.
pub struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn open(&self, url: &str) {
        println!("open: {url}");
    }
}
