//! Note dispatch through the `obsidian://` URL scheme.
//!
//! A note is delivered either through the clipboard (the URL carries
//! `&clipboard`) or inline in the URL (`&content=`). The URL itself is handed
//! to a message channel, with direct navigation as the fallback.

pub mod behavior;
pub mod delivery;
pub mod dispatcher;
pub mod url;

pub use behavior::{NoteBehavior, UnknownBehavior, WriteMode};
pub use delivery::{
    Attempt, ChannelError, ChannelMessage, Clipboard, Fallback, MessageChannel, Navigator,
    OPEN_URL_ACTION,
};
pub use dispatcher::{ContentRoute, DispatchOptions, DispatchReport, NoteDispatcher, OpenRoute};
pub use url::{NoteUrl, Payload};
