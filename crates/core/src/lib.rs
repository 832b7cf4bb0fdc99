#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Core library for vaultclip.
//!
//! Turns clipped page data into an Obsidian note: typed properties become a
//! frontmatter block, the note is dispatched through the `obsidian://` URL
//! scheme, and the include/exclude variable lists are edited through a
//! presentation-agnostic widget controller.

pub mod config;
pub mod dispatch;
pub mod frontmatter;
pub mod ids;
pub mod strings;
pub mod varlist;
pub mod vars;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
