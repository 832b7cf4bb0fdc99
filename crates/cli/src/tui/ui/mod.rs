//! UI rendering modules.

mod input;
mod layout;
mod list;
mod status;

pub use layout::draw;
