//! Include/exclude variable lists and the widget that edits them.
//!
//! Lists live on the global settings or on a single template and are edited
//! only through [`VariableListWidget`].

pub mod list;
pub mod owner;
pub mod widget;

pub use list::{ListKind, append, remove};
pub use owner::ListOwner;
pub use widget::{EventFlow, KeyPress, ListRow, ListView, VariableListWidget};
