//! Captured page variables.
//!
//! Variables map placeholder tokens (conventionally `{{name}}`) to the values
//! captured from a page. They are supplied per invocation and never stored.

pub mod types;

pub use types::{Variables, clean_key, render_placeholders};
