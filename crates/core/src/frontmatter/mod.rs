//! Frontmatter generation from typed properties.
//!
//! This module provides functionality to:
//! - Resolve property types against the global name -> type table
//! - Quote keys and render values per property type
//! - Expand auto-metadata placeholders from captured page variables
//! - Serialize everything into a `---` delimited frontmatter block

pub mod auto_metadata;
pub mod keys;
pub mod serializer;
pub mod types;
pub mod values;

pub use auto_metadata::{AutoMetadataConfig, ExclusionMatcher, expand, generate_properties};
pub use keys::{format_key, needs_quotes};
pub use serializer::{compose_note, generate_frontmatter};
pub use types::{FrontmatterContext, Property, PropertyType, PropertyTypeEntry};
pub use values::render_value;
