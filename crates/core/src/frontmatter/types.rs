//! Property types and the lookup context used while rendering frontmatter.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single typed key/value pair destined for a note's frontmatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Opaque identifier (generated properties get a fresh one).
    #[serde(default)]
    pub id: String,
    /// Frontmatter key.
    pub name: String,
    /// Raw value; booleans and numbers are accepted and kept as text.
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub value: String,
    /// Advisory type, overridden by the global property type table.
    #[serde(rename = "type", default = "default_type_name")]
    pub kind: String,
}

impl Property {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self { id: String::new(), name: name.into(), value: value.into(), kind: kind.into() }
    }

    /// A property typed `text`.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, PropertyType::Text.as_str())
    }
}

fn default_type_name() -> String {
    PropertyType::Text.as_str().to_string()
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Bool(bool),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Bool(b)) => b.to_string(),
        Some(Scalar::Int(i)) => i.to_string(),
        Some(Scalar::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

/// The kinds of property the renderer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    Text,
    Multitext,
    Number,
    Checkbox,
    Date,
    Datetime,
    AutoMetadata,
}

impl PropertyType {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Text => "text",
            PropertyType::Multitext => "multitext",
            PropertyType::Number => "number",
            PropertyType::Checkbox => "checkbox",
            PropertyType::Date => "date",
            PropertyType::Datetime => "datetime",
            PropertyType::AutoMetadata => "auto-metadata",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a type name is not one of the known property types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown property type: {0}")]
pub struct UnknownPropertyType(pub String);

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(PropertyType::Text),
            "multitext" => Ok(PropertyType::Multitext),
            "number" => Ok(PropertyType::Number),
            "checkbox" => Ok(PropertyType::Checkbox),
            "date" => Ok(PropertyType::Date),
            "datetime" => Ok(PropertyType::Datetime),
            "auto-metadata" => Ok(PropertyType::AutoMetadata),
            other => Err(UnknownPropertyType(other.to_string())),
        }
    }
}

/// One row of the global name -> type table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTypeEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl PropertyTypeEntry {
    pub fn new(name: impl Into<String>, kind: PropertyType) -> Self {
        Self { name: name.into(), kind: kind.as_str().to_string() }
    }
}

/// Read-only context for frontmatter generation.
///
/// Carries the ordered property type table so rendering stays a pure
/// function of its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontmatterContext<'a> {
    property_types: &'a [PropertyTypeEntry],
}

impl<'a> FrontmatterContext<'a> {
    pub fn new(property_types: &'a [PropertyTypeEntry]) -> Self {
        Self { property_types }
    }

    /// Resolve the effective type of a property.
    ///
    /// The first table entry with a matching name wins, then the property's
    /// own type, then `text`. Unrecognised type names also resolve to `text`.
    pub fn resolve_type(&self, property: &Property) -> PropertyType {
        let name = self
            .property_types
            .iter()
            .find(|entry| entry.name == property.name)
            .map(|entry| entry.kind.as_str())
            .filter(|kind| !kind.is_empty())
            .or_else(|| Some(property.kind.as_str()).filter(|kind| !kind.is_empty()));

        name.and_then(|n| n.parse().ok()).unwrap_or(PropertyType::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_table_overrides_property_type() {
        let table = vec![PropertyTypeEntry::new("tags", PropertyType::Multitext)];
        let ctx = FrontmatterContext::new(&table);
        let prop = Property::new("tags", "a, b", "text");
        assert_eq!(ctx.resolve_type(&prop), PropertyType::Multitext);
    }

    #[test]
    fn falls_back_to_own_type_then_text() {
        let ctx = FrontmatterContext::default();
        assert_eq!(ctx.resolve_type(&Property::new("n", "1", "number")), PropertyType::Number);
        assert_eq!(ctx.resolve_type(&Property::new("n", "1", "")), PropertyType::Text);
        assert_eq!(ctx.resolve_type(&Property::new("n", "1", "rating")), PropertyType::Text);
    }

    #[test]
    fn first_matching_entry_wins() {
        let table = vec![
            PropertyTypeEntry::new("due", PropertyType::Date),
            PropertyTypeEntry::new("due", PropertyType::Datetime),
        ];
        let ctx = FrontmatterContext::new(&table);
        assert_eq!(ctx.resolve_type(&Property::text("due", "x")), PropertyType::Date);
    }

    #[test]
    fn deserializes_boolean_and_numeric_values_as_text() {
        let props: Vec<Property> = serde_json::from_str(
            r#"[{"name":"done","value":true,"type":"checkbox"},{"name":"n","value":3}]"#,
        )
        .unwrap();
        assert_eq!(props[0].value, "true");
        assert_eq!(props[1].value, "3");
        assert_eq!(props[1].kind, "text");
        assert_eq!(props[1].id, "");
    }
}
