//! Frontmatter serialization from typed properties.

use tracing::debug;

use super::auto_metadata::expand;
use super::keys::format_key;
use super::types::{FrontmatterContext, Property};
use super::values::render_value;
use crate::vars::Variables;

const EMPTY_BLOCK: &str = "---\n---";

/// Render properties as a `---` delimited frontmatter block.
///
/// Auto-metadata properties are expanded against `variables` first. Repeated
/// names are kept, one line each. Returns an empty string when there is
/// nothing to emit.
pub fn generate_frontmatter(
    properties: &[Property],
    variables: Option<&Variables>,
    ctx: &FrontmatterContext<'_>,
) -> String {
    let empty = Variables::new();
    let expanded = expand(properties, variables.unwrap_or(&empty), ctx);

    let mut out = String::from("---\n");
    for property in &expanded {
        out.push_str(&format_key(&property.name));
        out.push(':');
        out.push_str(&render_value(ctx.resolve_type(property), &property.value));
    }
    out.push_str("---\n");

    if out.trim() == EMPTY_BLOCK {
        return String::new();
    }

    debug!(properties = expanded.len(), "generated frontmatter");
    out
}

/// Prepend generated frontmatter to a note body.
pub fn compose_note(frontmatter: &str, body: &str) -> String {
    if frontmatter.is_empty() {
        body.to_string()
    } else {
        format!("{frontmatter}{body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::types::{PropertyType, PropertyTypeEntry};
    use insta::assert_snapshot;

    fn table() -> Vec<PropertyTypeEntry> {
        vec![
            PropertyTypeEntry::new("tags", PropertyType::Multitext),
            PropertyTypeEntry::new("rating", PropertyType::Number),
            PropertyTypeEntry::new("read", PropertyType::Checkbox),
            PropertyTypeEntry::new("published", PropertyType::Date),
        ]
    }

    #[test]
    fn empty_properties_give_empty_string() {
        assert_eq!(generate_frontmatter(&[], None, &FrontmatterContext::default()), "");
        assert_eq!(
            generate_frontmatter(&[], Some(&Variables::new()), &FrontmatterContext::default()),
            ""
        );
    }

    #[test]
    fn auto_metadata_with_nothing_to_emit_gives_empty_string() {
        let props = vec![Property::new("auto", "", "auto-metadata")];
        assert_eq!(generate_frontmatter(&props, None, &FrontmatterContext::default()), "");
    }

    #[test]
    fn renders_each_type() {
        let table = table();
        let ctx = FrontmatterContext::new(&table);
        let props = vec![
            Property::text("title", "My \"Great\" Note"),
            Property::text("tags", "clippings, [[Reading, List]]"),
            Property::text("rating", "4.5 stars"),
            Property::text("read", "true"),
            Property::text("published", "2024-05-01"),
            Property::text("source url", "https://example.com"),
            Property::text("2024", ""),
        ];

        assert_snapshot!(generate_frontmatter(&props, None, &ctx), @r#"
        ---
        title: "My \"Great\" Note"
        tags:
          - "clippings"
          - "[[Reading, List]]"
        rating: 4.5
        read: true
        published: 2024-05-01
        "source url": "https://example.com"
        "2024":
        ---
        "#);
    }

    #[test]
    fn repeated_names_are_not_deduplicated() {
        let props = vec![Property::text("tag", "a"), Property::text("tag", "b")];
        let out = generate_frontmatter(&props, None, &FrontmatterContext::default());
        assert_eq!(out, "---\ntag: \"a\"\ntag: \"b\"\n---\n");
    }

    #[test]
    fn expands_auto_metadata_from_variables() {
        let vars: Variables =
            [("{{content}}", "x"), ("{{title}}", "My Note")].into_iter().collect();
        let props = vec![Property::new("meta", "", "auto-metadata")];
        let out = generate_frontmatter(&props, Some(&vars), &FrontmatterContext::default());
        assert_eq!(out, "---\ntitle: \"My Note\"\n---\n");
    }

    #[test]
    fn generated_block_is_valid_yaml() {
        let table = table();
        let ctx = FrontmatterContext::new(&table);
        let props = vec![
            Property::text("title", "Quotes \"inside\""),
            Property::text("tags", r#"["one","two"]"#),
            Property::text("rating", "-3"),
            Property::text("read", "no"),
            Property::text("yes", "keyword key"),
        ];
        let out = generate_frontmatter(&props, None, &ctx);
        let body = out.trim_start_matches("---\n").trim_end_matches("---\n");
        let parsed: serde_yaml::Value = serde_yaml::from_str(body).unwrap();

        assert_eq!(parsed["title"].as_str(), Some("Quotes \"inside\""));
        assert_eq!(parsed["tags"][1].as_str(), Some("two"));
        assert_eq!(parsed["rating"].as_f64(), Some(-3.0));
        assert_eq!(parsed["read"].as_bool(), Some(false));
        assert_eq!(parsed["yes"].as_str(), Some("keyword key"));
    }

    #[test]
    fn compose_note_skips_empty_frontmatter() {
        assert_eq!(compose_note("", "# Body"), "# Body");
        assert_eq!(compose_note("---\na: \"b\"\n---\n", "# Body"), "---\na: \"b\"\n---\n# Body");
    }
}
