//! Frontmatter key quoting.

const YAML_KEYWORDS: &[&str] = &["true", "false", "null", "yes", "no", "on", "off"];

fn is_structural(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ':' | '{' | '}' | '[' | ']' | ',' | '&' | '*' | '#' | '?' | '|' | '<' | '>' | '='
                | '!' | '%' | '@' | '\\' | '-'
        )
}

/// Whether a property name must be quoted to stay a plain YAML string key.
pub fn needs_quotes(name: &str) -> bool {
    name.chars().any(is_structural)
        || name.starts_with(|c: char| c.is_ascii_digit())
        || YAML_KEYWORDS.iter().any(|kw| name.trim().eq_ignore_ascii_case(kw))
}

/// Render a property name as a frontmatter key.
///
/// Names that need quoting are wrapped in double quotes, unless they contain
/// a double quote themselves, in which case single quotes are used and inner
/// single quotes are doubled.
pub fn format_key(name: &str) -> String {
    if !needs_quotes(name) {
        return name.to_string();
    }
    if name.contains('"') {
        format!("'{}'", name.replace('\'', "''"))
    } else {
        format!("\"{name}\"")
    }
}
