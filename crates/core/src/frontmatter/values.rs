//! Rendering of property values by type.
//!
//! Every renderer returns the text that follows `key:` on the frontmatter
//! line, including the trailing newline. An empty value renders as a bare
//! newline so the key is still present.

use tracing::trace;

use super::types::PropertyType;
use crate::strings::escape_double_quotes;

/// Render a raw property value according to its resolved type.
pub fn render_value(kind: PropertyType, raw: &str) -> String {
    match kind {
        PropertyType::Multitext => render_multitext(raw),
        PropertyType::Number => render_number(raw),
        PropertyType::Checkbox => format!(" {}\n", raw == "true"),
        PropertyType::Date | PropertyType::Datetime => {
            let trimmed = raw.trim();
            if trimmed.is_empty() { "\n".to_string() } else { format!(" {trimmed}\n") }
        }
        PropertyType::Text | PropertyType::AutoMetadata => {
            if raw.trim().is_empty() {
                "\n".to_string()
            } else {
                format!(" \"{}\"\n", escape_double_quotes(raw))
            }
        }
    }
}

fn render_multitext(raw: &str) -> String {
    let items: Vec<String> = split_multitext(raw)
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    let mut out = String::from("\n");
    for item in &items {
        out.push_str(&format!("  - \"{}\"\n", escape_double_quotes(item)));
    }
    out
}

/// Split a multitext value into its raw items.
///
/// Values shaped like a JSON string array are decoded as JSON; anything else,
/// including JSON that fails to decode, is split on commas that do not sit
/// inside a `[[wikilink]]`.
pub fn split_multitext(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.starts_with("[\"") && trimmed.ends_with("\"]") {
        match serde_json::from_str::<Vec<serde_json::Value>>(trimmed) {
            Ok(values) => {
                return values
                    .into_iter()
                    .map(|v| match v {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect();
            }
            Err(e) => trace!("multitext value is not a JSON array ({e}), splitting on commas"),
        }
    }
    split_outside_wikilinks(raw)
}

/// Split on every comma that is not followed by a closing `]]` before the
/// next opening `[`.
fn split_outside_wikilinks(raw: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut start = 0;
    for (i, c) in raw.char_indices() {
        if c != ',' {
            continue;
        }
        let rest = &raw[i + 1..];
        let window = &rest[..rest.find('[').unwrap_or(rest.len())];
        if !window.contains("]]") {
            items.push(raw[start..i].to_string());
            start = i + 1;
        }
    }
    items.push(raw[start..].to_string());
    items
}

fn render_number(raw: &str) -> String {
    let numeric: String =
        raw.chars().filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-').collect();
    match parse_float_prefix(&numeric) {
        Some(n) => format!(" {}\n", format_number(n)),
        None => "\n".to_string(),
    }
}

/// Parse the longest leading decimal number, the way a lenient float parser
/// would: optional minus sign, digits, optional fraction.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    s[..end].trim_end_matches('.').parse::<f64>().ok().filter(|n| n.is_finite())
}

fn format_number(n: f64) -> String {
    if n == 0.0 {
        // no negative zero in the output
        return "0".to_string();
    }
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn multitext_json_array() {
        assert_eq!(split_multitext(r#"["a","b"]"#), vec!["a", "b"]);
        assert_eq!(render_value(PropertyType::Multitext, r#"["a","b"]"#), "\n  - \"a\"\n  - \"b\"\n");
    }

    #[test]
    fn multitext_keeps_wikilinks_whole() {
        assert_eq!(split_multitext("a, b, [[c, d]]"), vec!["a", " b", " [[c, d]]"]);
        assert_eq!(
            render_value(PropertyType::Multitext, "a, b, [[c, d]]"),
            "\n  - \"a\"\n  - \"b\"\n  - \"[[c, d]]\"\n"
        );
    }

    #[test]
    fn multitext_malformed_json_falls_back_to_commas() {
        assert_eq!(split_multitext(r#"["a", "b"c"]"#), vec![r#"["a""#, r#" "b"c"]"#]);
    }

    #[test]
    fn multitext_json_non_strings_use_json_text() {
        assert_eq!(split_multitext(r#"["a", 1, true, "b"]"#), vec!["a", "1", "true", "b"]);
    }

    #[test]
    fn multitext_empty_items_dropped() {
        assert_eq!(render_value(PropertyType::Multitext, " , ,"), "\n");
        assert_eq!(render_value(PropertyType::Multitext, "x,,y"), "\n  - \"x\"\n  - \"y\"\n");
    }

    #[test]
    fn multitext_items_are_escaped() {
        assert_eq!(render_value(PropertyType::Multitext, r#"say "hi""#), "\n  - \"say \\\"hi\\\"\"\n");
    }

    #[rstest]
    #[case("abc12.5xyz-", " 12.5\n")]
    #[case("42", " 42\n")]
    #[case("3.0", " 3\n")]
    #[case("-7.25", " -7.25\n")]
    #[case("1.2.3", " 1.2\n")]
    #[case("5.", " 5\n")]
    #[case("-.5", " -0.5\n")]
    #[case("-0", " 0\n")]
    #[case("1,000", " 1000\n")]
    #[case("abc", "\n")]
    #[case("", "\n")]
    #[case("--", "\n")]
    #[case(".", "\n")]
    fn renders_numbers(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(render_value(PropertyType::Number, raw), expected);
    }

    #[test]
    fn number_past_float_range_renders_empty() {
        let huge = "9".repeat(400);
        assert_eq!(render_value(PropertyType::Number, &huge), "\n");
        assert_eq!(render_value(PropertyType::Number, &format!("-{huge}")), "\n");
    }

    #[rstest]
    #[case("true", " true\n")]
    #[case("false", " false\n")]
    #[case("TRUE", " false\n")]
    #[case("yes", " false\n")]
    #[case("", " false\n")]
    fn renders_checkboxes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(render_value(PropertyType::Checkbox, raw), expected);
    }

    #[test]
    fn renders_dates_trimmed_and_unquoted() {
        assert_eq!(render_value(PropertyType::Date, " 2024-05-01 "), " 2024-05-01\n");
        assert_eq!(
            render_value(PropertyType::Datetime, "2024-05-01T10:00:00Z"),
            " 2024-05-01T10:00:00Z\n"
        );
        assert_eq!(render_value(PropertyType::Date, "   "), "\n");
    }

    #[test]
    fn renders_text_quoted_and_escaped() {
        assert_eq!(render_value(PropertyType::Text, "My Note"), " \"My Note\"\n");
        assert_eq!(render_value(PropertyType::Text, r#"a "b""#), " \"a \\\"b\\\"\"\n");
        assert_eq!(render_value(PropertyType::Text, "  "), "\n");
    }
}
