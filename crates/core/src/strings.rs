//! Small string transforms shared by the frontmatter renderer and the
//! note dispatcher.

/// Longest note name (in characters) handed to Obsidian.
const MAX_FILE_NAME_CHARS: usize = 245;

const RESERVED_WINDOWS_NAMES: &[&str] = &[
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7",
    "com8", "com9", "com0", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7",
    "lpt8", "lpt9", "lpt0",
];

/// Escape embedded double quotes as `\"`.
pub fn escape_double_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Reverse of [`escape_double_quotes`].
pub fn unescape_double_quotes(s: &str) -> String {
    s.replace("\\\"", "\"")
}

/// Make a note name safe to use as a file name on any platform.
///
/// Wikilink-breaking characters (`# | ^ [ ]`) and filesystem-illegal
/// characters are removed, Windows device names get a `_` prefix, a leading
/// dot becomes `_`, and trailing dots or spaces are dropped. An empty result
/// becomes `Untitled`.
pub fn sanitize_file_name(name: &str) -> String {
    let mut sanitized: String = name
        .chars()
        .filter(|c| {
            !matches!(c, '#' | '|' | '^' | '[' | ']' | '<' | '>' | ':' | '"' | '/' | '\\' | '?' | '*')
                && !c.is_control()
        })
        .collect();

    let stem = sanitized.split('.').next().unwrap_or_default().to_lowercase();
    if RESERVED_WINDOWS_NAMES.contains(&stem.as_str()) {
        sanitized.insert(0, '_');
    }

    if sanitized.starts_with('.') {
        sanitized.replace_range(..1, "_");
    }

    let sanitized = sanitized.trim_end_matches(['.', ' ']).trim();
    let truncated: String = sanitized.chars().take(MAX_FILE_NAME_CHARS).collect();

    if truncated.is_empty() { "Untitled".to_string() } else { truncated }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn escaping_round_trips() {
        let original = r#"She said "hi" twice"#;
        let escaped = escape_double_quotes(original);
        assert_eq!(escaped, r#"She said \"hi\" twice"#);
        assert_eq!(unescape_double_quotes(&escaped), original);
    }

    #[rstest]
    #[case("My Note", "My Note")]
    #[case("a/b:c", "abc")]
    #[case("Tags #one [[link]]", "Tags one link")]
    #[case(".hidden", "_hidden")]
    #[case("con", "_con")]
    #[case("CON.txt", "_CON.txt")]
    #[case("trailing...", "trailing")]
    #[case("   ", "Untitled")]
    #[case("???", "Untitled")]
    fn sanitizes_file_names(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_file_name(input), expected);
    }

    #[test]
    fn truncates_long_names() {
        let long = "x".repeat(300);
        assert_eq!(sanitize_file_name(&long).chars().count(), MAX_FILE_NAME_CHARS);
    }
}
