//! Auto-metadata expansion.
//!
//! A property typed `auto-metadata` is a placeholder: at render time it is
//! replaced by properties derived from the captured page variables. Its value
//! holds the expansion config, either as a JSON object:
//!
//! ```json
//! { "groupedOutput": true, "groupKey": "meta", "excludePatterns": ["^og"] }
//! ```
//!
//! or as a comma-separated list of extra variable names to leave out:
//!
//! ```text
//! author, published
//! ```

use regex::Regex;
use serde_json::Value;
use tracing::{debug, trace};

use super::types::{FrontmatterContext, Property, PropertyType};
use crate::ids::generate_property_id;
use crate::vars::{Variables, clean_key};

/// Settings controlling one auto-metadata expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoMetadataConfig {
    /// Emit a single property holding all pairs as a JSON object.
    pub grouped_output: bool,
    /// Property name used when `grouped_output` is set.
    pub group_key: String,
    /// Regex sources; a key matching any of them is skipped.
    pub exclude_patterns: Vec<String>,
    /// Exact variable names to skip.
    pub exclude_variables: Vec<String>,
}

impl Default for AutoMetadataConfig {
    fn default() -> Self {
        Self {
            grouped_output: false,
            group_key: "metadata".to_string(),
            exclude_patterns: vec![
                "^content".to_string(),
                "^fullHtml".to_string(),
                "^contentHtml".to_string(),
            ],
            exclude_variables: vec![
                "content".to_string(),
                "contentHtml".to_string(),
                "fullHtml".to_string(),
            ],
        }
    }
}

impl AutoMetadataConfig {
    /// Parse a config string. Never fails; see the module docs for accepted
    /// shapes.
    pub fn parse(config: &str) -> Self {
        let mut cfg = Self::default();
        if config.trim().is_empty() {
            return cfg;
        }

        match serde_json::from_str::<Value>(config) {
            Ok(Value::Object(map)) => {
                if let Some(grouped) = map.get("groupedOutput").and_then(Value::as_bool) {
                    cfg.grouped_output = grouped;
                }
                if let Some(key) = map.get("groupKey").and_then(Value::as_str) {
                    cfg.group_key = key.to_string();
                }
                if let Some(patterns) = map.get("excludePatterns").and_then(string_list) {
                    cfg.exclude_patterns = patterns;
                }
                if let Some(names) = map.get("excludeVariables").and_then(string_list) {
                    cfg.exclude_variables = names;
                }
                cfg
            }
            Ok(Value::Null) | Err(_) => {
                trace!("auto-metadata config is not a JSON object, reading exclusion list");
                cfg.exclude_variables.extend(
                    config
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(ToString::to_string),
                );
                cfg
            }
            Ok(_) => cfg,
        }
    }

    fn matcher(&self) -> ExclusionMatcher<'_> {
        ExclusionMatcher::new(&self.exclude_variables, &self.exclude_patterns)
    }
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(ToString::to_string))
        .collect()
}

/// One exclusion pattern: a compiled regex, or the raw text when the source
/// does not compile.
#[derive(Debug)]
enum Pattern {
    Regex(Regex),
    Literal(String),
}

impl Pattern {
    fn compile(source: &str) -> Self {
        match Regex::new(source) {
            Ok(re) => Pattern::Regex(re),
            Err(e) => {
                debug!("exclude pattern {source:?} is not a valid regex ({e}), matching literally");
                Pattern::Literal(source.to_string())
            }
        }
    }

    fn matches(&self, key: &str) -> bool {
        match self {
            Pattern::Regex(re) => re.is_match(key),
            Pattern::Literal(text) => key.contains(text.as_str()),
        }
    }
}

/// Decides whether a cleaned variable key is excluded.
#[derive(Debug)]
pub struct ExclusionMatcher<'a> {
    names: &'a [String],
    patterns: Vec<Pattern>,
}

impl<'a> ExclusionMatcher<'a> {
    pub fn new(names: &'a [String], patterns: &[String]) -> Self {
        Self { names, patterns: patterns.iter().map(|p| Pattern::compile(p)).collect() }
    }

    pub fn is_excluded(&self, key: &str) -> bool {
        self.names.iter().any(|n| n == key) || self.patterns.iter().any(|p| p.matches(key))
    }
}

/// Select the variables that survive the config's exclusion rules, keyed by
/// their cleaned names.
pub fn filter_variables(variables: &Variables, config: &AutoMetadataConfig) -> Variables {
    let matcher = config.matcher();
    let mut kept = Variables::new();
    for (key, value) in variables.iter() {
        let key = clean_key(key);
        if matcher.is_excluded(key) || value.trim().is_empty() {
            continue;
        }
        kept.insert(key, value);
    }
    kept
}

/// Build the properties produced by one auto-metadata placeholder.
pub fn generate_properties(
    variables: &Variables,
    config: &AutoMetadataConfig,
) -> Vec<Property> {
    let kept = filter_variables(variables, config);

    if config.grouped_output {
        let value = serde_json::to_string(&kept).unwrap_or_else(|_| "{}".to_string());
        return vec![Property { id: generate_property_id(), ..Property::text(&config.group_key, value) }];
    }

    kept.iter()
        .map(|(key, value)| Property { id: generate_property_id(), ..Property::text(key, value) })
        .collect()
}

/// Replace every auto-metadata property with its generated properties,
/// keeping everything else in order.
pub fn expand(
    properties: &[Property],
    variables: &Variables,
    ctx: &FrontmatterContext<'_>,
) -> Vec<Property> {
    let mut expanded = Vec::with_capacity(properties.len());
    for property in properties {
        if ctx.resolve_type(property) == PropertyType::AutoMetadata {
            let config = AutoMetadataConfig::parse(&property.value);
            let generated = generate_properties(variables, &config);
            debug!(
                property = %property.name,
                generated = generated.len(),
                grouped = config.grouped_output,
                "expanded auto-metadata property"
            );
            expanded.extend(generated);
        } else {
            expanded.push(property.clone());
        }
    }
    expanded
}
