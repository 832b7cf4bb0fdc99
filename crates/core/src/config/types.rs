use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::dispatch::NoteBehavior;
use crate::frontmatter::{FrontmatterContext, Property, PropertyTypeEntry};

/// Global settings, as stored in `config.toml`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub version: u32,
    /// Known vault names. The first one is used when a template names none.
    #[serde(default)]
    pub vaults: Vec<String>,
    /// Open notes in Obsidian without focusing them.
    #[serde(default)]
    pub silent_open: bool,
    /// Embed note content in the URL instead of going through the clipboard.
    #[serde(default)]
    pub legacy_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_include_list: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_exclude_list: Option<Vec<String>>,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Ordered name -> type table; first match wins.
    #[serde(default)]
    pub property_types: Vec<PropertyTypeEntry>,
    #[serde(default)]
    pub templates: Vec<Template>,
}

impl Settings {
    /// Empty settings at the current config version.
    pub fn new() -> Self {
        Self {
            version: 1,
            vaults: Vec::new(),
            silent_open: false,
            legacy_mode: false,
            property_types: Vec::new(),
            variable_include_list: None,
            variable_exclude_list: None,
            logging: LoggingConfig::default(),
            templates: Vec::new(),
        }
    }

    pub fn frontmatter_context(&self) -> FrontmatterContext<'_> {
        FrontmatterContext::new(&self.property_types)
    }

    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn template_mut(&mut self, name: &str) -> Option<&mut Template> {
        self.templates.iter_mut().find(|t| t.name == name)
    }

    pub fn default_vault(&self) -> Option<&str> {
        self.vaults.first().map(String::as_str)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// A clipping template: where the note goes and which properties it gets.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub behavior: NoteBehavior,
    /// Destination folder inside the vault.
    #[serde(default)]
    pub path: String,
    /// Note name; `{{var}}` placeholders are filled from captured variables.
    #[serde(default = "default_note_name")]
    pub note_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_include_list: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_exclude_list: Option<Vec<String>>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

fn default_note_name() -> String {
    "{{title}}".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
