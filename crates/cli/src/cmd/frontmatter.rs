use std::fs;
use std::path::Path;

use vaultclip_core::frontmatter::{Property, generate_frontmatter};

use super::{load_settings, variables_from_pairs};
use crate::FrontmatterArgs;

pub fn run(config: Option<&Path>, args: &FrontmatterArgs) {
    let settings = load_settings(config, "frontmatter");

    let properties = match (&args.properties, &args.template) {
        (Some(path), _) => match read_properties(path) {
            Ok(props) => props,
            Err(e) => {
                eprintln!("FAIL vclip frontmatter");
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        (None, Some(name)) => match settings.template(name) {
            Some(t) => t.properties.clone(),
            None => {
                eprintln!("Template not found: {name}");
                eprintln!("Available templates:");
                for t in &settings.templates {
                    eprintln!("  - {}", t.name);
                }
                std::process::exit(1);
            }
        },
        (None, None) => {
            eprintln!("either --properties or --template is required");
            std::process::exit(2);
        }
    };

    let vars = variables_from_pairs(&args.vars);
    let frontmatter =
        generate_frontmatter(&properties, Some(&vars), &settings.frontmatter_context());
    print!("{frontmatter}");
}

/// Read a property list from a JSON or YAML file, chosen by extension.
pub fn read_properties(path: &Path) -> Result<Vec<Property>, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
    if is_json {
        serde_json::from_str(&raw)
            .map_err(|e| format!("invalid JSON in {}: {e}", path.display()))
    } else {
        serde_yaml::from_str(&raw)
            .map_err(|e| format!("invalid YAML in {}: {e}", path.display()))
    }
}
