pub mod doctor;
pub mod frontmatter;
pub mod send;
pub mod vars;

use std::path::Path;

use vaultclip_core::config::{ConfigLoader, Settings, default_config_path};
use vaultclip_core::vars::Variables;

use crate::logging;

/// Load settings and start logging, or report the failure and exit.
pub fn load_settings(config: Option<&Path>, command: &str) -> Settings {
    match ConfigLoader::load(config) {
        Ok(settings) => {
            logging::init(&settings.logging);
            settings
        }
        Err(e) => {
            eprintln!("FAIL vclip {command}");
            eprintln!("{e}");
            if config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

/// Build captured variables from `--var key=value` pairs, wrapping bare keys
/// in `{{ }}` the way captured page variables are keyed.
pub fn variables_from_pairs(pairs: &[(String, String)]) -> Variables {
    pairs
        .iter()
        .map(|(k, v)| {
            let key = if k.starts_with("{{") { k.clone() } else { format!("{{{{{k}}}}}") };
            (key, v.clone())
        })
        .collect()
}
