use std::path::Path;

use vaultclip_core::config::{ConfigLoader, default_config_path};

pub fn run(config: Option<&Path>) {
    match ConfigLoader::load(config) {
        Ok(settings) => {
            println!("OK   vclip doctor");
            println!("version: {}", vaultclip_core::version());
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("vaults: {}", settings.vaults.join(", "));
            println!("silent_open: {}", settings.silent_open);
            println!("legacy_mode: {}", settings.legacy_mode);
            println!("property_types: {}", settings.property_types.len());
            println!(
                "templates: {}",
                settings.templates.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(", ")
            );
            println!("logging.level: {}", settings.logging.level);
        }
        Err(e) => {
            println!("FAIL vclip doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
