use crate::config::types::{LoggingConfig, Settings};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    SerializeError(#[source] toml::ser::Error),

    #[error("failed to write config file {0}: {1}")]
    WriteError(String, #[source] std::io::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(config_path: Option<&Path>) -> Result<Settings, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let mut settings: Settings = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if settings.version != 1 {
            return Err(ConfigError::BadVersion(settings.version));
        }

        // the raw path stays on the settings so saving writes it back unchanged
        Self::log_file_path(&settings.logging)?;
        debug!(
            path = %path.display(),
            templates = settings.templates.len(),
            property_types = settings.property_types.len(),
            "loaded settings"
        );
        Ok(settings)
    }

    /// Write settings back to disk as TOML, creating parent directories.
    pub fn save(config_path: Option<&Path>, settings: &Settings) -> Result<(), ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        let s = toml::to_string_pretty(settings).map_err(ConfigError::SerializeError)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteError(path.display().to_string(), e))?;
        }
        fs::write(&path, s)
            .map_err(|e| ConfigError::WriteError(path.display().to_string(), e))?;

        debug!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// The log file path with `~` and environment variables expanded.
    pub fn log_file_path(log_cfg: &LoggingConfig) -> Result<Option<PathBuf>, ConfigError> {
        log_cfg.file.as_ref().map(|file| expand_path(&file.to_string_lossy())).transpose()
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("vaultclip").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("vaultclip").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
