use super::defaults::{default_config, get_config_file_path};
use super::{Config, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigManager;

impl ConfigManager {
    pub fn get_config_path() -> PathBuf {
        get_config_file_path()
    }

    /// Loads the config file, or the built-in defaults when none exists.
    pub fn load_or_default() -> Result<Config> {
        Self::load_or_default_from(&get_config_file_path())
    }

    pub fn load_or_default_from(config_path: &Path) -> Result<Config> {
        if config_path.exists() {
            debug!(path = %config_path.display(), "loading config");
            Self::load_from_file(config_path)
        } else {
            debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(default_config())
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(config)?;
        let mut file = fs::File::create(path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        Ok(())
    }
}
