use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod defaults;
pub mod manager;
pub mod options;

pub use manager::ConfigManager;
pub use options::RunOptions;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "defaults::default_run_defaults")]
    pub defaults: RunDefaults,
    #[serde(default = "defaults::default_git_config")]
    pub git: GitConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RunDefaults {
    pub days: u32,
    pub top: usize,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GitConfig {
    pub remote: String,
    #[serde(default)]
    pub protected_branches: Vec<String>,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for crate::utils::TidyError {
    fn from(error: ConfigError) -> Self {
        crate::utils::TidyError::config_error(error.to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        defaults::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        ConfigManager::load_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.defaults.days == 0 {
            return Err(ConfigError::Validation(
                "defaults.days must be at least 1".to_string(),
            ));
        }

        if self.defaults.top == 0 {
            return Err(ConfigError::Validation(
                "defaults.top must be at least 1".to_string(),
            ));
        }

        if self.git.remote.trim().is_empty() {
            return Err(ConfigError::Validation(
                "git.remote cannot be empty".to_string(),
            ));
        }

        if self
            .git
            .protected_branches
            .iter()
            .any(|name| name.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "git.protected_branches cannot contain empty names".to_string(),
            ));
        }

        Ok(())
    }

    pub fn remote(&self) -> &str {
        &self.git.remote
    }

    pub fn protected_branches(&self) -> &[String] {
        &self.git.protected_branches
    }
}
