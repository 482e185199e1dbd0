use super::{Config, GitConfig, RunDefaults};
use std::path::PathBuf;

pub const DEFAULT_DAYS: u32 = 30;
pub const DEFAULT_TOP: usize = 10;
pub const DEFAULT_REMOTE: &str = "origin";

pub const CONFIG_PATH_ENV: &str = "BRANCH_TIDY_CONFIG_PATH";

pub fn default_config() -> Config {
    Config {
        defaults: default_run_defaults(),
        git: default_git_config(),
    }
}

pub fn default_run_defaults() -> RunDefaults {
    RunDefaults {
        days: DEFAULT_DAYS,
        top: DEFAULT_TOP,
    }
}

pub fn default_git_config() -> GitConfig {
    GitConfig {
        remote: DEFAULT_REMOTE.to_string(),
        protected_branches: Vec::new(),
    }
}

pub fn get_default_config_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "branch-tidy") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("branch-tidy")
    }
}

pub fn get_config_file_path() -> PathBuf {
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}
