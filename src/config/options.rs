use super::Config;

/// Settings for a single invocation: command-line flags layered over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub dry_run: bool,
    pub force: bool,
    pub days: u32,
    pub top: usize,
    pub remote: String,
    pub protected_branches: Vec<String>,
}

impl RunOptions {
    pub fn resolve(
        config: &Config,
        dry_run: bool,
        force: bool,
        days: Option<u32>,
        top: Option<usize>,
    ) -> Self {
        Self {
            dry_run,
            force,
            days: days.unwrap_or(config.defaults.days),
            top: top.unwrap_or(config.defaults.top),
            remote: config.remote().to_string(),
            protected_branches: config.protected_branches().to_vec(),
        }
    }
}
