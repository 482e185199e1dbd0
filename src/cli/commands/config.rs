use crate::cli::parser::{ConfigArgs, ConfigCommands};
use crate::config::{defaults::default_config, Config, ConfigManager};
use crate::utils::{Result, TidyError};
use std::path::Path;

pub fn execute(args: ConfigArgs) -> Result<()> {
    match args.command.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => show(),
        ConfigCommands::Path => {
            println!("{}", ConfigManager::get_config_path().display());
            Ok(())
        }
        ConfigCommands::Init { overwrite } => {
            let path = ConfigManager::get_config_path();
            init_at(&path, overwrite)?;
            println!("Wrote default configuration to {}", path.display());
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn init_at(path: &Path, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(TidyError::config_error(format!(
            "{} already exists; pass --overwrite to replace it",
            path.display()
        )));
    }

    ConfigManager::save_to_path(&default_config(), path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("branch-tidy").join("config.json");

        init_at(&path, false).unwrap();
        let loaded = ConfigManager::load_from_file(&path).unwrap();
        assert_eq!(loaded, default_config());
    }

    #[test]
    fn test_init_refuses_to_clobber() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        assert!(matches!(init_at(&path, false), Err(TidyError::Config { .. })));
        assert!(init_at(&path, true).is_ok());
    }
}
