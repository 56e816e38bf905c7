use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = cmd
    {
        if *init {
            if path.exists() && !*force {
                return Err(AppError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save(path)?;
            success(format!("Config file: {}", path.display()));
        }

        if *print_config || !*init {
            info(format!("Configuration file: {}", path.display()));
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
            println!("{yaml}");
        }
    }
    Ok(())
}
