use std::path::Path;

use clap::Subcommand;
use winboost_core::{Config, ConfigError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "user.name", "store.reaward_completed")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
    /// Print the config file location
    Path,
}

pub fn run(action: ConfigAction, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_from(path)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(ConfigError::UnknownKey(key).into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_from(path)?;
            config.set(&key, &value)?;
            config.save_to(path)?;
            tracing::info!(%key, %value, "config updated");
            println!("ok");
        }
        ConfigAction::List => {
            let config = Config::load_from(path)?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save_to(path)?;
            println!("config reset to defaults");
        }
        ConfigAction::Path => println!("{}", path.display()),
    }
    Ok(())
}
