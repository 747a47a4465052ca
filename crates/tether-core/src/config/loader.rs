use super::schema::TetherConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from default locations:
    /// 1. ./tether.yaml
    /// 2. ~/.tether/config.yaml
    /// 3. Default configuration
    pub fn load_default() -> Result<TetherConfig, ConfigError> {
        let local_config = PathBuf::from("./tether.yaml");
        if local_config.exists() {
            return Self::load_from(&local_config);
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".tether").join("config.yaml");
            if home_config.exists() {
                return Self::load_from(&home_config);
            }
        }

        Ok(TetherConfig::default())
    }

    pub fn load_from(path: &Path) -> Result<TetherConfig, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: TetherConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
