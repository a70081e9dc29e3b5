//! Global MC Pro configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::calendar::{Hemisphere, SeasonModel};
use crate::error::{McProError, McProResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/mcpro";
static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Global configuration at ~/.config/mcpro/config.toml
///
/// Every key can be overridden from the environment with an `MCPRO_` prefix,
/// e.g. `MCPRO_DATA_DIR=/tmp/mc mcpro balance`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct McProConfig {
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub hemisphere: Hemisphere,

    #[serde(default)]
    pub season_model: SeasonModel,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for McProConfig {
    fn default() -> Self {
        McProConfig {
            data_dir: default_data_dir(),
            hemisphere: Hemisphere::default(),
            season_model: SeasonModel::default(),
            log_level: default_log_level(),
        }
    }
}

impl McProConfig {
    pub fn config_path() -> McProResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| McProError::Config("Could not determine config directory".into()))?
            .join("mcpro");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, creating a commented-out default on first run.
    pub fn load() -> McProResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> McProResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("MCPRO"))
            .build()
            .map_err(|e| McProError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| McProError::Config(e.to_string()))
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Save the current config to ~/.config/mcpro/config.toml
    pub fn save(&self) -> McProResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| McProError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| McProError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> McProResult<()> {
        let contents = format!(
            "\
# MC Pro configuration

# Where your records are stored:
# data_dir = \"{}\"

# Hemisphere used for the seasonal palette (\"south\" or \"north\"):
# hemisphere = \"south\"

# Season model (\"summer-winter\" or \"quarterly\"):
# season_model = \"summer-winter\"

# Log level written to stderr (error, warn, info, debug, trace):
# log_level = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_LOG_LEVEL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                McProError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| McProError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = McProConfig::load_from(&dir.path().join("nope.toml")).unwrap();

        assert_eq!(config.data_dir, default_data_dir());
        assert_eq!(config.hemisphere, Hemisphere::South);
        assert_eq!(config.season_model, SeasonModel::SummerWinter);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_generated_default_config_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mcpro/config.toml");

        McProConfig::create_default_config(&path).unwrap();
        let config = McProConfig::load_from(&path).unwrap();

        assert_eq!(config.hemisphere, Hemisphere::South);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/srv/mc\"\nhemisphere = \"north\"\nseason_model = \"quarterly\"\n",
        )
        .unwrap();

        let config = McProConfig::load_from(&path).unwrap();

        assert_eq!(config.data_path(), PathBuf::from("/srv/mc"));
        assert_eq!(config.hemisphere, Hemisphere::North);
        assert_eq!(config.season_model, SeasonModel::Quarterly);
    }
}
