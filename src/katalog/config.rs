use crate::error::{CatalogError, Result};
use crate::format::DisplayStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for katalog, stored in the config dir as config.json
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Display style for record lines ("plain" or "special")
    #[serde(default)]
    pub display: DisplayStyle,
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: CatalogConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        // Ensure directory exists
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_path, content).map_err(CatalogError::Io)?;
        Ok(())
    }

    /// Read one setting by key name
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "display" => Ok(self.display.to_string()),
            other => Err(CatalogError::Config(format!(
                "unknown configuration key: {}",
                other
            ))),
        }
    }

    /// Set one setting by key name, validating the value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "display" => {
                self.display = DisplayStyle::from_str(value)?;
                Ok(())
            }
            other => Err(CatalogError::Config(format!(
                "unknown configuration key: {}",
                other
            ))),
        }
    }

    /// All settings as (key, rendered value) pairs, for `config` with no args
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![("display", self.display.to_string())]
    }
}
