use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::network::NetworkConfig;
use self::phrasal::PhrasalConfig;

pub mod dictionary;
pub mod network;
pub mod phrasal;

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub phrasal: PhrasalConfig,
    pub dictionary: DictionaryConfig,
    pub network: NetworkConfig,

    /// Suppress progress output and the final listing
    pub silent: bool,

    /// Caller extensions, carried through load/dump untouched
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Config {
    pub fn new() -> Self {
        Config {
            phrasal: PhrasalConfig::default(),
            dictionary: DictionaryConfig::default(),
            network: NetworkConfig::new(),
            silent: false,
            extra: HashMap::new(),
        }
    }

    /// Read a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write the effective config back as JSON.
    pub fn dump(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
