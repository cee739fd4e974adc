use crate::error::Result;
use crate::loader::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATASET: &str = "pokemon.csv";

/// Configuration for dexcli, stored as config.json under the platform config
/// directory (or `DEXCLI_HOME` when set).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DexConfig {
    /// Path of the CSV dataset loaded at startup.
    #[serde(default = "default_dataset")]
    pub dataset: PathBuf,

    /// Upper bound on records imported from one dataset.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Abort the load on the first malformed row instead of skipping it.
    #[serde(default)]
    pub strict: bool,
}

fn default_dataset() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET)
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            capacity: default_capacity(),
            strict: false,
        }
    }
}

impl DexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DexConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}
