use crate::catalog::DEFAULT_CATALOG_LIMIT;
use crate::commands::script::DEFAULT_SENTINEL;
use crate::error::{DexError, Result};
use crate::list::Strategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CATALOG_PATH: &str = "/tmp/pokemon.csv";
const DEFAULT_CAPACITY: usize = 801;

/// Configuration for dexlist, read from a JSON file. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DexConfig {
    /// CSV read when no catalog path is given on the command line
    pub catalog_path: PathBuf,

    /// Storage used for the list
    pub strategy: Strategy,

    /// Slot count for the bounded list (ignored by the linked list)
    pub capacity: usize,

    /// Maximum number of catalog records to load
    pub catalog_limit: usize,

    /// Line that ends the selection block
    pub sentinel: String,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            strategy: Strategy::default(),
            capacity: DEFAULT_CAPACITY,
            catalog_limit: DEFAULT_CATALOG_LIMIT,
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

impl DexConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(DexError::Io)?;
        let config: DexConfig = serde_json::from_str(&content).map_err(DexError::Serialization)?;
        Ok(config)
    }

    /// Path of the config file in `dir`
    pub fn path_in<P: AsRef<Path>>(dir: P) -> PathBuf {
        dir.as_ref().join(CONFIG_FILENAME)
    }
}
