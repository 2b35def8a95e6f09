//! Configuration for taskberry.
//!
//! Settings live in `config.json` inside the data directory. A missing file is
//! not an error: every field has a default, so the tool runs with no setup.
//!
//! ## Database location
//!
//! The database path is resolved in this order:
//!
//! 1. `--db <PATH>` on the command line
//! 2. the `TASKBERRY_DB` environment variable (a `.env` file is honoured)
//! 3. `db_path` in `config.json`
//! 4. `taskberry.db` in the data directory
//!
//! ```rust,no_run
//! use taskberry::libs::config::Config;
//!
//! let config = Config::read()?;
//! let store = config.store_config(None)?;
//! println!("Using {}", store.path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::StoreConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the database path.
pub const DB_ENV_VAR: &str = "TASKBERRY_DB";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Database file to use instead of the data directory default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// Whether a bare `list` also shows completed tasks.
    #[serde(default)]
    pub show_completed: bool,
}

impl Config {
    /// Loads the configuration from the data directory, falling back to defaults.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the database location from the flag, the environment and this config.
    pub fn store_config(&self, db_flag: Option<PathBuf>) -> Result<StoreConfig> {
        let db_env = env::var_os(DB_ENV_VAR).map(PathBuf::from);
        self.resolve_store(db_flag, db_env)
    }

    /// Same as [`Config::store_config`] with the environment value passed in.
    pub fn resolve_store(&self, db_flag: Option<PathBuf>, db_env: Option<PathBuf>) -> Result<StoreConfig> {
        let explicit = db_flag
            .into_iter()
            .chain(db_env)
            .chain(self.db_path.clone())
            .find(|path| !path.as_os_str().is_empty());

        match explicit {
            Some(path) => Ok(StoreConfig::new(path)),
            None => Ok(StoreConfig::default_location()?),
        }
    }
}
