use super::error::Result;
use crate::libs::data_storage::DataStorage;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DB_FILE_NAME: &str = "taskberry.db";

/// Location of the task database.
///
/// Passed explicitly into every store instead of living in a global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default database file inside the per-user data directory.
    pub fn default_location() -> std::result::Result<Self, std::io::Error> {
        Ok(Self::new(DataStorage::new().get_path(DB_FILE_NAME)?))
    }
}

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens a connection to the configured database file, creating its parent
    /// directory when needed. The connection closes when `Db` is dropped.
    pub fn open(config: &StoreConfig) -> Result<Db> {
        ensure_parent_dir(&config.path)?;
        debug!(path = %config.path.display(), "opening task database");
        let conn = Connection::open(&config.path)?;

        Ok(Db { conn })
    }
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
