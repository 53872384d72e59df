//! Runtime configuration resolved from flags and environment

use std::path::PathBuf;
use wps_store::SqliteOptionStore;

/// Used when neither `--db` nor `WPS_DB` is given
pub const DEFAULT_DB_PATH: &str = ".wps/options.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// Open the option database, applying pending migrations
    pub fn open_store(&self) -> wps_store::Result<SqliteOptionStore> {
        SqliteOptionStore::open(&self.db_path)
    }
}
