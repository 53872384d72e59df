//! SQLite-backed option store
//!
//! One row per option key; values are stored as JSON text and replaced
//! wholesale on every write.

#![allow(clippy::result_large_err)]

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};
use serde_json::Value;
use wps_core::errors::{ExError, WpsError};
use wps_core::OptionStore;

use crate::db;
use crate::errors::{from_rusqlite, serialization_error, Result};
use crate::migrations::apply_migrations;

/// Durable `OptionStore` over a SQLite connection
pub struct SqliteOptionStore {
    conn: Connection,
}

impl SqliteOptionStore {
    /// Open (or create) the database file and bring its schema up to date
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be opened or a migration fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        db::configure(&conn)?;
        Self::from_connection(conn)
    }

    /// Fresh in-memory store
    ///
    /// # Errors
    ///
    /// Fails when SQLite cannot allocate the database or a migration fails.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Wrap an existing connection, applying pending migrations
    ///
    /// # Errors
    ///
    /// Fails when a migration fails.
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Stored option keys, sorted
    ///
    /// # Errors
    ///
    /// Fails on SQL errors.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT option_name FROM options ORDER BY option_name")
            .map_err(from_rusqlite)?;
        let keys = stmt
            .query_map([], |row| row.get(0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(from_rusqlite)?;
        Ok(keys)
    }
}

impl OptionStore for SqliteOptionStore {
    fn get_option(&self, key: &str) -> Result<Option<Value>> {
        let text: Option<String> = self
            .conn
            .query_row(
                "SELECT option_value FROM options WHERE option_name = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| from_rusqlite(e).with_entity_id(key))?;

        text.map(|text| {
            serde_json::from_str(&text).map_err(|e| {
                ExError::from(WpsError::OptionDecode {
                    key: key.to_string(),
                    reason: e.to_string(),
                })
                .with_op("get_option")
            })
        })
        .transpose()
    }

    fn update_option(&self, key: &str, value: &Value) -> Result<()> {
        let text = serde_json::to_string(value)
            .map_err(|e| serialization_error("update_option", key, e))?;

        self.conn
            .execute(
                "INSERT INTO options (option_name, option_value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(option_name) DO UPDATE SET
                    option_value = excluded.option_value,
                    updated_at = excluded.updated_at",
                rusqlite::params![key, text, chrono::Utc::now().timestamp()],
            )
            .map_err(|e| from_rusqlite(e).with_entity_id(key))?;

        tracing::debug!(option_key = key, "option written");
        Ok(())
    }

    fn delete_option(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM options WHERE option_name = ?1", [key])
            .map_err(|e| from_rusqlite(e).with_entity_id(key))?;
        Ok(())
    }
}

impl std::fmt::Debug for SqliteOptionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteOptionStore")
            .field("path", &self.conn.path())
            .finish()
    }
}
