//! wps Store - SQLite persistence for the option store
//!
//! Provides:
//! - SQLite connection helpers
//! - Embedded migrations with checksums
//! - `SqliteOptionStore`, the durable `OptionStore` backend

pub mod db;
pub mod errors;
pub mod migrations;
pub mod options;

// Re-export key types
pub use errors::Result;
pub use options::SqliteOptionStore;
