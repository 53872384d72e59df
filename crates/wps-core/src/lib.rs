//! wps Core - snippet placement for product detail pages
//!
//! This crate provides:
//! - Snippet storage with allow-list HTML sanitization
//! - Placement rules with save-time sanitizing and permissive evaluation
//! - The static position table of insertion points
//! - An insertion-point registry (actions and filters ordered by priority)
//! - Shortcode expansion over stored snippets
//! - The placement dispatcher matching rules to the current product
//!
//! Persistence is abstracted behind [`ops::OptionStore`]; the SQLite backend
//! lives in `wps-store`.

pub mod dispatch;
pub mod errors;
pub mod hooks;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod positions;
pub mod render;
pub mod sanitize;
pub mod shortcode;

pub use wps_core_types::schema;

// Re-export commonly used types
pub use dispatch::{Placement, PlacementDispatcher};
pub use errors::{ExError, ExErrorKind, Result, WpsError};
pub use hooks::HookRegistry;
pub use model::{
    HookStyle, PageContext, PlacementRule, PositionEntry, ProductContext, RawRule, Snippet,
};
pub use ops::{MemoryOptionStore, OptionStore, RuleSet, SnippetStore};
pub use positions::PositionTable;
pub use shortcode::ShortcodeRegistry;
