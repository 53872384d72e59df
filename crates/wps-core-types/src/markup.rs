//! Class tokens for injected wrapper markup
//!
//! Storefront themes style injected content against these tokens, so the
//! rendered form `wps-display wps-position-<key> wps-rule-<id>` must not change.

/// Base token present on every wrapper
pub const BASE_MARKER: &str = "wps-display";

/// Prefix for the position token, followed by `-<position key>`
pub const POSITION_MARKER: &str = "wps-position";

/// Prefix for the rule token, followed by `-<rule id>`
pub const RULE_MARKER: &str = "wps-rule";

/// Category filter value matching every product
pub const ALL_CATEGORIES: &str = "all";
