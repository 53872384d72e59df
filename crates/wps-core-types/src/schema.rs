//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_SNIPPET: &str = "snippet";
pub const FIELD_RULE_ID: &str = "rule_id";
pub const FIELD_POSITION_KEY: &str = "position_key";
pub const FIELD_HOOK: &str = "hook";
pub const FIELD_OPTION_KEY: &str = "option_key";

// Collection sizes
pub const FIELD_RULE_COUNT: &str = "rule_count";
pub const FIELD_REGISTERED: &str = "registered";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
