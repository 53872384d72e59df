//! Names of the persisted option records

/// Option holding the snippet mapping (name -> sanitized HTML)
pub const STORED_SNIPPETS: &str = "wps_stored_shortcodes";

/// Option holding the ordered list of placement rules
pub const DISPLAY_RULES: &str = "wps_display_rules";
