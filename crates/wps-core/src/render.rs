//! Wrapper markup for injected snippets

use wps_core_types::markup::{BASE_MARKER, POSITION_MARKER, RULE_MARKER};

use crate::sanitize::escape_attr;

/// Wrap expanded snippet markup in its marker container
///
/// Returns `None` for blank content so no empty wrapper is ever emitted.
///
/// ```
/// use wps_core::render::wrap_snippet;
///
/// assert_eq!(
///     wrap_snippet("after_title", "r1", "<b>Sale!</b>").as_deref(),
///     Some(r#"<div class="wps-display wps-position-after_title wps-rule-r1"><b>Sale!</b></div>"#)
/// );
/// assert_eq!(wrap_snippet("after_title", "r1", "  "), None);
/// ```
pub fn wrap_snippet(position_key: &str, rule_id: &str, content: &str) -> Option<String> {
    if content.trim().is_empty() {
        return None;
    }

    Some(format!(
        "<div class=\"{} {}-{} {}-{}\">{}</div>",
        BASE_MARKER,
        POSITION_MARKER,
        escape_attr(position_key),
        RULE_MARKER,
        escape_attr(rule_id),
        content
    ))
}
