use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sanitize::{sanitize_key, sanitize_text_field, slugify};

/// Placement rule as persisted and evaluated
///
/// Field names on the wire (`shortcode`, `category`, `position`) match the
/// stored option layout. Nothing here guarantees that `snippet_ref` or
/// `position_key` resolve; the dispatcher treats unresolved rules as inactive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementRule {
    /// Stable identifier, `[a-z0-9_-]`
    pub id: String,

    /// Snippet name, either bare (`sale-badge`) or as a shortcode tag (`[sale-badge]`)
    #[serde(rename = "shortcode")]
    pub snippet_ref: String,

    /// `"all"` or a category slug
    #[serde(rename = "category")]
    pub category_filter: String,

    /// Key into the position table
    #[serde(rename = "position")]
    pub position_key: String,

    pub enabled: bool,
}

impl PlacementRule {
    /// Decode one persisted rule record
    ///
    /// Missing or non-text fields become empty strings, `enabled` follows the
    /// truthiness of the stored flag, and an empty id falls back to the
    /// record's index.
    pub fn decode(index: usize, value: &Value) -> Self {
        let field = |name: &str| value.get(name).map(value_text).unwrap_or_default();

        let id = sanitize_key(&field("id"));
        Self {
            id: if id.is_empty() { index.to_string() } else { id },
            snippet_ref: field("shortcode"),
            category_filter: field("category"),
            position_key: field("position"),
            enabled: value.get("enabled").is_some_and(flag_is_set),
        }
    }
}

/// One rule row as submitted from the admin surface
///
/// Every field is optional. A field sent as JSON `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawRule {
    pub id: Option<Value>,
    #[serde(alias = "snippet_ref")]
    pub shortcode: Option<Value>,
    #[serde(alias = "category_filter")]
    pub category: Option<Value>,
    #[serde(alias = "position_key")]
    pub position: Option<Value>,
    pub enabled: Option<Value>,
}

impl RawRule {
    /// Sanitize into a placement rule
    ///
    /// Text fields lose all markup. `enabled` is true exactly when the row
    /// carried the flag at all, whatever its value (a checkbox that is not
    /// ticked is simply not submitted).
    pub fn sanitize(&self, index: usize) -> PlacementRule {
        let text = |field: &Option<Value>| {
            field
                .as_ref()
                .map(|v| sanitize_text_field(&value_text(v)))
                .unwrap_or_default()
        };

        let id = self
            .id
            .as_ref()
            .map(|v| sanitize_key(&value_text(v)))
            .unwrap_or_default();

        PlacementRule {
            id: if id.is_empty() { index.to_string() } else { id },
            snippet_ref: text(&self.shortcode),
            category_filter: text(&self.category),
            position_key: text(&self.position),
            enabled: self.enabled.is_some(),
        }
    }
}

/// Reference from a rule to a stored snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetRef<'a>(pub &'a str);

impl SnippetRef<'_> {
    /// Normalized snippet name, or `None` when the reference is blank
    ///
    /// `[sale-badge]`, `[sale-badge class="x"]` and `Sale Badge` all name
    /// the snippet `sale-badge`.
    pub fn snippet_name(&self) -> Option<String> {
        let trimmed = self.0.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .map(|s| s.split_whitespace().next().unwrap_or(""))
            .unwrap_or(trimmed);

        let name = slugify(inner);
        (!name.is_empty()).then_some(name)
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn flag_is_set(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}
