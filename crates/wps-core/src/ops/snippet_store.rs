use std::collections::BTreeMap;
use std::time::Instant;

use serde_json::{Map, Value};
use wps_core_types::options::STORED_SNIPPETS;

use crate::errors::{Result, WpsError};
use crate::model::Snippet;
use crate::ops::OptionStore;
use crate::sanitize::{sanitize_html, slugify};
use crate::{log_op_end, log_op_start};

/// Snippet storage over the `wps_stored_shortcodes` option
///
/// The option is a JSON object mapping snippet name to sanitized markup.
/// Every write rewrites the whole object (last write wins).
pub struct SnippetStore<'a, S: OptionStore + ?Sized> {
    options: &'a S,
}

impl<'a, S: OptionStore + ?Sized> SnippetStore<'a, S> {
    pub fn new(options: &'a S) -> Self {
        Self { options }
    }

    /// Create or overwrite a snippet
    ///
    /// The name is slugified and the markup sanitized. Returns the stored
    /// snippet, or `None` when either is empty afterwards (nothing is written).
    ///
    /// # Errors
    ///
    /// Propagates persistence errors from the option store.
    pub fn put(&self, name: &str, html: &str) -> Result<Option<Snippet>> {
        let start = Instant::now();
        let name = slugify(name);
        let html = sanitize_html(html);

        if name.is_empty() || html.is_empty() {
            tracing::debug!(
                op = "put_snippet",
                snippet = %name,
                "snippet rejected: empty name or markup after sanitizing"
            );
            return Ok(None);
        }

        log_op_start!("put_snippet", snippet = %name);
        let mut all = self.load()?;
        all.insert(name.clone(), html.clone());
        self.save(&all)?;
        log_op_end!(
            "put_snippet",
            duration_ms = start.elapsed().as_millis() as u64,
            snippet = %name
        );

        Ok(Some(Snippet { name, html }))
    }

    /// Delete a snippet by (normalized) name
    ///
    /// Returns whether a snippet was removed.
    ///
    /// # Errors
    ///
    /// Propagates persistence errors from the option store.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let start = Instant::now();
        let name = slugify(name);

        let mut all = self.load()?;
        if all.remove(&name).is_none() {
            return Ok(false);
        }

        log_op_start!("delete_snippet", snippet = %name);
        self.save(&all)?;
        log_op_end!(
            "delete_snippet",
            duration_ms = start.elapsed().as_millis() as u64,
            snippet = %name
        );
        Ok(true)
    }

    /// All snippets as name -> markup, ordered by name
    ///
    /// # Errors
    ///
    /// Propagates read errors from the option store.
    pub fn get_all(&self) -> Result<BTreeMap<String, String>> {
        self.load()
    }

    /// Markup for one snippet, looked up by normalized name
    ///
    /// # Errors
    ///
    /// Propagates read errors from the option store.
    pub fn get(&self, name: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(&slugify(name)))
    }

    /// Like `get`, but a missing snippet is a `SnippetNotFound` error
    ///
    /// # Errors
    ///
    /// Returns `SnippetNotFound` when no snippet has this name.
    pub fn require(&self, name: &str) -> Result<Snippet> {
        let name = slugify(name);
        match self.load()?.remove(&name) {
            Some(html) => Ok(Snippet { name, html }),
            None => Err(WpsError::SnippetNotFound { name }.into()),
        }
    }

    /// All snippets as records, ordered by name
    ///
    /// # Errors
    ///
    /// Propagates read errors from the option store.
    pub fn snippets(&self) -> Result<Vec<Snippet>> {
        Ok(self
            .load()?
            .into_iter()
            .map(|(name, html)| Snippet { name, html })
            .collect())
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let stored = self.options.get_option(STORED_SNIPPETS)?;
        Ok(decode_snippets(stored))
    }

    fn save(&self, all: &BTreeMap<String, String>) -> Result<()> {
        let map: Map<String, Value> = all
            .iter()
            .map(|(name, html)| (name.clone(), Value::String(html.clone())))
            .collect();
        self.options
            .update_option(STORED_SNIPPETS, &Value::Object(map))
    }
}

/// Decode the stored snippet mapping
///
/// Entries whose value is not a non-empty string are dropped; a stored value
/// that is not an object decodes to an empty mapping.
fn decode_snippets(stored: Option<Value>) -> BTreeMap<String, String> {
    match stored {
        None | Some(Value::Null) => BTreeMap::new(),
        Some(Value::Object(map)) => map
            .into_iter()
            .filter_map(|(name, value)| match value {
                Value::String(html) if !html.trim().is_empty() => Some((name, html)),
                _ => {
                    tracing::warn!(
                        option_key = STORED_SNIPPETS,
                        snippet = %name,
                        "dropping snippet entry without markup"
                    );
                    None
                }
            })
            .collect(),
        Some(other) => {
            tracing::warn!(
                option_key = STORED_SNIPPETS,
                found = %json_kind(&other),
                "stored snippets are not an object; treating as empty"
            );
            BTreeMap::new()
        }
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
