use std::time::Instant;

use serde_json::Value;
use wps_core_types::options::DISPLAY_RULES;

use crate::errors::{ExError, ExErrorKind, Result};
use crate::model::{PlacementRule, RawRule};
use crate::ops::snippet_store::json_kind;
use crate::ops::OptionStore;
use crate::sanitize::sanitize_key;
use crate::{log_op_end, log_op_error, log_op_start};

/// Ordered placement rules over the `wps_display_rules` option
///
/// The rule list is only ever replaced wholesale; there is no partial update
/// apart from removing a rule by id.
pub struct RuleSet<'a, S: OptionStore + ?Sized> {
    options: &'a S,
}

impl<'a, S: OptionStore + ?Sized> RuleSet<'a, S> {
    pub fn new(options: &'a S) -> Self {
        Self { options }
    }

    /// Sanitize the submitted rows and replace the persisted Rule Set
    ///
    /// One rule per submitted row, in submission order. Incomplete rows are
    /// kept as they are; no position or snippet lookup happens here.
    ///
    /// # Errors
    ///
    /// Propagates persistence errors from the option store.
    pub fn sanitize_and_replace(&self, raw_rules: &[RawRule]) -> Result<Vec<PlacementRule>> {
        let start = Instant::now();
        log_op_start!("save_rules", rule_count = raw_rules.len());

        let rules: Vec<PlacementRule> = raw_rules
            .iter()
            .enumerate()
            .map(|(index, raw)| raw.sanitize(index))
            .collect();

        if let Err(err) = self.save(&rules) {
            log_op_error!(
                "save_rules",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            return Err(err);
        }

        log_op_end!(
            "save_rules",
            duration_ms = start.elapsed().as_millis() as u64,
            rule_count = rules.len()
        );
        Ok(rules)
    }

    /// All rules in stored order
    ///
    /// # Errors
    ///
    /// Propagates read errors from the option store.
    pub fn get_all(&self) -> Result<Vec<PlacementRule>> {
        let stored = self.options.get_option(DISPLAY_RULES)?;
        Ok(decode_rules(stored))
    }

    /// Remove every rule carrying this id
    ///
    /// The id is normalized the way ids are at save time, so `R1` removes
    /// the rule stored as `r1`. Returns whether anything was removed; the
    /// remaining rules keep their order and ids.
    ///
    /// # Errors
    ///
    /// Propagates persistence errors from the option store.
    pub fn remove(&self, rule_id: &str) -> Result<bool> {
        let rule_id = sanitize_key(rule_id);
        if rule_id.is_empty() {
            return Ok(false);
        }

        let mut rules = self.get_all()?;
        let before = rules.len();
        rules.retain(|rule| rule.id != rule_id);

        if rules.len() == before {
            return Ok(false);
        }

        self.save(&rules)?;
        tracing::info!(op = "remove_rule", rule_id = %rule_id, "rule removed");
        Ok(true)
    }

    fn save(&self, rules: &[PlacementRule]) -> Result<()> {
        let value = serde_json::to_value(rules).map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_op("save_rules")
                .with_message(e.to_string())
        })?;
        self.options.update_option(DISPLAY_RULES, &value)
    }
}

/// Decode the stored rule list
///
/// A missing option is an empty Rule Set; anything other than an array is
/// logged and treated as empty.
fn decode_rules(stored: Option<Value>) -> Vec<PlacementRule> {
    match stored {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| PlacementRule::decode(index, item))
            .collect(),
        Some(other) => {
            tracing::warn!(
                option_key = DISPLAY_RULES,
                found = %json_kind(&other),
                "stored rules are not an array; treating as empty"
            );
            Vec::new()
        }
    }
}
