//! Placement dispatch
//!
//! Per page render, evaluate the Rule Set against the current product and
//! register one hook callback per active rule. Evaluation is stateless: it
//! reads both stores, never writes them, and nothing survives the request
//! except the callbacks handed to the registry.

use std::time::Instant;

use wps_core_types::markup::ALL_CATEGORIES;

use crate::errors::Result;
use crate::hooks::HookRegistry;
use crate::model::{HookStyle, PlacementRule, PositionEntry, ProductContext, SnippetRef};
use crate::ops::{OptionStore, RuleSet, SnippetStore};
use crate::positions::PositionTable;
use crate::render::wrap_snippet;
use crate::shortcode::ShortcodeRegistry;
use crate::{log_op_end, log_op_error, log_op_start};

/// An active rule resolved against the position table and snippet store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub rule_id: String,
    pub position: PositionEntry,

    /// Wrapper markup around the expanded snippet
    pub markup: String,
}

/// Why a rule did not produce a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Disabled,
    SnippetMissing,
    CategoryMismatch,
    UnknownPosition,
    EmptyOutput,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Disabled => "disabled",
            SkipReason::SnippetMissing => "snippet_missing",
            SkipReason::CategoryMismatch => "category_mismatch",
            SkipReason::UnknownPosition => "unknown_position",
            SkipReason::EmptyOutput => "empty_output",
        }
    }
}

/// Matches placement rules to the current product and registers render callbacks
pub struct PlacementDispatcher<'a, S: OptionStore + ?Sized> {
    options: &'a S,
    positions: &'a PositionTable,
}

impl<'a, S: OptionStore + ?Sized> PlacementDispatcher<'a, S> {
    pub fn new(options: &'a S, positions: &'a PositionTable) -> Self {
        Self { options, positions }
    }

    /// Register callbacks for every rule active on this render
    ///
    /// Outside the detail view nothing is registered. Storage failures are
    /// logged and leave the page without injected content; they are never
    /// returned. Returns the number of callbacks registered.
    pub fn prepare(
        &self,
        product: &ProductContext,
        is_detail_view: bool,
        hooks: &mut HookRegistry,
    ) -> usize {
        if !is_detail_view {
            return 0;
        }

        let start = Instant::now();
        log_op_start!("prepare", product_id = %product.id);

        let placements = match self.placements(product) {
            Ok(placements) => placements,
            Err(err) => {
                log_op_error!(
                    "prepare",
                    err,
                    duration_ms = start.elapsed().as_millis() as u64,
                    product_id = %product.id
                );
                return 0;
            }
        };

        let registered = placements.len();
        for placement in placements {
            register(hooks, placement);
        }

        log_op_end!(
            "prepare",
            duration_ms = start.elapsed().as_millis() as u64,
            product_id = %product.id,
            registered = registered
        );
        registered
    }

    /// Active placements for a detail-view render of `product`, in Rule Set order
    ///
    /// # Errors
    ///
    /// Propagates read errors from the option store.
    pub fn placements(&self, product: &ProductContext) -> Result<Vec<Placement>> {
        let rules = RuleSet::new(self.options).get_all()?;
        let snippets = SnippetStore::new(self.options).snippets()?;
        let shortcodes = ShortcodeRegistry::from_snippets(snippets);

        let mut placements = Vec::new();
        for rule in &rules {
            match self.evaluate(rule, product, &shortcodes) {
                Ok(placement) => placements.push(placement),
                Err(reason) => {
                    tracing::debug!(
                        op = "prepare",
                        rule_id = %rule.id,
                        position_key = %rule.position_key,
                        skip = reason.as_str(),
                        "rule inactive"
                    );
                }
            }
        }
        Ok(placements)
    }

    fn evaluate(
        &self,
        rule: &PlacementRule,
        product: &ProductContext,
        shortcodes: &ShortcodeRegistry,
    ) -> std::result::Result<Placement, SkipReason> {
        if !rule.enabled {
            return Err(SkipReason::Disabled);
        }

        let name = SnippetRef(&rule.snippet_ref)
            .snippet_name()
            .filter(|name| shortcodes.is_registered(name))
            .ok_or(SkipReason::SnippetMissing)?;

        if !category_matches(&rule.category_filter, product) {
            return Err(SkipReason::CategoryMismatch);
        }

        let position = self
            .positions
            .get(&rule.position_key)
            .ok_or(SkipReason::UnknownPosition)?;

        // Only the rule's own tag is expanded; tags inside the snippet stay literal.
        let content = shortcodes.expand(&format!("[{}]", name));
        let markup =
            wrap_snippet(&position.key, &rule.id, &content).ok_or(SkipReason::EmptyOutput)?;

        Ok(Placement {
            rule_id: rule.id.clone(),
            position: position.clone(),
            markup,
        })
    }
}

/// `"all"` matches everything; otherwise exact slug membership
pub fn category_matches(filter: &str, product: &ProductContext) -> bool {
    filter == ALL_CATEGORIES || product.has_category(filter)
}

fn register(hooks: &mut HookRegistry, placement: Placement) {
    let Placement {
        position, markup, ..
    } = placement;

    // The render-time context can differ from the one seen at prepare time,
    // so callbacks check the detail view again before emitting.
    match position.style {
        HookStyle::Filter => {
            hooks.add_filter(&position.hook, position.priority, move |ctx, value| {
                if ctx.is_detail_view {
                    value + &markup
                } else {
                    value
                }
            });
        }
        HookStyle::Action => {
            hooks.add_action(&position.hook, position.priority, move |ctx, out| {
                if ctx.is_detail_view {
                    out.push_str(&markup);
                }
            });
        }
    }
}
