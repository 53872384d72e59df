//! Insertion-point registry
//!
//! Named hooks with priority-ordered callbacks, in the two flavours a page
//! pipeline needs: actions append output at a point, filters transform a
//! value flowing through a point.

use std::collections::HashMap;

use crate::model::PageContext;

/// Callback emitting markup at an action hook
pub type ActionCallback = Box<dyn Fn(&PageContext, &mut String)>;

/// Callback transforming the value passing through a filter hook
pub type FilterCallback = Box<dyn Fn(&PageContext, String) -> String>;

struct Registered<F> {
    priority: i32,
    callback: F,
}

/// Ordered callback lists keyed by hook name
///
/// Callbacks run in ascending priority; equal priorities run in
/// registration order.
#[derive(Default)]
pub struct HookRegistry {
    actions: HashMap<String, Vec<Registered<ActionCallback>>>,
    filters: HashMap<String, Vec<Registered<FilterCallback>>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action callback
    pub fn add_action<F>(&mut self, hook: &str, priority: i32, callback: F)
    where
        F: Fn(&PageContext, &mut String) + 'static,
    {
        insert_ordered(
            self.actions.entry(hook.to_string()).or_default(),
            priority,
            Box::new(callback),
        );
    }

    /// Register a filter callback
    pub fn add_filter<F>(&mut self, hook: &str, priority: i32, callback: F)
    where
        F: Fn(&PageContext, String) -> String + 'static,
    {
        insert_ordered(
            self.filters.entry(hook.to_string()).or_default(),
            priority,
            Box::new(callback),
        );
    }

    /// Run every action registered at `hook` and return their combined output
    pub fn do_action(&self, hook: &str, ctx: &PageContext) -> String {
        let mut out = String::new();
        if let Some(callbacks) = self.actions.get(hook) {
            for registered in callbacks {
                (registered.callback)(ctx, &mut out);
            }
        }
        out
    }

    /// Pass `value` through every filter registered at `hook`
    pub fn apply_filters(&self, hook: &str, ctx: &PageContext, value: String) -> String {
        match self.filters.get(hook) {
            Some(callbacks) => callbacks
                .iter()
                .fold(value, |acc, registered| (registered.callback)(ctx, acc)),
            None => value,
        }
    }

    /// Whether any action or filter is registered at `hook`
    pub fn has_hook(&self, hook: &str) -> bool {
        self.count(hook) > 0
    }

    /// Number of callbacks (actions and filters) registered at `hook`
    pub fn count(&self, hook: &str) -> usize {
        self.actions.get(hook).map_or(0, Vec::len) + self.filters.get(hook).map_or(0, Vec::len)
    }

    /// Total number of registered callbacks
    pub fn len(&self) -> usize {
        self.actions.values().map(Vec::len).sum::<usize>()
            + self.filters.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("actions", &priorities(&self.actions))
            .field("filters", &priorities(&self.filters))
            .finish()
    }
}

/// Hook name -> registered priorities, sorted by hook name
fn priorities<F>(map: &HashMap<String, Vec<Registered<F>>>) -> Vec<(String, Vec<i32>)> {
    let mut hooks: Vec<_> = map
        .iter()
        .map(|(hook, list)| (hook.clone(), list.iter().map(|r| r.priority).collect()))
        .collect();
    hooks.sort();
    hooks
}

/// Insert after every callback with priority <= `priority`
fn insert_ordered<F>(list: &mut Vec<Registered<F>>, priority: i32, callback: F) {
    let at = list.partition_point(|r| r.priority <= priority);
    list.insert(at, Registered { priority, callback });
}
