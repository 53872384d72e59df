//! Static table of insertion points on the product detail page

use crate::errors::{Result, WpsError};
use crate::model::{HookStyle, PositionEntry};

/// Reference positions: (key, label, hook, priority, style)
const REFERENCE_POSITIONS: [(&str, &str, &str, i32, HookStyle); 10] = [
    (
        "after_price",
        "Directly After Price",
        "woocommerce_get_price_html",
        10,
        HookStyle::Filter,
    ),
    (
        "after_title",
        "Directly After Title",
        "woocommerce_single_product_summary",
        6,
        HookStyle::Action,
    ),
    (
        "after_rating",
        "Directly After Rating",
        "woocommerce_single_product_summary",
        11,
        HookStyle::Action,
    ),
    (
        "before_add_to_cart",
        "Before Add to Cart Form",
        "woocommerce_before_add_to_cart_form",
        10,
        HookStyle::Action,
    ),
    (
        "after_add_to_cart",
        "After Add to Cart Form",
        "woocommerce_after_add_to_cart_form",
        10,
        HookStyle::Action,
    ),
    (
        "after_meta",
        "After Product Meta",
        "woocommerce_product_meta_end",
        10,
        HookStyle::Action,
    ),
    (
        "after_description",
        "After Description",
        "woocommerce_after_single_product_summary",
        5,
        HookStyle::Action,
    ),
    (
        "before_product_summary",
        "Before Product Summary",
        "woocommerce_before_single_product_summary",
        30,
        HookStyle::Action,
    ),
    (
        "after_product_summary",
        "After Product Summary",
        "woocommerce_after_single_product_summary",
        15,
        HookStyle::Action,
    ),
    (
        "inside_short_description",
        "Inside Short Description",
        "woocommerce_short_description",
        20,
        HookStyle::Action,
    ),
];

/// Read-only lookup of position key -> insertion point
///
/// Pure data: the dispatcher only reads `hook`, `priority` and `style`, so
/// adding an entry is enough to offer a new insertion point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionTable {
    entries: Vec<PositionEntry>,
}

impl PositionTable {
    /// Build a table from explicit entries
    ///
    /// A later entry with an already-used key replaces the earlier one in place.
    pub fn new(entries: impl IntoIterator<Item = PositionEntry>) -> Self {
        let mut table = Self {
            entries: Vec::new(),
        };
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    /// The ten reference positions
    pub fn reference() -> Self {
        Self::new(
            REFERENCE_POSITIONS
                .iter()
                .map(|&(key, label, hook, priority, style)| {
                    PositionEntry::new(key, label, hook, priority, style)
                }),
        )
    }

    /// Add or replace an entry, keeping table order
    pub fn insert(&mut self, entry: PositionEntry) {
        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// All entries in table order
    pub fn all(&self) -> &[PositionEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&PositionEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Like `get`, but an unknown key is an `UnknownPosition` error
    ///
    /// # Errors
    ///
    /// Returns `UnknownPosition` when the key is not in the table.
    pub fn require(&self, key: &str) -> Result<&PositionEntry> {
        self.get(key).ok_or_else(|| {
            WpsError::UnknownPosition {
                position_key: key.to_string(),
            }
            .into()
        })
    }

    /// Distinct hook names in order of first appearance
    pub fn hooks(&self) -> Vec<&str> {
        let mut hooks: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !hooks.contains(&entry.hook.as_str()) {
                hooks.push(&entry.hook);
            }
        }
        hooks
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PositionTable {
    fn default() -> Self {
        Self::reference()
    }
}
