use serde_json::{json, Value};
use wps_core::errors::{ExError, ExErrorKind, Result};
use wps_core::{
    HookRegistry, MemoryOptionStore, OptionStore, PageContext, PlacementDispatcher, PositionTable,
    ProductContext, RawRule, RuleSet, SnippetStore,
};

/// Option store holding a `sale-badge` snippet
#[allow(dead_code)]
pub fn store_with_sale_badge() -> MemoryOptionStore {
    let options = MemoryOptionStore::new();
    SnippetStore::new(&options)
        .put("sale-badge", "<b>Sale!</b>")
        .unwrap()
        .expect("sale-badge should be stored");
    options
}

/// Build a raw rule row from JSON
#[allow(dead_code)]
pub fn raw(value: Value) -> RawRule {
    serde_json::from_value(value).expect("valid raw rule")
}

/// Enabled rule row
#[allow(dead_code)]
pub fn enabled_rule(id: &str, snippet: &str, category: &str, position: &str) -> RawRule {
    raw(json!({
        "id": id,
        "shortcode": snippet,
        "category": category,
        "position": position,
        "enabled": "1"
    }))
}

/// Save rules, prepare a detail-view render of `product` and return the registry
#[allow(dead_code)]
pub fn prepare_detail(
    options: &MemoryOptionStore,
    rules: &[RawRule],
    product: &ProductContext,
) -> HookRegistry {
    RuleSet::new(options).sanitize_and_replace(rules).unwrap();
    let positions = PositionTable::reference();
    let mut hooks = HookRegistry::new();
    PlacementDispatcher::new(options, &positions).prepare(product, true, &mut hooks);
    hooks
}

#[allow(dead_code)]
pub fn detail(product: &ProductContext) -> PageContext {
    PageContext::detail(product.clone())
}

/// Option store whose every call fails
#[allow(dead_code)]
pub struct FailingOptionStore;

impl OptionStore for FailingOptionStore {
    fn get_option(&self, key: &str) -> Result<Option<Value>> {
        Err(ExError::new(ExErrorKind::Persistence)
            .with_op("get_option")
            .with_entity_id(key)
            .with_message("backend unavailable"))
    }

    fn update_option(&self, key: &str, _value: &Value) -> Result<()> {
        Err(ExError::new(ExErrorKind::Persistence)
            .with_op("update_option")
            .with_entity_id(key)
            .with_message("backend unavailable"))
    }

    fn delete_option(&self, key: &str) -> Result<()> {
        Err(ExError::new(ExErrorKind::Persistence)
            .with_op("delete_option")
            .with_entity_id(key)
            .with_message("backend unavailable"))
    }
}
