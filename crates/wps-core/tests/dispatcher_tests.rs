#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{detail, enabled_rule, prepare_detail, raw, store_with_sale_badge};
use serde_json::json;
use wps_core::{
    HookRegistry, HookStyle, PageContext, PlacementDispatcher, PositionEntry, PositionTable,
    ProductContext, RuleSet, SnippetStore,
};

const SUMMARY: &str = "woocommerce_single_product_summary";
const PRICE: &str = "woocommerce_get_price_html";
const SALE_AFTER_TITLE: &str =
    r#"<div class="wps-display wps-position-after_title wps-rule-r1"><b>Sale!</b></div>"#;

#[test]
fn test_scenario_matching_category_renders_after_title() {
    let options = store_with_sale_badge();
    let p1 = ProductContext::new("p1", ["shoes"]);

    let hooks = prepare_detail(
        &options,
        &[enabled_rule("r1", "sale-badge", "shoes", "after_title")],
        &p1,
    );

    assert_eq!(hooks.do_action(SUMMARY, &detail(&p1)), SALE_AFTER_TITLE);
}

#[test]
fn test_scenario_other_category_renders_nothing() {
    let options = store_with_sale_badge();
    let p2 = ProductContext::new("p2", ["hats"]);

    let hooks = prepare_detail(
        &options,
        &[enabled_rule("r1", "sale-badge", "shoes", "after_title")],
        &p2,
    );

    assert!(hooks.is_empty());
    assert_eq!(hooks.do_action(SUMMARY, &detail(&p2)), "");
}

#[test]
fn test_scenario_disabled_rule_renders_nothing() {
    let options = store_with_sale_badge();
    let p1 = ProductContext::new("p1", ["shoes"]);

    let hooks = prepare_detail(
        &options,
        &[raw(json!({
            "id": "r1",
            "shortcode": "sale-badge",
            "category": "shoes",
            "position": "after_title"
        }))],
        &p1,
    );

    assert!(hooks.is_empty());
    assert_eq!(hooks.do_action(SUMMARY, &detail(&p1)), "");
}

#[test]
fn test_scenario_after_price_appends_to_price_html() {
    let options = store_with_sale_badge();
    let p1 = ProductContext::new("p1", ["shoes"]);

    let hooks = prepare_detail(
        &options,
        &[enabled_rule("r1", "sale-badge", "shoes", "after_price")],
        &p1,
    );

    let price = r#"<span class="price">$40.00</span>"#;
    let filtered = hooks.apply_filters(PRICE, &detail(&p1), price.to_string());

    assert!(filtered.starts_with(price));
    assert!(filtered.contains(
        r#"<div class="wps-display wps-position-after_price wps-rule-r1"><b>Sale!</b></div>"#
    ));
}

#[test]
fn test_price_filter_rechecks_detail_view_at_render_time() {
    let options = store_with_sale_badge();
    let p1 = ProductContext::new("p1", ["shoes"]);

    let hooks = prepare_detail(
        &options,
        &[enabled_rule("r1", "sale-badge", "all", "after_price")],
        &p1,
    );

    // e.g. a related-products loop rendered inside the detail page
    let listing = PageContext::listing(p1.clone());
    let price = "<span>$1</span>".to_string();
    assert_eq!(hooks.apply_filters(PRICE, &listing, price.clone()), price);
}

#[test]
fn test_no_rules_outside_detail_view() {
    let options = store_with_sale_badge();
    RuleSet::new(&options)
        .sanitize_and_replace(&[enabled_rule("r1", "sale-badge", "all", "after_title")])
        .unwrap();

    let positions = PositionTable::reference();
    let mut hooks = HookRegistry::new();
    let registered = PlacementDispatcher::new(&options, &positions).prepare(
        &ProductContext::new("p1", ["shoes"]),
        false,
        &mut hooks,
    );

    assert_eq!(registered, 0);
    assert!(hooks.is_empty());
}

#[test]
fn test_all_matches_every_product() {
    let options = store_with_sale_badge();
    let rules = [enabled_rule("r1", "sale-badge", "all", "after_title")];

    for product in [
        ProductContext::new("p1", ["shoes"]),
        ProductContext::new("p2", Vec::<String>::new()),
        ProductContext::new("p3", ["hats", "winter"]),
    ] {
        let hooks = prepare_detail(&options, &rules, &product);
        assert_eq!(hooks.do_action(SUMMARY, &detail(&product)), SALE_AFTER_TITLE);
    }
}

#[test]
fn test_category_match_is_exact_slug() {
    let options = store_with_sale_badge();
    let rules = [enabled_rule("r1", "sale-badge", "shoes", "after_title")];

    for product in [
        ProductContext::new("p1", ["running-shoes"]),
        ProductContext::new("p2", ["shoe"]),
        ProductContext::new("p3", ["Shoes"]),
    ] {
        let hooks = prepare_detail(&options, &rules, &product);
        assert!(hooks.is_empty(), "{:?} should not match", product.categories);
    }
}

#[test]
fn test_deleted_snippet_renders_nothing() {
    let options = store_with_sale_badge();
    let rules = [enabled_rule("r1", "sale-badge", "all", "after_title")];
    SnippetStore::new(&options).delete("sale-badge").unwrap();

    let product = ProductContext::new("p1", ["shoes"]);
    let hooks = prepare_detail(&options, &rules, &product);
    assert!(hooks.is_empty());
    assert_eq!(hooks.do_action(SUMMARY, &detail(&product)), "");
}

#[test]
fn test_unknown_position_and_blank_fields_are_inactive() {
    let options = store_with_sale_badge();
    let product = ProductContext::new("p1", ["shoes"]);

    let hooks = prepare_detail(
        &options,
        &[
            enabled_rule("r1", "sale-badge", "all", "nowhere"),
            enabled_rule("r2", "", "all", "after_title"),
            enabled_rule("r3", "sale-badge", "", "after_title"),
            raw(json!({ "enabled": "1" })),
        ],
        &product,
    );

    assert!(hooks.is_empty());
}

#[test]
fn test_same_position_renders_in_rule_order() {
    let options = store_with_sale_badge();
    SnippetStore::new(&options)
        .put("ship", "<i>Ships today</i>")
        .unwrap();
    let product = ProductContext::new("p1", ["shoes"]);

    let hooks = prepare_detail(
        &options,
        &[
            enabled_rule("second", "ship", "all", "after_meta"),
            enabled_rule("first", "sale-badge", "all", "after_meta"),
        ],
        &product,
    );

    let out = hooks.do_action("woocommerce_product_meta_end", &detail(&product));
    let ship = out.find("wps-rule-second").unwrap();
    let sale = out.find("wps-rule-first").unwrap();
    assert!(ship < sale, "rule order must be preserved: {}", out);
}

#[test]
fn test_positions_sharing_a_hook_follow_priority() {
    let options = store_with_sale_badge();
    let product = ProductContext::new("p1", ["shoes"]);

    let hooks = prepare_detail(
        &options,
        &[
            enabled_rule("rating", "sale-badge", "all", "after_rating"),
            enabled_rule("title", "sale-badge", "all", "after_title"),
        ],
        &product,
    );

    let out = hooks.do_action(SUMMARY, &detail(&product));
    let title = out.find("wps-position-after_title").unwrap();
    let rating = out.find("wps-position-after_rating").unwrap();
    assert!(title < rating);
}

#[test]
fn test_rule_tag_expands_once_and_nested_tags_stay_literal() {
    let options = store_with_sale_badge();
    SnippetStore::new(&options)
        .put("combo", "<p>[sale-badge] today</p>")
        .unwrap();
    let product = ProductContext::new("p1", ["shoes"]);

    let hooks = prepare_detail(
        &options,
        &[enabled_rule("c", "[combo]", "all", "after_add_to_cart")],
        &product,
    );

    assert_eq!(
        hooks.do_action("woocommerce_after_add_to_cart_form", &detail(&product)),
        r#"<div class="wps-display wps-position-after_add_to_cart wps-rule-c"><p>[sale-badge] today</p></div>"#
    );
}

#[test]
fn test_bare_and_bracketed_references_render_alike() {
    let options = store_with_sale_badge();
    let product = ProductContext::new("p1", ["shoes"]);

    let hooks = prepare_detail(
        &options,
        &[
            enabled_rule("bare", "sale-badge", "all", "after_meta"),
            enabled_rule("tag", "[sale-badge]", "all", "after_meta"),
        ],
        &product,
    );

    assert_eq!(
        hooks.do_action("woocommerce_product_meta_end", &detail(&product)),
        concat!(
            r#"<div class="wps-display wps-position-after_meta wps-rule-bare"><b>Sale!</b></div>"#,
            r#"<div class="wps-display wps-position-after_meta wps-rule-tag"><b>Sale!</b></div>"#
        )
    );
}

#[test]
fn test_storage_failure_never_fails_the_render() {
    let positions = PositionTable::reference();
    let mut hooks = HookRegistry::new();
    let registered = PlacementDispatcher::new(&common::FailingOptionStore, &positions).prepare(
        &ProductContext::new("p1", ["shoes"]),
        true,
        &mut hooks,
    );

    assert_eq!(registered, 0);
    assert!(hooks.is_empty());
}

#[test]
fn test_extended_table_needs_no_dispatcher_change() {
    let options = store_with_sale_badge();
    RuleSet::new(&options)
        .sanitize_and_replace(&[enabled_rule("t", "sale-badge", "all", "after_tabs")])
        .unwrap();

    let mut positions = PositionTable::reference();
    positions.insert(PositionEntry::new(
        "after_tabs",
        "After Tabs",
        "woocommerce_after_tabs",
        50,
        HookStyle::Action,
    ));

    let product = ProductContext::new("p1", ["shoes"]);
    let mut hooks = HookRegistry::new();
    PlacementDispatcher::new(&options, &positions).prepare(&product, true, &mut hooks);

    assert!(hooks
        .do_action("woocommerce_after_tabs", &detail(&product))
        .contains("wps-position-after_tabs wps-rule-t"));
}

#[test]
fn test_placements_report_resolved_positions() {
    let options = store_with_sale_badge();
    RuleSet::new(&options)
        .sanitize_and_replace(&[
            enabled_rule("r1", "sale-badge", "shoes", "after_title"),
            enabled_rule("r2", "sale-badge", "hats", "after_title"),
            enabled_rule("r3", "sale-badge", "all", "after_price"),
        ])
        .unwrap();

    let positions = PositionTable::reference();
    let placements = PlacementDispatcher::new(&options, &positions)
        .placements(&ProductContext::new("p1", ["shoes"]))
        .unwrap();

    let summary: Vec<_> = placements
        .iter()
        .map(|p| (p.rule_id.as_str(), p.position.key.as_str(), p.position.style))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("r1", "after_title", HookStyle::Action),
            ("r3", "after_price", HookStyle::Filter),
        ]
    );
    assert_eq!(placements[0].markup, SALE_AFTER_TITLE);
}
