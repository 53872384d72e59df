//! Render command
//!
//! Usage: wps render [--category <SLUG>]... [--product-id <ID>] [--listing] [--price-html <HTML>]
//!
//! Prepares the dispatcher for a synthetic product and prints the output of
//! every insertion point that produced markup, one `hook: markup` line each.

use clap::Args;
use wps_core::{HookRegistry, PageContext, PlacementDispatcher, PositionTable, ProductContext};

use crate::config::Config;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Category slug of the product (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Product identifier
    #[arg(long, default_value = "preview")]
    pub product_id: String,

    /// Render as a listing instead of the detail view
    #[arg(long)]
    pub listing: bool,

    /// Price markup passed through filter-style positions
    #[arg(long, default_value = "")]
    pub price_html: String,
}

/// Execute render command
pub fn execute(args: RenderArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = config.open_store()?;
    let positions = PositionTable::reference();
    let product = ProductContext::new(args.product_id, args.categories);
    let is_detail_view = !args.listing;

    let mut hooks = HookRegistry::new();
    PlacementDispatcher::new(&store, &positions).prepare(&product, is_detail_view, &mut hooks);

    let ctx = PageContext {
        product,
        is_detail_view,
    };

    for hook in positions.hooks() {
        let is_filter = positions
            .all()
            .iter()
            .any(|entry| entry.hook == hook && entry.is_filter_style());

        let output = if is_filter {
            let filtered = hooks.apply_filters(hook, &ctx, args.price_html.clone());
            if filtered == args.price_html {
                continue;
            }
            filtered
        } else {
            hooks.do_action(hook, &ctx)
        };

        if !output.is_empty() {
            println!("{}: {}", hook, output);
        }
    }

    Ok(())
}
