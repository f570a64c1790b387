//! Interaction log commands: log, count, history, activity

use serde_json::json;

use super::dispatch::CommandContext;
use super::format::{output_by_format_result, print_empty, print_json};
use shoprec_core::db::{InteractionStore, InteractionType};
use shoprec_core::error::{Result, ShoprecError};

pub fn log(
    ctx: &CommandContext,
    user: &str,
    product_id: i64,
    interaction_type: InteractionType,
) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let product = catalog
        .get_by_id(product_id)
        .ok_or(ShoprecError::ProductNotFound { id: product_id })?;

    let store = ctx.open_store()?;
    store.log(user, product.id, &product.name, interaction_type)?;
    let total = store.total_count(user)?;

    output_by_format_result!(ctx.cli.format,
        json => print_json(&json!({
            "user_id": user,
            "product_id": product_id,
            "interaction_type": interaction_type,
            "total_interactions": total,
        })),
        human => {
            if !ctx.cli.quiet {
                println!("Logged {} of product {} for {} ({} total)", interaction_type, product_id, user, total);
            }
        }
    )
}

pub fn count(ctx: &CommandContext, user: &str) -> Result<()> {
    let total = ctx.open_store()?.total_count(user)?;

    output_by_format_result!(ctx.cli.format,
        json => print_json(&json!({ "user_id": user, "total_interactions": total })),
        human => {
            println!("{}", total);
        }
    )
}

pub fn history(ctx: &CommandContext, user: &str) -> Result<()> {
    let entries = ctx.open_store()?.history(user)?;

    if entries.is_empty() {
        print_empty(ctx.cli.format, ctx.cli.quiet, &format!("No history for {}", user));
    }

    output_by_format_result!(ctx.cli.format,
        json => print_json(&entries),
        human => {
            for entry in &entries {
                println!("[{}] {}  x{}", entry.product_id, entry.product_name, entry.count);
            }
        }
    )
}

pub fn activity(ctx: &CommandContext, user: &str) -> Result<()> {
    let store = ctx.open_store()?;
    let entries = store.activity(user)?;
    let summary = store.activity_summary(user)?;

    output_by_format_result!(ctx.cli.format,
        json => print_json(&json!({
            "user_id": user,
            "summary": summary,
            "activity": entries,
        })),
        human => {
            println!(
                "{} views, {} add to cart",
                summary.views, summary.add_to_cart
            );
            for entry in &entries {
                println!(
                    "{}  {}  x{}  {}",
                    entry.product_name,
                    entry.interaction_type,
                    entry.count,
                    entry.last_interaction.as_deref().unwrap_or("-")
                );
            }
        }
    )
}
