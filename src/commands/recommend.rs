//! Recommendation commands: content, behavior, hybrid

use super::dispatch::CommandContext;
use super::format::{output_by_format_result, print_empty, print_json, product_line};
use shoprec_core::error::Result;

pub fn content(ctx: &CommandContext, product: &str, n: usize) -> Result<()> {
    let engine = ctx.open_engine()?;
    let recs = engine.get_content_recommendations(product, n);
    tracing::debug!(product, results = recs.len(), "content recommendations");

    if recs.is_empty() {
        print_empty(
            ctx.cli.format,
            ctx.cli.quiet,
            &format!("No recommendations for \"{}\"", product),
        );
    }

    output_by_format_result!(ctx.cli.format,
        json => print_json(&recs),
        human => {
            for (rank, rec) in recs.iter().enumerate() {
                println!("{}. {}  score {:.4}", rank + 1, product_line(&rec.product), rec.score);
            }
        }
    )
}

pub fn behavior(ctx: &CommandContext, user: &str, n: usize) -> Result<()> {
    let engine = ctx.open_engine()?;
    let recs = engine.get_behavior_recommendations(user, n)?;
    tracing::debug!(user, results = recs.len(), "behavior recommendations");

    output_by_format_result!(ctx.cli.format,
        json => print_json(&recs),
        human => {
            for (rank, product) in recs.iter().enumerate() {
                println!("{}. {}", rank + 1, product_line(product));
            }
        }
    )
}

pub fn hybrid(ctx: &CommandContext, user: &str, product: &str, n: usize) -> Result<()> {
    let engine = ctx.open_engine()?;
    let items = engine.get_hybrid_recommendations(user, product, n)?;

    output_by_format_result!(ctx.cli.format,
        json => print_json(&items),
        human => {
            for (rank, item) in items.iter().enumerate() {
                match item.score {
                    Some(score) => println!(
                        "{}. {}  [{}] score {:.4}",
                        rank + 1,
                        product_line(&item.product),
                        item.source,
                        score
                    ),
                    None => println!(
                        "{}. {}  [{}]",
                        rank + 1,
                        product_line(&item.product),
                        item.source
                    ),
                }
            }
        }
    )
}
