//! Catalog listing commands

use super::dispatch::CommandContext;
use super::format::{output_by_format_result, print_json, product_line};
use shoprec_core::error::Result;

pub fn products(ctx: &CommandContext, category: Option<&str>) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let products: Vec<_> = match category {
        Some(category) => catalog.products_in_category(category),
        None => catalog.products().iter().collect(),
    };

    output_by_format_result!(ctx.cli.format,
        json => print_json(&products),
        human => {
            for product in &products {
                println!("{}", product_line(product));
            }
        }
    )
}

pub fn categories(ctx: &CommandContext) -> Result<()> {
    let catalog = ctx.open_catalog()?;

    output_by_format_result!(ctx.cli.format,
        json => print_json(catalog.categories()),
        human => {
            for category in catalog.categories() {
                println!("{} ({})", category, catalog.indices_in_category(category).len());
            }
        }
    )
}
