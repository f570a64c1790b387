//! Command dispatch logic for shoprec

mod context;
mod macros;

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use shoprec_core::bail_usage;
use shoprec_core::db::InteractionType;
use shoprec_core::error::Result;

pub use context::CommandContext;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        println!("shoprec {}", env!("CARGO_PKG_VERSION"));
        println!("Run `shoprec --help` for usage.");
        return Ok(());
    };

    if let Some(user) = command_user(command) {
        if user.trim().is_empty() {
            bail_usage!("--user must not be empty");
        }
    }

    let ctx = CommandContext::new(cli, start)?;

    match command {
        Commands::Content { product, n } => {
            commands::recommend::content(&ctx, product, ctx.count(*n))
        }
        Commands::Behavior { user, n } => commands::recommend::behavior(&ctx, user, ctx.count(*n)),
        Commands::Hybrid { user, product, n } => {
            commands::recommend::hybrid(&ctx, user, product, ctx.count(*n))
        }
        Commands::Log {
            user,
            product_id,
            interaction_type,
        } => {
            let kind: InteractionType = interaction_type.parse()?;
            commands::interactions::log(&ctx, user, *product_id, kind)
        }
        Commands::Count { user } => commands::interactions::count(&ctx, user),
        Commands::History { user } => commands::interactions::history(&ctx, user),
        Commands::Activity { user } => commands::interactions::activity(&ctx, user),
        Commands::Products { category } => {
            commands::catalog::products(&ctx, category.as_deref())
        }
        Commands::Categories => commands::catalog::categories(&ctx),
    }
}

fn command_user(command: &Commands) -> Option<&str> {
    match command {
        Commands::Behavior { user, .. }
        | Commands::Hybrid { user, .. }
        | Commands::Log { user, .. }
        | Commands::Count { user }
        | Commands::History { user }
        | Commands::Activity { user } => Some(user),
        Commands::Content { .. } | Commands::Products { .. } | Commands::Categories => None,
    }
}
