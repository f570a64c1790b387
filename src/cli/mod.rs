//! CLI argument parsing for shoprec
//!
//! Global flags: --catalog, --db, --seed, --format, --quiet, --verbose

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Shoprec - product recommendations from a CSV catalog
#[derive(Parser, Debug)]
#[command(name = "shoprec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Product catalog CSV (overrides the config file)
    #[arg(long, global = true, env = "SHOPREC_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Interaction database (overrides the config file)
    #[arg(long, global = true, env = "SHOPREC_DB")]
    pub db: Option<PathBuf>,

    /// Seed for reproducible sampling
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "shoprec_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Products most similar to a product
    Content {
        /// Exact product name
        product: String,

        /// Number of recommendations
        #[arg(short = 'n', long = "count")]
        n: Option<usize>,
    },

    /// Products picked from a user's category interests
    Behavior {
        /// User identifier
        #[arg(long, short)]
        user: String,

        /// Number of recommendations
        #[arg(short = 'n', long = "count")]
        n: Option<usize>,
    },

    /// Content recommendations followed by behavior recommendations
    Hybrid {
        /// User identifier
        #[arg(long, short)]
        user: String,

        /// Exact product name
        product: String,

        /// Number of recommendations
        #[arg(short = 'n', long = "count")]
        n: Option<usize>,
    },

    /// Record a user action on a product
    Log {
        /// User identifier
        #[arg(long, short)]
        user: String,

        /// Catalog product id
        #[arg(long)]
        product_id: i64,

        /// Interaction type (view, add_to_cart)
        #[arg(long = "type", short = 't', default_value = "view")]
        interaction_type: String,
    },

    /// Number of interactions recorded for a user
    Count {
        #[arg(long, short)]
        user: String,
    },

    /// Products a user interacted with, most frequent first
    History {
        #[arg(long, short)]
        user: String,
    },

    /// Interaction counts per product and type, newest first
    Activity {
        #[arg(long, short)]
        user: String,
    },

    /// List catalog products
    Products {
        /// Only products in this category
        #[arg(long, short)]
        category: Option<String>,
    },

    /// List catalog categories
    Categories,
}
