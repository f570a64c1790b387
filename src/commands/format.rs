//! Shared output helpers

use serde::Serialize;

use crate::cli::OutputFormat;
use shoprec_core::catalog::Product;
use shoprec_core::error::Result;

/// Dispatch output by format
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
        }
    };
}

pub(crate) use output_by_format_result;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line human rendering of a product
pub fn product_line(product: &Product) -> String {
    format!(
        "[{}] {} ({}) ${:.2}",
        product.id, product.name, product.category, product.price
    )
}

/// Message shown in human mode when a list is empty, unless quiet
pub fn print_empty(format: OutputFormat, quiet: bool, message: &str) {
    if format == OutputFormat::Human && !quiet {
        println!("{}", message);
    }
}
