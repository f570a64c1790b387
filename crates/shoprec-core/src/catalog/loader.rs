//! CSV catalog loading
//!
//! Expected header: `id,name,category,description,price,image_url`.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use super::{Catalog, Product};
use crate::error::{Result, ShoprecError};
use crate::trace_time;

impl Catalog {
    /// Load the catalog from a CSV file.
    ///
    /// A missing or unreadable file is reported as `CatalogUnavailable`;
    /// callers treat it as fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let file = std::fs::File::open(path)
            .map_err(|e| ShoprecError::catalog_unavailable(path, e))?;

        let catalog = Self::from_reader(file)?;

        trace_time!(start, "load_catalog", products = catalog.len());
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            categories = catalog.categories().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a catalog from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut products = Vec::new();
        for (row, record) in csv_reader.deserialize::<Product>().enumerate() {
            let product = record.map_err(|e| ShoprecError::InvalidCatalog {
                // +2: header line plus 1-based numbering
                reason: format!("row {}: {}", row + 2, e),
            })?;
            products.push(product);
        }

        Catalog::new(products)
    }
}
