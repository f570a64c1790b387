//! Immutable product catalog
//!
//! The catalog is loaded once at startup and never changes for the lifetime
//! of the process. Products are index-addressable in their original order;
//! every other component refers to products by that index.

mod loader;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShoprecError};

/// A single catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl Product {
    /// Text used for vectorization: name, category and description joined by spaces
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.name, self.category, self.description)
    }
}

/// Ordered, read-only product table with lookup indexes
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    combined: Vec<String>,
    by_id: HashMap<i64, usize>,
    by_name: HashMap<String, usize>,
    by_category: HashMap<String, Vec<usize>>,
    categories: Vec<String>,
}

impl Catalog {
    /// Build a catalog from products in their catalog order.
    ///
    /// Product ids must be unique. Duplicate names are allowed; name lookups
    /// resolve to the first occurrence.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(products.len());
        let mut by_name = HashMap::with_capacity(products.len());
        let mut by_category: HashMap<String, Vec<usize>> = HashMap::new();
        let mut categories = Vec::new();

        for (idx, product) in products.iter().enumerate() {
            if by_id.insert(product.id, idx).is_some() {
                return Err(ShoprecError::DuplicateProductId { id: product.id });
            }
            by_name.entry(product.name.clone()).or_insert(idx);

            let members = by_category.entry(product.category.clone()).or_default();
            if members.is_empty() {
                categories.push(product.category.clone());
            }
            members.push(idx);
        }

        let combined = products.iter().map(Product::combined_text).collect();

        Ok(Catalog {
            products,
            combined,
            by_id,
            by_name,
            by_category,
            categories,
        })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Combined text of every product, index-aligned with the catalog
    pub fn combined_texts(&self) -> &[String] {
        &self.combined
    }

    /// Catalog index of the product with this id
    pub fn index_of_id(&self, id: i64) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Catalog index of the first product with exactly this name
    pub fn index_of_name(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn get_by_id(&self, id: i64) -> Option<&Product> {
        self.index_of_id(id).map(|idx| &self.products[idx])
    }

    /// Catalog indices of products in a category, in catalog order
    pub fn indices_in_category(&self, category: &str) -> &[usize] {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Products in a category, in catalog order
    pub fn products_in_category(&self, category: &str) -> Vec<&Product> {
        self.indices_in_category(category)
            .iter()
            .map(|&idx| &self.products[idx])
            .collect()
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}
