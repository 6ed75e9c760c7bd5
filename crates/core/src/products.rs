//! Products

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised by the product catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No product in the catalog has the given code.
    #[error("could not find product with code {0}")]
    ProductNotFound(String),
}

/// A product offered at the market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    code: String,
    name: String,
    price: Decimal,
}

impl Product {
    /// Create a new product.
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
        }
    }

    /// Product code, unique within a catalog.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price
    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// Read-only registry of products, keyed by product code.
///
/// Products keep the order they were registered in, which is the order [`Catalog::iter`]
/// yields them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from the given products.
    ///
    /// A product whose code is already registered replaces the earlier entry in place.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::default();

        for product in products {
            match catalog.index.get(product.code()).copied() {
                Some(idx) => {
                    if let Some(existing) = catalog.products.get_mut(idx) {
                        *existing = product;
                    }
                }
                None => {
                    catalog
                        .index
                        .insert(product.code.clone(), catalog.products.len());

                    catalog.products.push(product);
                }
            }
        }

        catalog
    }

    /// Find a product by its code.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] when no product has the given code.
    pub fn lookup(&self, code: &str) -> Result<&Product, CatalogError> {
        self.index
            .get(code)
            .and_then(|&idx| self.products.get(idx))
            .ok_or_else(|| CatalogError::ProductNotFound(code.to_string()))
    }

    /// Iterate over the products in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
