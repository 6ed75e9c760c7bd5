//! Catalog service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use checkout::{
    products::{Catalog, Product},
    specials::{Special, Specials},
};

use crate::domain::catalog::errors::CatalogServiceError;

/// Read-only access to the products and specials on offer.
#[derive(Debug, Clone)]
pub struct InMemoryCatalogService {
    catalog: Arc<Catalog>,
    specials: Arc<Specials>,
}

impl InMemoryCatalogService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, specials: Arc<Specials>) -> Self {
        Self { catalog, specials }
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalogService {
    async fn list_products(&self) -> Vec<Product> {
        self.catalog.iter().cloned().collect()
    }

    async fn get_product(&self, code: String) -> Result<Product, CatalogServiceError> {
        Ok(self.catalog.lookup(&code)?.clone())
    }

    async fn list_specials(&self) -> Vec<Special> {
        self.specials.iter().cloned().collect()
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves all products, in catalog order.
    async fn list_products(&self) -> Vec<Product>;

    /// Retrieve a single product by its code.
    async fn get_product(&self, code: String) -> Result<Product, CatalogServiceError>;

    /// Retrieves all specials, in the order they are applied.
    async fn list_specials(&self) -> Vec<Special>;
}
