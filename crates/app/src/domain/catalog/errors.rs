//! Catalog service errors.

use thiserror::Error;

use checkout::products::CatalogError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogServiceError {
    #[error("could not find product with code {0}")]
    ProductNotFound(String),
}

impl From<CatalogError> for CatalogServiceError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::ProductNotFound(code) => Self::ProductNotFound(code),
        }
    }
}
