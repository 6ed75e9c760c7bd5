//! Baskets service errors.

use thiserror::Error;

use checkout::{basket::BasketId, products::CatalogError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BasketsServiceError {
    #[error("could not find basket id {0}")]
    NotFound(BasketId),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
