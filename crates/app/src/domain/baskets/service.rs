//! Baskets service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;
use tracing::debug;

use checkout::{
    basket::{Basket, BasketId},
    items::Item,
    products::Catalog,
    specials::Specials,
};

use crate::domain::baskets::errors::BasketsServiceError;

/// Baskets held in process memory for the lifetime of the service.
#[derive(Debug)]
pub struct InMemoryBasketsService {
    catalog: Arc<Catalog>,
    specials: Arc<Specials>,
    baskets: RwLock<FxHashMap<BasketId, Basket>>,
}

impl InMemoryBasketsService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, specials: Arc<Specials>) -> Self {
        Self {
            catalog,
            specials,
            baskets: RwLock::new(FxHashMap::default()),
        }
    }
}

#[async_trait]
impl BasketsService for InMemoryBasketsService {
    async fn create_basket(&self) -> Basket {
        let basket = Basket::new();

        self.baskets.write().await.insert(basket.id(), basket.clone());

        debug!(basket = %basket.id(), "basket created");

        basket
    }

    async fn get_basket(&self, id: BasketId) -> Result<Basket, BasketsServiceError> {
        self.baskets
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(BasketsServiceError::NotFound(id))
    }

    async fn add_product(&self, id: BasketId, code: String) -> Result<Basket, BasketsServiceError> {
        let mut baskets = self.baskets.write().await;

        let basket = baskets
            .get_mut(&id)
            .ok_or(BasketsServiceError::NotFound(id))?;

        let product = self.catalog.lookup(&code)?;

        basket.add(Item::from(product));

        let discounts = self.specials.apply_all(basket);

        debug!(
            basket = %id,
            product = %code,
            discounts,
            total = %basket.total(),
            "product added to basket"
        );

        Ok(basket.clone())
    }
}

#[automock]
#[async_trait]
pub trait BasketsService: Send + Sync {
    /// Creates a new, empty basket.
    async fn create_basket(&self) -> Basket;

    /// Retrieve a single basket.
    async fn get_basket(&self, id: BasketId) -> Result<Basket, BasketsServiceError>;

    /// Add one unit of the product with the given code, then re-apply every special.
    async fn add_product(&self, id: BasketId, code: String) -> Result<Basket, BasketsServiceError>;
}
