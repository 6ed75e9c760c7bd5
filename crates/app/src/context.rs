//! App Context

use std::sync::Arc;

use checkout::{market, products::Catalog, specials::Specials};

use crate::domain::{
    baskets::{BasketsService, InMemoryBasketsService},
    catalog::{CatalogService, InMemoryCatalogService},
};

#[derive(Clone)]
pub struct AppContext {
    pub baskets: Arc<dyn BasketsService>,
    pub catalog: Arc<dyn CatalogService>,
}

impl AppContext {
    /// Build application context over the given products and specials.
    #[must_use]
    pub fn new(catalog: Catalog, specials: Specials) -> Self {
        let catalog = Arc::new(catalog);
        let specials = Arc::new(specials);

        Self {
            baskets: Arc::new(InMemoryBasketsService::new(
                Arc::clone(&catalog),
                Arc::clone(&specials),
            )),
            catalog: Arc::new(InMemoryCatalogService::new(catalog, specials)),
        }
    }

    /// Build application context for the farmers' market.
    #[must_use]
    pub fn farmers_market() -> Self {
        Self::new(market::catalog(), market::specials())
    }
}
