//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use checkout::{
    basket::{Basket, BasketId},
    items::Item,
    market,
};
use checkout_app::{
    context::AppContext,
    domain::{baskets::MockBasketsService, catalog::MockCatalogService},
};

fn strict_baskets_mock() -> MockBasketsService {
    let mut baskets = MockBasketsService::new();

    baskets.expect_create_basket().never();
    baskets.expect_get_basket().never();
    baskets.expect_add_product().never();

    baskets
}

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list_products().never();
    catalog.expect_get_product().never();
    catalog.expect_list_specials().never();

    catalog
}

fn service_with(app: AppContext, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(app)).push(route))
}

pub(crate) fn baskets_service(baskets: MockBasketsService, route: Router) -> Service {
    service_with(
        AppContext {
            baskets: Arc::new(baskets),
            catalog: Arc::new(strict_catalog_mock()),
        },
        route,
    )
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    service_with(
        AppContext {
            baskets: Arc::new(strict_baskets_mock()),
            catalog: Arc::new(catalog),
        },
        route,
    )
}

/// A priced chai and milk basket: milk is free with chai.
pub(crate) fn make_basket(uuid: Uuid) -> Basket {
    let mut basket = Basket::with_id(BasketId::from(uuid));

    basket.add(Item::from(&market::chai()));
    basket.add(Item::from(&market::milk()));

    market::specials().apply_all(&mut basket);

    basket
}
