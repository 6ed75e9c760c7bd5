//! Checkout prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketId},
    items::{Discount, Item},
    pricing::{format_money, round_money, total_price},
    products::{Catalog, CatalogError, Product},
    receipt::Receipt,
    specials::{
        Special, SpecialStage, Specials,
        types::{BuyOneGetOneFree, BuyOneGetOtherDiscounted, QuantityDiscount},
    },
};
