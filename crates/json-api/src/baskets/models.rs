//! Basket Models

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use checkout::{
    basket::Basket,
    items::{Discount, Item},
    pricing::format_money,
};

use crate::extensions::BasketFormat;

/// Basket Envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BasketEnvelope {
    /// The basket
    pub basket: BasketResponse,
}

/// Basket Response
///
/// Amounts are decimal strings with two places, e.g. `"11.23"`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BasketResponse {
    /// The unique identifier of the basket
    pub id: Uuid,

    /// The items in the basket, in the order they were added
    pub items: Vec<BasketItemResponse>,

    /// Sum of the undiscounted prices
    pub subtotal: String,

    /// Amount taken off by specials
    pub savings: String,

    /// Amount to pay
    pub total: String,
}

impl From<&Basket> for BasketResponse {
    fn from(basket: &Basket) -> Self {
        Self {
            id: basket.id().into(),
            items: basket.iter().map(BasketItemResponse::from).collect(),
            subtotal: format_money(basket.subtotal()),
            savings: format_money(basket.savings()),
            total: format_money(basket.total()),
        }
    }
}

/// Basket Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BasketItemResponse {
    /// The product code
    pub code: String,

    /// The unit price
    pub price: String,

    /// Discounts attached by specials
    pub discounts: Vec<DiscountResponse>,
}

impl From<&Item> for BasketItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            code: item.code().to_string(),
            price: format_money(item.price()),
            discounts: item.discounts().iter().map(DiscountResponse::from).collect(),
        }
    }
}

/// Discount Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiscountResponse {
    /// Code of the special that granted the discount
    pub code: String,

    /// Signed amount, negative for a reduction
    pub amount: String,
}

impl From<&Discount> for DiscountResponse {
    fn from(discount: &Discount) -> Self {
        Self {
            code: discount.special().to_string(),
            amount: format_money(discount.amount()),
        }
    }
}

/// Write the basket in the requested format.
pub(crate) fn render_basket(res: &mut Response, basket: &Basket, format: BasketFormat) {
    match format {
        BasketFormat::Json => res.render(Json(BasketEnvelope {
            basket: basket.into(),
        })),
        BasketFormat::Text => res.render(Text::Plain(format!(
            "Basket: {}\n{}",
            basket.id(),
            basket.receipt()
        ))),
    }
}
