//! Quantity Discount
//!
//! Once the basket holds at least a minimum quantity of the target product, every unit of it
//! gets a flat amount off. Below the minimum nothing is discounted.

use rust_decimal::Decimal;

use crate::{basket::Basket, products::Product};

/// A Quantity Threshold Discount Special
#[derive(Debug, Clone)]
pub struct QuantityDiscount {
    code: String,
    description: String,
    product: Product,
    minimum_quantity: usize,
    discount: Decimal,
}

impl QuantityDiscount {
    /// Create a new quantity discount taking `discount` off each unit of `product` once at
    /// least `minimum_quantity` units are in the basket.
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        product: Product,
        minimum_quantity: usize,
        discount: Decimal,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            product,
            minimum_quantity,
            discount,
        }
    }

    /// Return the special code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Return the description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Return the discounted product
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Return the minimum quantity
    pub fn minimum_quantity(&self) -> usize {
        self.minimum_quantity
    }

    /// Return the per-unit discount
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Discount every matching item if the basket holds enough of them. Returns the number of
    /// discounts attached.
    pub fn apply(&self, basket: &mut Basket) -> usize {
        if basket.quantity_of(self.product.code()) < self.minimum_quantity {
            return 0;
        }

        let mut granted = 0;

        for item in basket
            .items_mut()
            .iter_mut()
            .filter(|item| item.code() == self.product.code())
        {
            if item.apply_discount(&self.code, -self.discount) {
                granted += 1;
            }
        }

        granted
    }
}
