//! Buy One Get Other Discounted
//!
//! Buying any unit of a trigger product takes a percentage off units of another (target)
//! product, optionally up to a limited number of redemptions per basket.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::{basket::Basket, pricing::round_money, products::Product};

/// A Buy-One-Get-Other-Discounted Special
#[derive(Debug, Clone)]
pub struct BuyOneGetOtherDiscounted {
    code: String,
    description: String,
    trigger: Product,
    target: Product,
    limit: usize,
    percentage: Percentage,
}

impl BuyOneGetOtherDiscounted {
    /// Create a new special taking `percentage` off `target` items whenever `trigger` is in
    /// the basket.
    ///
    /// At most `limit` target items are discounted per basket; a `limit` of zero means
    /// unlimited.
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        trigger: Product,
        target: Product,
        limit: usize,
        percentage: Percentage,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            trigger,
            target,
            limit,
            percentage,
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

    /// Return the product that has to be bought
    pub fn trigger(&self) -> &Product {
        &self.trigger
    }

    /// Return the product that gets discounted
    pub fn target(&self) -> &Product {
        &self.target
    }

    /// Return the redemption limit, if any
    pub fn limit(&self) -> Option<usize> {
        (self.limit > 0).then_some(self.limit)
    }

    /// Return the percentage taken off the target price
    pub fn percentage(&self) -> Percentage {
        self.percentage
    }

    /// Amount taken off each discounted target item, rounded to cents.
    pub fn discount(&self) -> Decimal {
        round_money(-(self.percentage * self.target.price()))
    }

    /// Discount target items in purchase order while the trigger product is in the basket.
    /// Returns the number of discounts attached.
    ///
    /// Target items already discounted by this special count against the limit, so a limited
    /// special stays limited however often it is applied.
    pub fn apply(&self, basket: &mut Basket) -> usize {
        if basket.quantity_of(self.trigger.code()) == 0 {
            return 0;
        }

        let amount = self.discount();
        let mut remaining = self.limit();
        let mut granted = 0;

        for item in basket
            .items_mut()
            .iter_mut()
            .filter(|item| item.code() == self.target.code())
        {
            if let Some(remaining) = remaining.as_mut() {
                if *remaining == 0 {
                    break;
                }

                *remaining -= 1;
            }

            if item.apply_discount(&self.code, amount) {
                granted += 1;
            }
        }

        granted
    }
}
