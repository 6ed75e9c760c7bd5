//! Buy One Get One Free
//!
//! Every second unit of the target product is free: the 2nd, 4th, 6th... matching item in
//! purchase order is discounted by its full price.

use crate::{basket::Basket, products::Product};

/// A Buy-One-Get-One-Free Special
#[derive(Debug, Clone)]
pub struct BuyOneGetOneFree {
    code: String,
    description: String,
    product: Product,
}

impl BuyOneGetOneFree {
    /// Create a new buy-one-get-one-free special on `product`.
    pub fn new(code: impl Into<String>, description: impl Into<String>, product: Product) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            product,
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

    /// Return the product made free
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Make every other matching item free. Returns the number of discounts attached.
    pub fn apply(&self, basket: &mut Basket) -> usize {
        let mut next_one_free = false;
        let mut granted = 0;

        for item in basket
            .items_mut()
            .iter_mut()
            .filter(|item| item.code() == self.product.code())
        {
            if next_one_free {
                let amount = -item.price();

                if item.apply_discount(&self.code, amount) {
                    granted += 1;
                }
            }

            next_one_free = !next_one_free;
        }

        granted
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::{
        items::{Discount, Item},
        specials::types::test_support::{basket_of, chai, coffee, discounted_positions, oatmeal},
    };

    use super::*;

    fn special(product: Product) -> BuyOneGetOneFree {
        BuyOneGetOneFree::new("BOGO", "Buy one get one free", product)
    }

    #[test]
    fn single_item_is_not_discounted() {
        let mut basket = basket_of(&[&coffee()]);

        assert_eq!(special(coffee()).apply(&mut basket), 0);
        assert_eq!(basket.total(), coffee().price());
    }

    #[test]
    fn other_products_are_ignored() {
        let mut basket = basket_of(&[&chai(), &coffee()]);

        special(coffee()).apply(&mut basket);

        assert_eq!(basket.total(), chai().price() + coffee().price());
    }

    #[test]
    fn second_match_is_free_even_when_not_adjacent() {
        let mut basket = basket_of(&[&coffee(), &chai(), &coffee(), &oatmeal()]);

        assert_eq!(special(coffee()).apply(&mut basket), 1);

        assert_eq!(discounted_positions(&basket, "BOGO"), vec![2]);
        assert_eq!(
            basket.total(),
            chai().price() + coffee().price() + oatmeal().price()
        );
    }

    #[test]
    fn every_other_match_is_free() {
        let mut basket = basket_of(&[&oatmeal(), &oatmeal(), &oatmeal(), &oatmeal(), &oatmeal()]);

        assert_eq!(special(oatmeal()).apply(&mut basket), 2);

        assert_eq!(discounted_positions(&basket, "BOGO"), vec![1, 3]);
        assert_eq!(basket.total(), Decimal::from(3) * oatmeal().price());
    }

    #[test]
    fn free_item_discount_is_its_full_price() {
        let mut basket = basket_of(&[&coffee(), &coffee()]);

        special(coffee()).apply(&mut basket);

        let amounts: Vec<Decimal> = basket
            .iter()
            .flat_map(|item| item.discounts().iter().map(Discount::amount))
            .collect();

        assert_eq!(amounts, vec![-coffee().price()]);
    }

    #[test]
    fn repeated_application_is_idempotent() {
        let mut basket = basket_of(&[&coffee(), &coffee(), &coffee()]);
        let bogo = special(coffee());

        assert_eq!(bogo.apply(&mut basket), 1);
        assert_eq!(bogo.apply(&mut basket), 0);

        assert_eq!(discounted_positions(&basket, "BOGO"), vec![1]);
        assert_eq!(basket.total(), Decimal::from(2) * coffee().price());
    }

    #[test]
    fn newly_added_pair_is_discounted_on_reapplication() {
        let mut basket = basket_of(&[&coffee(), &coffee(), &coffee()]);
        let bogo = special(coffee());

        bogo.apply(&mut basket);
        basket.add(Item::from(&coffee()));

        assert_eq!(bogo.apply(&mut basket), 1);
        assert_eq!(discounted_positions(&basket, "BOGO"), vec![1, 3]);
    }
}
