//! Specials
//!
//! Specials attach [`Discount`](crate::items::Discount)s to the items of a basket. They never
//! add, remove or reorder items, and a special discounts any one item at most once, so
//! applying them again to an unchanged basket changes nothing.

use smallvec::SmallVec;

use crate::{
    basket::Basket,
    specials::types::{BuyOneGetOneFree, BuyOneGetOtherDiscounted, QuantityDiscount},
};

pub mod types;

/// Stage a special runs in. Stages run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecialStage {
    /// Quantity threshold discounts
    QuantityThreshold,

    /// Free items
    FreeItem,

    /// Discounts on one product triggered by another
    CrossProduct,
}

/// Special enum
#[derive(Debug, Clone)]
pub enum Special {
    /// Quantity Threshold Discount
    QuantityDiscount(QuantityDiscount),

    /// Buy-One-Get-One-Free
    BuyOneGetOneFree(BuyOneGetOneFree),

    /// Buy-One-Get-Other-Discounted
    BuyOneGetOtherDiscounted(BuyOneGetOtherDiscounted),
}

impl Special {
    /// Return the special code.
    pub fn code(&self) -> &str {
        match self {
            Special::QuantityDiscount(special) => special.code(),
            Special::BuyOneGetOneFree(special) => special.code(),
            Special::BuyOneGetOtherDiscounted(special) => special.code(),
        }
    }

    /// Return the human-readable description.
    pub fn description(&self) -> &str {
        match self {
            Special::QuantityDiscount(special) => special.description(),
            Special::BuyOneGetOneFree(special) => special.description(),
            Special::BuyOneGetOtherDiscounted(special) => special.description(),
        }
    }

    /// Return the stage the special runs in.
    pub fn stage(&self) -> SpecialStage {
        match self {
            Special::QuantityDiscount(_) => SpecialStage::QuantityThreshold,
            Special::BuyOneGetOneFree(_) => SpecialStage::FreeItem,
            Special::BuyOneGetOtherDiscounted(_) => SpecialStage::CrossProduct,
        }
    }

    /// Apply the special to the basket, returning the number of discounts attached.
    pub fn apply(&self, basket: &mut Basket) -> usize {
        match self {
            Special::QuantityDiscount(special) => special.apply(basket),
            Special::BuyOneGetOneFree(special) => special.apply(basket),
            Special::BuyOneGetOtherDiscounted(special) => special.apply(basket),
        }
    }
}

impl From<QuantityDiscount> for Special {
    fn from(special: QuantityDiscount) -> Self {
        Special::QuantityDiscount(special)
    }
}

impl From<BuyOneGetOneFree> for Special {
    fn from(special: BuyOneGetOneFree) -> Self {
        Special::BuyOneGetOneFree(special)
    }
}

impl From<BuyOneGetOtherDiscounted> for Special {
    fn from(special: BuyOneGetOtherDiscounted) -> Self {
        Special::BuyOneGetOtherDiscounted(special)
    }
}

/// The fixed, ordered set of specials applied to every basket.
///
/// Specials are kept in [`SpecialStage`] order; within a stage they keep the order they were
/// given in.
#[derive(Debug, Clone, Default)]
pub struct Specials {
    specials: SmallVec<[Special; 4]>,
}

impl Specials {
    /// Create the set of specials.
    pub fn new(specials: impl IntoIterator<Item = Special>) -> Self {
        let mut specials: SmallVec<[Special; 4]> = specials.into_iter().collect();

        specials.sort_by_key(Special::stage);

        Self { specials }
    }

    /// Apply every special to the basket, in order. Returns the number of discounts attached.
    ///
    /// Safe to call after every change to the basket: specials that already discounted an
    /// item leave it alone.
    pub fn apply_all(&self, basket: &mut Basket) -> usize {
        self.specials
            .iter()
            .map(|special| special.apply(basket))
            .sum()
    }

    /// Find a special by its code.
    pub fn get(&self, code: &str) -> Option<&Special> {
        self.specials.iter().find(|special| special.code() == code)
    }

    /// Iterate over the specials in application order.
    pub fn iter(&self) -> impl Iterator<Item = &Special> {
        self.specials.iter()
    }

    /// Number of specials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specials.len()
    }

    /// Check if there are no specials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use decimal_percentage::Percentage;
    use rust_decimal::Decimal;

    use crate::{
        items::Item,
        specials::types::test_support::{apples, basket_of, chai, coffee, milk, oatmeal},
    };

    use super::*;

    fn bogo() -> Special {
        BuyOneGetOneFree::new("BOGO", "Coffee BOGO", coffee()).into()
    }

    fn appl() -> Special {
        QuantityDiscount::new("APPL", "Apples", apples(), 3, Decimal::new(150, 2)).into()
    }

    fn chmk() -> Special {
        BuyOneGetOtherDiscounted::new(
            "CHMK",
            "Chai and milk",
            chai(),
            milk(),
            1,
            Percentage::from(Decimal::ONE),
        )
        .into()
    }

    #[test]
    fn delegates_code_and_description() {
        let special = bogo();

        assert_eq!(special.code(), "BOGO");
        assert_eq!(special.description(), "Coffee BOGO");
        assert_eq!(special.stage(), SpecialStage::FreeItem);
    }

    #[test]
    fn new_orders_specials_by_stage() {
        let specials = Specials::new([chmk(), bogo(), appl()]);

        let codes: Vec<&str> = specials.iter().map(Special::code).collect();

        assert_eq!(codes, vec!["APPL", "BOGO", "CHMK"]);
    }

    #[test]
    fn new_keeps_order_within_a_stage() {
        let apom = BuyOneGetOtherDiscounted::new(
            "APOM",
            "Oatmeal and apples",
            oatmeal(),
            apples(),
            1,
            Percentage::from(Decimal::new(5, 1)),
        );

        let specials = Specials::new([apom.into(), bogo(), chmk()]);

        let codes: Vec<&str> = specials.iter().map(Special::code).collect();

        assert_eq!(codes, vec!["BOGO", "APOM", "CHMK"]);
    }

    #[test]
    fn get_finds_special_by_code() {
        let specials = Specials::new([bogo(), appl()]);

        assert_eq!(specials.get("APPL").map(Special::code), Some("APPL"));
        assert!(specials.get("NOPE").is_none());
        assert_eq!(specials.len(), 2);
    }

    #[test]
    fn apply_all_sums_discounts_and_is_idempotent() {
        let specials = Specials::new([bogo(), appl(), chmk()]);
        let mut basket = basket_of(&[&coffee(), &chai(), &coffee(), &milk()]);

        assert_eq!(specials.apply_all(&mut basket), 2);

        let total = basket.total();

        for _ in 0..5 {
            assert_eq!(specials.apply_all(&mut basket), 0);
        }

        assert_eq!(basket.len(), 4);
        assert_eq!(basket.total(), total);
    }

    #[test]
    fn empty_specials_leave_basket_alone() {
        let specials = Specials::default();
        let mut basket = Basket::with_items([Item::from(&coffee()), Item::from(&coffee())]);

        assert!(specials.is_empty());
        assert_eq!(specials.apply_all(&mut basket), 0);
        assert_eq!(basket.total(), Decimal::from(2) * coffee().price());
    }
}
