//! Items

use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::products::Product;

/// A price adjustment granted to a single item by a single special.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discount {
    special: String,
    amount: Decimal,
}

impl Discount {
    /// Create a new discount granted by the special with the given code.
    pub fn new(special: impl Into<String>, amount: Decimal) -> Self {
        Self {
            special: special.into(),
            amount,
        }
    }

    /// Code of the special that granted this discount.
    pub fn special(&self) -> &str {
        &self.special
    }

    /// Amount added to the item price. Negative for a reduction.
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// One purchased unit of a product, with the discounts attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    code: String,
    price: Decimal,
    discounts: SmallVec<[Discount; 2]>,
}

impl Item {
    /// Creates a new undiscounted item.
    pub fn new(code: impl Into<String>, price: Decimal) -> Self {
        Self {
            code: code.into(),
            price,
            discounts: SmallVec::new(),
        }
    }

    /// Returns the product code of the item
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the unit price of the item
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Discounts attached to the item, in the order they were granted.
    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// Whether the special with the given code has already discounted this item.
    pub fn has_discount(&self, special: &str) -> bool {
        self.discounts
            .iter()
            .any(|discount| discount.special() == special)
    }

    /// Attach a discount from the given special.
    ///
    /// A special discounts an item at most once: returns `false`, leaving the item untouched,
    /// when the item already carries a discount from `special`.
    pub fn apply_discount(&mut self, special: &str, amount: Decimal) -> bool {
        if self.has_discount(special) {
            return false;
        }

        self.discounts.push(Discount::new(special, amount));

        true
    }

    /// Unit price plus all attached discounts, unrounded.
    pub fn total(&self) -> Decimal {
        self.price + self.discounts.iter().map(Discount::amount).sum::<Decimal>()
    }
}

impl From<&Product> for Item {
    fn from(product: &Product) -> Self {
        Item::new(product.code(), product.price())
    }
}
