//! Basket

use std::fmt;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    items::Item,
    pricing::{subtotal_price, total_price},
    receipt::Receipt,
};

/// Basket identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BasketId(Uuid);

impl BasketId {
    /// Generate a new, time-ordered identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Wrap an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Return the underlying UUID.
    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for BasketId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BasketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for BasketId {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl From<BasketId> for Uuid {
    fn from(id: BasketId) -> Self {
        id.into_uuid()
    }
}

/// An ordered basket of purchased items.
///
/// The basket holds one [`Item`] per unit bought, in purchase order. Specials depend on that
/// order, so items are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basket {
    id: BasketId,
    items: Vec<Item>,
}

impl Basket {
    /// Create a new, empty basket with a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(BasketId::new())
    }

    /// Create a new, empty basket with the given identifier.
    #[must_use]
    pub fn with_id(id: BasketId) -> Self {
        Basket {
            id,
            items: Vec::new(),
        }
    }

    /// Create a new basket with a fresh identifier holding the given items.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut basket = Self::new();

        basket.extend(items);

        basket
    }

    /// Basket identifier
    pub fn id(&self) -> BasketId {
        self.id
    }

    /// Append an item to the end of the basket.
    pub fn add(&mut self, item: Item) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Append items to the end of the basket, preserving their order.
    pub fn extend(&mut self, items: impl IntoIterator<Item = Item>) -> &mut Self {
        self.items.extend(items);
        self
    }

    /// Count the items with the given product code.
    pub fn quantity_of(&self, code: &str) -> usize {
        self.items.iter().filter(|item| item.code() == code).count()
    }

    /// Total price of the basket after discounts, rounded to cents.
    pub fn total(&self) -> Decimal {
        total_price(&self.items)
    }

    /// Total price of the basket before discounts, rounded to cents.
    pub fn subtotal(&self) -> Decimal {
        subtotal_price(&self.items)
    }

    /// Amount saved through discounts.
    pub fn savings(&self) -> Decimal {
        self.subtotal() - self.total()
    }

    /// Iterate over the items in the basket.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Items in purchase order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items in purchase order, for attaching discounts.
    ///
    /// A slice keeps the item count fixed while specials run.
    pub(crate) fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    /// Get the number of items in the basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Receipt for the basket in its current state.
    pub fn receipt(&self) -> Receipt<'_> {
        Receipt::new(self)
    }

    /// Render the receipt as plain text.
    pub fn render(&self) -> String {
        self.receipt().to_string()
    }
}

impl Default for Basket {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Basket {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
