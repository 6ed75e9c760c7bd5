//! Farmers' Market
//!
//! The products and specials on offer at the market every week.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::{
    products::{Catalog, Product},
    specials::{
        Specials,
        types::{BuyOneGetOneFree, BuyOneGetOtherDiscounted, QuantityDiscount},
    },
};

/// Chai product code
pub const CHAI: &str = "CH1";

/// Apples product code
pub const APPLES: &str = "AP1";

/// Coffee product code
pub const COFFEE: &str = "CF1";

/// Milk product code
pub const MILK: &str = "MK1";

/// Oatmeal product code
pub const OATMEAL: &str = "OM1";

/// Chai, $3.11
pub fn chai() -> Product {
    Product::new(CHAI, "Chai", Decimal::new(311, 2))
}

/// Apples, $6.00
pub fn apples() -> Product {
    Product::new(APPLES, "Apples", Decimal::new(600, 2))
}

/// Coffee, $11.23
pub fn coffee() -> Product {
    Product::new(COFFEE, "Coffee", Decimal::new(1123, 2))
}

/// Milk, $4.75
pub fn milk() -> Product {
    Product::new(MILK, "Milk", Decimal::new(475, 2))
}

/// Oatmeal, $3.69
pub fn oatmeal() -> Product {
    Product::new(OATMEAL, "Oatmeal", Decimal::new(369, 2))
}

/// Every product sold at the market.
pub fn catalog() -> Catalog {
    Catalog::new([chai(), apples(), coffee(), milk(), oatmeal()])
}

/// This week's specials.
pub fn specials() -> Specials {
    Specials::new([
        QuantityDiscount::new(
            "APPL",
            "If you buy 3 or more bags of Apples, the price drops to $4.50.",
            apples(),
            3,
            Decimal::new(150, 2),
        )
        .into(),
        BuyOneGetOneFree::new(
            "BOGO",
            "Buy-One-Get-One-Free Special on Coffee. (Unlimited)",
            coffee(),
        )
        .into(),
        BuyOneGetOtherDiscounted::new(
            "CHMK",
            "Purchase a box of Chai and get milk free. (Limit 1)",
            chai(),
            milk(),
            1,
            Percentage::from(Decimal::ONE),
        )
        .into(),
        BuyOneGetOtherDiscounted::new(
            "APOM",
            "Purchase a bag of Oatmeal and get 50% off a bag of Apples",
            oatmeal(),
            apples(),
            1,
            Percentage::from(Decimal::new(5, 1)),
        )
        .into(),
    ])
}
