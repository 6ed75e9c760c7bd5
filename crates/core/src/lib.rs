//! Checkout
//!
//! Checkout prices a farmers' market basket by attaching the discounts of a fixed set of
//! specials to the items in it, and renders the result as a plain-text receipt.

pub mod basket;
pub mod items;
pub mod market;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod specials;
