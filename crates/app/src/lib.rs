//! Shared application services for the checkout.

pub mod context;
pub mod domain;
