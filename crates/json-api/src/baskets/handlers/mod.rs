//! Basket Handlers

pub(crate) mod add_product;
pub(crate) mod create;
pub(crate) mod get;
