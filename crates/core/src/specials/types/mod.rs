//! Special Types

mod buy_one_get_one_free;
mod buy_one_get_other_discounted;
mod quantity_discount;

pub use buy_one_get_one_free::*;
pub use buy_one_get_other_discounted::*;
pub use quantity_discount::*;
