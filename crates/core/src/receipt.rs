//! Receipt
//!
//! Plain-text receipt for a basket. The layout is fixed-width and byte-stable:
//!
//! ```text
//! Item                          Price
//! ----                          -----
//! CH1                            3.11
//! MK1                            4.75
//!             CHMK              -4.75
//! -----------------------------------
//!                                3.11
//! ```

use std::fmt::{self, Write};

use crate::{basket::Basket, pricing::format_money};

const CODE_WIDTH: usize = 12;
const LABEL_WIDTH: usize = 12;
const PRICE_WIDTH: usize = 11;
const RULE_WIDTH: usize = CODE_WIDTH + LABEL_WIDTH + PRICE_WIDTH;

/// Receipt for a basket.
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    basket: &'a Basket,
}

impl<'a> Receipt<'a> {
    /// Create a receipt for the basket in its current state.
    #[must_use]
    pub fn new(basket: &'a Basket) -> Self {
        Self { basket }
    }

    /// Writes the receipt.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        write_row(out, "Item", "", "Price")?;
        write_row(out, "----", "", "-----")?;

        for item in self.basket {
            write_row(out, item.code(), "", &format_money(item.price()))?;

            for discount in item.discounts() {
                write_row(out, "", discount.special(), &format_money(discount.amount()))?;
            }
        }

        writeln!(out, "{:-<RULE_WIDTH$}", "")?;

        write_row(out, "", "", &format_money(self.basket.total()))
    }
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

fn write_row(out: &mut impl Write, code: &str, label: &str, price: &str) -> fmt::Result {
    writeln!(
        out,
        "{code:<CODE_WIDTH$}{label:<LABEL_WIDTH$}{price:>PRICE_WIDTH$}"
    )
}
