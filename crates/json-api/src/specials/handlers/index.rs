//! Special Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use checkout::specials::Special;

use crate::extensions::*;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SpecialResponse {
    /// The special code shown on receipts
    pub code: String,

    /// The kind of special
    pub kind: String,

    /// Human-readable description
    pub description: String,

    /// Codes of the products the special looks at
    pub products: Vec<String>,
}

impl From<Special> for SpecialResponse {
    fn from(special: Special) -> Self {
        let (kind, products) = match &special {
            Special::QuantityDiscount(special) => {
                ("quantity_discount", vec![special.product().code()])
            }
            Special::BuyOneGetOneFree(special) => {
                ("buy_one_get_one_free", vec![special.product().code()])
            }
            Special::BuyOneGetOtherDiscounted(special) => (
                "buy_one_get_other_discounted",
                vec![special.trigger().code(), special.target().code()],
            ),
        };

        Self {
            code: special.code().to_string(),
            kind: kind.to_string(),
            description: special.description().to_string(),
            products: products.into_iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SpecialsResponse {
    /// The specials, in the order they are applied
    pub specials: Vec<SpecialResponse>,
}

/// Special Index Handler
///
/// Returns the specials applied to every basket.
#[endpoint(tags("specials"), summary = "List Specials")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SpecialsResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let specials = app.catalog.list_specials().await;

    Ok(Json(SpecialsResponse {
        specials: specials.into_iter().map(Into::into).collect(),
    }))
}
