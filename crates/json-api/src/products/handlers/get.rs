//! Get Product Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use checkout::{pricing::format_money, products::Product};

use crate::{extensions::*, products::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The product code
    pub code: String,

    /// The product name
    pub name: String,

    /// The unit price, e.g. `"3.11"`
    pub price: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            code: product.code().to_string(),
            name: product.name().to_string(),
            price: format_money(product.price()),
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    code: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let product = app
        .catalog
        .get_product(code.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
