//! Add Product To Basket Handler

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    baskets::{
        errors::into_status_error,
        models::{BasketEnvelope, render_basket},
    },
    extensions::*,
};

/// Add Product Handler
///
/// Adds one unit of a product to the basket and re-applies every special.
#[endpoint(
    tags("baskets"),
    summary = "Add Product To Basket",
    responses(
        (status_code = StatusCode::OK, description = "Product added", body = BasketEnvelope),
        (status_code = StatusCode::BAD_REQUEST, description = "Unsupported format"),
        (status_code = StatusCode::NOT_FOUND, description = "Basket or product not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    code: PathParam<String>,
    format: QueryParam<String, false>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let app = depot.app_or_500()?;
    let format = format.into_basket_format()?;
    let code = code.into_inner();

    let basket = app
        .baskets
        .add_product(id.into_inner().into(), code.clone())
        .await
        .map_err(into_status_error)?;

    info!(
        basket = %basket.id(),
        product = %code,
        total = %basket.total(),
        "product added"
    );

    render_basket(res, &basket, format);

    Ok(())
}
