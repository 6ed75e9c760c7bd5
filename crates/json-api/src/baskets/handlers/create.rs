//! Create Basket Handler

use salvo::{http::header::LOCATION, oapi::extract::QueryParam, prelude::*};
use tracing::info;

use crate::{
    baskets::models::{BasketEnvelope, render_basket},
    extensions::*,
};

/// Create Basket Handler
///
/// Creates a new, empty basket. Pass `format=txt` to get the receipt as plain text.
#[endpoint(
    tags("baskets"),
    summary = "Create Basket",
    responses(
        (status_code = StatusCode::CREATED, description = "Basket created", body = BasketEnvelope),
        (status_code = StatusCode::BAD_REQUEST, description = "Unsupported format"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    format: QueryParam<String, false>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let app = depot.app_or_500()?;
    let format = format.into_basket_format()?;

    let basket = app.baskets.create_basket().await;

    info!(basket = %basket.id(), "basket created");

    res.add_header(LOCATION, format!("/api/basket/{}", basket.id()), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    render_basket(res, &basket, format);

    Ok(())
}
