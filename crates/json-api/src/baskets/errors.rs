//! Errors

use salvo::http::StatusError;
use tracing::debug;

use checkout::products::CatalogError;
use checkout_app::domain::baskets::BasketsServiceError;

pub(crate) fn into_status_error(error: BasketsServiceError) -> StatusError {
    let brief = error.to_string();

    match error {
        BasketsServiceError::NotFound(id) => {
            debug!(basket = %id, "basket not found");

            StatusError::not_found().brief(brief)
        }
        BasketsServiceError::Catalog(CatalogError::ProductNotFound(code)) => {
            debug!(product = %code, "product not found");

            StatusError::not_found().brief(brief)
        }
    }
}
