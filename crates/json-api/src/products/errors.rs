//! Product Errors

use salvo::http::StatusError;
use tracing::debug;

use checkout_app::domain::catalog::CatalogServiceError;

pub(crate) fn into_status_error(error: CatalogServiceError) -> StatusError {
    let brief = error.to_string();

    match error {
        CatalogServiceError::ProductNotFound(code) => {
            debug!(product = %code, "product not found");

            StatusError::not_found().brief(brief)
        }
    }
}
