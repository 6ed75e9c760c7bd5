//! Checkout JSON API Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::extensions::*;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` once the catalog is loaded
    pub status: String,

    /// Running server version
    pub version: String,

    /// Number of products on sale
    pub products: usize,
}

/// Healthcheck handler
///
/// Reports whether the server has products to sell.
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses(
        (status_code = StatusCode::OK, description = "Ready", body = HealthResponse),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Catalog is empty"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let products = app.catalog.list_products().await.len();

    if products == 0 {
        return Err(StatusError::service_unavailable().brief("catalog is empty"));
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        products,
    }))
}
