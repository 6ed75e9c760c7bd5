//! App Router

use checkout_app::context::AppContext;
use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{baskets, healthcheck, observability::RequestLogging, products, specials};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

/// Every API route, without middleware.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api")
                .push(
                    Router::with_path("basket")
                        .post(baskets::create::handler)
                        .push(
                            Router::with_path("{id}")
                                .get(baskets::get::handler)
                                .push(
                                    Router::with_path("product/{code}")
                                        .patch(baskets::add_product::handler),
                                ),
                        ),
                )
                .push(
                    Router::with_path("products")
                        .get(products::index::handler)
                        .push(Router::with_path("{code}").get(products::get::handler)),
                )
                .push(Router::with_path("specials").get(specials::index::handler)),
        )
}

/// The served router: middleware, API routes and documentation.
pub(crate) fn root(app: AppContext, request_logging: RequestLogging) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .hoop(inject(app))
        .push(app_router());

    let doc = OpenApi::new("Checkout API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use super::*;

    const BASE: &str = "http://example.com";

    fn farmers_market() -> Service {
        Service::new(root(AppContext::farmers_market(), RequestLogging::default()))
    }

    async fn create_basket(service: &Service) -> TestResult<String> {
        let body: Value = TestClient::post(format!("{BASE}/api/basket"))
            .send(service)
            .await
            .take_json()
            .await?;

        let id = body["basket"]["id"].as_str().ok_or("missing basket id")?;

        Ok(id.to_string())
    }

    async fn add_product(service: &Service, id: &str, code: &str) -> TestResult<Value> {
        let body = TestClient::patch(format!("{BASE}/api/basket/{id}/product/{code}"))
            .send(service)
            .await
            .take_json()
            .await?;

        Ok(body)
    }

    #[tokio::test]
    async fn totals_progress_as_apples_are_added() -> TestResult {
        let service = farmers_market();
        let id = create_basket(&service).await?;

        add_product(&service, &id, "OM1").await?;

        let totals = [
            add_product(&service, &id, "AP1").await?,
            add_product(&service, &id, "AP1").await?,
            add_product(&service, &id, "AP1").await?,
        ]
        .map(|body| body["basket"]["total"].as_str().map(ToString::to_string));

        assert_eq!(
            totals,
            [
                Some("6.69".to_string()),
                Some("12.69".to_string()),
                Some("14.19".to_string())
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn text_receipt_follows_basket_id() -> TestResult {
        let service = farmers_market();
        let id = create_basket(&service).await?;

        add_product(&service, &id, "CF1").await?;
        add_product(&service, &id, "CF1").await?;

        let body = TestClient::get(format!("{BASE}/api/basket/{id}?format=txt"))
            .send(&service)
            .await
            .take_string()
            .await?;

        let expected = format!(
            "Basket: {id}\n{}",
            concat!(
                "Item                          Price\n",
                "----                          -----\n",
                "CF1                           11.23\n",
                "CF1                           11.23\n",
                "            BOGO             -11.23\n",
                "-----------------------------------\n",
                "                              11.23\n",
            )
        );

        assert_eq!(body, expected);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_basket_and_product_are_404() -> TestResult {
        let service = farmers_market();
        let id = create_basket(&service).await?;

        let unknown_product = TestClient::patch(format!("{BASE}/api/basket/{id}/product/XX1"))
            .send(&service)
            .await;

        let unknown_basket =
            TestClient::get(format!("{BASE}/api/basket/{}", uuid::Uuid::now_v7()))
                .send(&service)
                .await;

        assert_eq!(unknown_product.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(unknown_basket.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn serves_openapi_document() -> TestResult {
        let service = farmers_market();

        let doc: Value = TestClient::get(format!("{BASE}{OPENAPI_PATH}"))
            .send(&service)
            .await
            .take_json()
            .await?;

        assert!(doc["paths"]["/api/basket/{id}/product/{code}"]["patch"].is_object());

        Ok(())
    }
}
