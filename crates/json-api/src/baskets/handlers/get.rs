//! Get Basket Handler

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    baskets::{
        errors::into_status_error,
        models::{BasketEnvelope, render_basket},
    },
    extensions::*,
};

/// Get Basket Handler
///
/// Returns a basket with its discounts and total.
#[endpoint(
    tags("baskets"),
    summary = "Get Basket",
    responses(
        (status_code = StatusCode::OK, description = "Basket found", body = BasketEnvelope),
        (status_code = StatusCode::BAD_REQUEST, description = "Unsupported format"),
        (status_code = StatusCode::NOT_FOUND, description = "Basket not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    format: QueryParam<String, false>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let app = depot.app_or_500()?;
    let format = format.into_basket_format()?;

    let basket = app
        .baskets
        .get_basket(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    render_basket(res, &basket, format);

    Ok(())
}

#[cfg(test)]
mod tests {
    use checkout::basket::BasketId;
    use checkout_app::domain::baskets::{BasketsServiceError, MockBasketsService};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{baskets_service, make_basket};

    use super::*;

    fn make_service(baskets: MockBasketsService) -> Service {
        baskets_service(baskets, Router::with_path("api/basket/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut baskets = MockBasketsService::new();
        let uuid = Uuid::now_v7();
        let basket = make_basket(uuid);

        baskets
            .expect_get_basket()
            .once()
            .withf(move |id| *id == BasketId::from(uuid))
            .return_once(move |_| Ok(basket));

        baskets.expect_create_basket().never();
        baskets.expect_add_product().never();

        let mut res = TestClient::get(format!("http://example.com/api/basket/{uuid}"))
            .send(&make_service(baskets))
            .await;

        let body: BasketEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.basket.id, uuid);
        assert_eq!(body.basket.items.len(), 2);
        assert_eq!(body.basket.subtotal, "7.86");
        assert_eq!(body.basket.savings, "4.75");
        assert_eq!(body.basket.total, "3.11");

        let milk = body.basket.items.get(1).ok_or("missing milk")?;
        let discount = milk.discounts.first().ok_or("missing discount")?;

        assert_eq!(milk.code, "MK1");
        assert_eq!(discount.code, "CHMK");
        assert_eq!(discount.amount, "-4.75");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_as_text_renders_receipt() -> TestResult {
        let mut baskets = MockBasketsService::new();
        let uuid = Uuid::now_v7();
        let basket = make_basket(uuid);

        baskets
            .expect_get_basket()
            .once()
            .return_once(move |_| Ok(basket));

        let mut res = TestClient::get(format!("http://example.com/api/basket/{uuid}?format=txt"))
            .send(&make_service(baskets))
            .await;

        let content_type = res
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        let body = res.take_string().await?;

        let expected = format!(
            "Basket: {uuid}\n{}",
            concat!(
                "Item                          Price\n",
                "----                          -----\n",
                "CH1                            3.11\n",
                "MK1                            4.75\n",
                "            CHMK              -4.75\n",
                "-----------------------------------\n",
                "                               3.11\n",
            )
        );

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(content_type.is_some_and(|value| value.starts_with("text/plain")));
        assert_eq!(body, expected);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_basket_returns_404() {
        let mut baskets = MockBasketsService::new();
        let uuid = Uuid::now_v7();

        baskets
            .expect_get_basket()
            .once()
            .return_once(move |id| Err(BasketsServiceError::NotFound(id)));

        baskets.expect_create_basket().never();
        baskets.expect_add_product().never();

        let res = TestClient::get(format!("http://example.com/api/basket/{uuid}"))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_get_malformed_id_returns_400() {
        let mut baskets = MockBasketsService::new();

        baskets.expect_get_basket().never();

        let res = TestClient::get("http://example.com/api/basket/not-a-uuid")
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
