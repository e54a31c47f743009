//! Delete Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::products::models::ProductId;

use crate::{extensions::*, products::errors::into_status_error};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.delete",
    skip(id, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let id = ProductId::new(id.into_inner());

    tracing::Span::current().record("product_id", tracing::field::display(id));

    state
        .app
        .products
        .delete_product(id)
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_id = %id, "deleted product");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::products::{CatalogError, MockProductsService};

    use crate::test_helpers::{products_service, strict_products_mock};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_product_success_returns_204() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .withf(|id| *id == ProductId::new(16))
            .return_once(|_| Ok(()));

        let mut res = TestClient::delete("http://example.com/products/16")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
        assert!(res.take_string().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_not_found_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .return_once(|_| Err(CatalogError::NotFound));

        let res = TestClient::delete("http://example.com/products/1337")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_negative_id_returns_400() -> TestResult {
        let res = TestClient::delete("http://example.com/products/-1")
            .send(&make_service(strict_products_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
