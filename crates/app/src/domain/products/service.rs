//! Products service.
//!
//! Normalises the catalog's conventions into one contract:
//! - a missing product on `GET` is a `200` with an empty body;
//! - writes answer `200` and echo back little more than an id;
//! - a missing product on `DELETE` is a `200` with the literal `null`.
//!
//! All of these come out as [`CatalogError::NotFound`] or a full [`Product`].

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::products::{
    catalog::{CatalogMethod, CatalogRequest, CatalogResponse, CatalogTransport},
    commands::{AddProductCommand, ProductFields, UpdateProductCommand},
    errors::CatalogError,
    models::{Product, ProductEcho, ProductId},
};

/// Upstream page size; only used to pre-size the list.
const DEFAULT_COLLECTION_SIZE: usize = 20;

/// Read ceiling for regular catalog responses.
const RESPONSE_MAX_SIZE: usize = 102_400;

/// Just enough to tell `null` apart from a deleted product.
const DELETE_RESPONSE_MAX_SIZE: usize = 4;

const HTTP_OK: u16 = 200;

/// Products service backed by the remote catalog.
#[derive(Clone)]
pub struct CatalogProductsService {
    transport: Arc<dyn CatalogTransport>,
}

impl std::fmt::Debug for CatalogProductsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogProductsService").finish_non_exhaustive()
    }
}

impl CatalogProductsService {
    /// Builds the service over a catalog transport.
    #[must_use]
    pub fn new(transport: Arc<dyn CatalogTransport>) -> Self {
        Self { transport }
    }

    async fn call(
        &self,
        method: CatalogMethod,
        path: String,
        body: Option<&ProductFields>,
        read_limit: usize,
    ) -> Result<Vec<u8>, CatalogError> {
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(CatalogError::Encode)?;

        let CatalogResponse { status, body } = self
            .transport
            .send(CatalogRequest {
                method,
                path,
                body,
                read_limit,
            })
            .await?;

        if status != HTTP_OK {
            warn!(status, "catalog responded with unexpected status");

            return Err(CatalogError::UnexpectedStatus(status));
        }

        Ok(body)
    }
}

#[async_trait]
impl ProductsService for CatalogProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let body = self
            .call(
                CatalogMethod::Get,
                products_path(),
                None,
                RESPONSE_MAX_SIZE,
            )
            .await?;

        let mut products = Vec::with_capacity(DEFAULT_COLLECTION_SIZE);

        products.extend(decode::<Vec<Product>>(&body)?);

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, CatalogError> {
        let body = self
            .call(
                CatalogMethod::Get,
                product_path(product),
                None,
                RESPONSE_MAX_SIZE,
            )
            .await?;

        if body.is_empty() {
            return Err(CatalogError::NotFound);
        }

        decode(&body)
    }

    async fn add_product(&self, command: AddProductCommand) -> Result<Product, CatalogError> {
        let fields = command.fields();

        let body = self
            .call(
                CatalogMethod::Post,
                products_path(),
                Some(fields),
                RESPONSE_MAX_SIZE,
            )
            .await?;

        let echo: ProductEcho = decode(&body)?;

        Ok(echo.merge_into(fields.to_product(ProductId::new(0))))
    }

    async fn update_product(&self, command: UpdateProductCommand) -> Result<Product, CatalogError> {
        let expected = command.id();
        let fields = command.fields();

        let body = self
            .call(
                CatalogMethod::Put,
                product_path(expected),
                Some(fields),
                RESPONSE_MAX_SIZE,
            )
            .await?;

        let echo: ProductEcho = decode(&body)?;
        let product = echo.merge_into(fields.to_product(expected));

        if product.id != expected {
            return Err(CatalogError::IdMismatch {
                expected,
                actual: product.id,
            });
        }

        Ok(product)
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), CatalogError> {
        let body = self
            .call(
                CatalogMethod::Delete,
                product_path(product),
                None,
                DELETE_RESPONSE_MAX_SIZE,
            )
            .await?;

        if body == b"null" {
            return Err(CatalogError::NotFound);
        }

        Ok(())
    }
}

fn products_path() -> String {
    "/products".to_string()
}

fn product_path(product: ProductId) -> String {
    format!("/products/{product}")
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, CatalogError> {
    serde_json::from_slice(body).map_err(CatalogError::Decode)
}

/// Product operations against the catalog.
#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves every product in the catalog.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Retrieves a single product.
    async fn get_product(&self, product: ProductId) -> Result<Product, CatalogError>;

    /// Adds a product and returns it with its catalog-assigned id.
    async fn add_product(&self, command: AddProductCommand) -> Result<Product, CatalogError>;

    /// Replaces the mutable fields of an existing product.
    async fn update_product(&self, command: UpdateProductCommand) -> Result<Product, CatalogError>;

    /// Deletes a product.
    async fn delete_product(&self, product: ProductId) -> Result<(), CatalogError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::products::catalog::MockCatalogTransport;

    use super::*;

    const IMAGE: &str = "https://fakestoreapi.com/img/71li-ujtlUL._AC_UX679_.jpg";

    const PRODUCT_16_JSON: &str = r#"{
        "id": 16,
        "title": "Lock and Love Women's Removable Hooded Faux Leather Moto Biker Jacket",
        "price": 29.95,
        "description": "100% POLYURETHANE(shell) 100% POLYESTER(lining) 75% POLYESTER 25% COTTON (SWEATER)",
        "category": "women's clothing",
        "image": "https://fakestoreapi.com/img/81XH0e8fefL._AC_UY879_.jpg",
        "rating": { "rate": 2.9, "count": 340 }
    }"#;

    fn respond(status: u16, body: &str) -> CatalogResponse {
        CatalogResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    fn service_answering(
        expect: impl Fn(&CatalogRequest) -> bool + Send + 'static,
        response: CatalogResponse,
    ) -> CatalogProductsService {
        let mut transport = MockCatalogTransport::new();

        transport
            .expect_send()
            .once()
            .withf(expect)
            .return_once(move |_| Ok(response));

        CatalogProductsService::new(Arc::new(transport))
    }

    fn add_command() -> AddProductCommand {
        match AddProductCommand::new("Mens Casual Slim Fit", 15.99, "slim", "men's clothing", IMAGE)
        {
            Ok(command) => command,
            Err(error) => unreachable!("fixture command is valid: {error}"),
        }
    }

    fn update_command(id: u64) -> UpdateProductCommand {
        match UpdateProductCommand::new(
            ProductId::new(id),
            "Mens Casual Slim Fit",
            15.99,
            "slim",
            "men's clothing",
            IMAGE,
        ) {
            Ok(command) => command,
            Err(error) => unreachable!("fixture command is valid: {error}"),
        }
    }

    #[tokio::test]
    async fn list_products_decodes_collection() -> TestResult {
        let service = service_answering(
            |request| {
                request.method == CatalogMethod::Get
                    && request.path == "/products"
                    && request.body.is_none()
                    && request.read_limit == RESPONSE_MAX_SIZE
            },
            respond(HTTP_OK, &format!("[{PRODUCT_16_JSON}]")),
        );

        let products = service.list_products().await?;

        assert_eq!(products.len(), 1, "expected one product");
        assert_eq!(products.first().map(|p| p.id), Some(ProductId::new(16)));

        Ok(())
    }

    #[tokio::test]
    async fn list_products_non_200_is_upstream_error() {
        let service = service_answering(|_| true, respond(500, ""));

        let result = service.list_products().await;

        assert!(
            matches!(result, Err(CatalogError::UnexpectedStatus(500))),
            "expected UnexpectedStatus(500), got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_product_decodes_body() -> TestResult {
        let service = service_answering(
            |request| request.method == CatalogMethod::Get && request.path == "/products/16",
            respond(HTTP_OK, PRODUCT_16_JSON),
        );

        let product = service.get_product(ProductId::new(16)).await?;

        assert_eq!(product.id, ProductId::new(16));
        assert_eq!(product.category, "women's clothing");
        assert_eq!(product.rating.count, 340);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_empty_body_is_not_found() {
        let service = service_answering(|_| true, respond(HTTP_OK, ""));

        let result = service.get_product(ProductId::new(1337)).await;

        assert!(
            matches!(result, Err(CatalogError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_product_non_200_is_upstream_error() {
        let service = service_answering(|_| true, respond(502, ""));

        let result = service.get_product(ProductId::new(16)).await;

        assert!(
            matches!(result, Err(CatalogError::UnexpectedStatus(502))),
            "expected UnexpectedStatus(502), got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_product_garbage_body_is_decode_error() {
        let service = service_answering(|_| true, respond(HTTP_OK, "<html>"));

        let result = service.get_product(ProductId::new(16)).await;

        assert!(
            matches!(result, Err(CatalogError::Decode(_))),
            "expected Decode, got {result:?}"
        );
    }

    #[tokio::test]
    async fn add_product_posts_fields_and_merges_assigned_id() -> TestResult {
        let service = service_answering(
            |request| {
                let Some(body) = request.body.as_deref() else {
                    return false;
                };

                let Ok(payload) = serde_json::from_slice::<serde_json::Value>(body) else {
                    return false;
                };

                request.method == CatalogMethod::Post
                    && request.path == "/products"
                    && payload
                        == serde_json::json!({
                            "title": "Mens Casual Slim Fit",
                            "price": 15.99,
                            "description": "slim",
                            "category": "men's clothing",
                            "image": IMAGE,
                        })
            },
            respond(HTTP_OK, r#"{"id":21}"#),
        );

        let product = service.add_product(add_command()).await?;

        assert_eq!(product.id, ProductId::new(21));
        assert_eq!(product.title, "Mens Casual Slim Fit");
        assert_eq!(product.image, IMAGE);
        assert_eq!(product.rating.count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn add_product_non_200_is_upstream_error() {
        let service = service_answering(|_| true, respond(500, ""));

        let result = service.add_product(add_command()).await;

        assert!(
            matches!(result, Err(CatalogError::UnexpectedStatus(500))),
            "expected UnexpectedStatus(500), got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_product_reembeds_missing_id() -> TestResult {
        let service = service_answering(
            |request| request.method == CatalogMethod::Put && request.path == "/products/7",
            respond(HTTP_OK, r#"{"title":"Mens Casual Slim Fit"}"#),
        );

        let product = service.update_product(update_command(7)).await?;

        assert_eq!(product.id, ProductId::new(7));

        Ok(())
    }

    #[tokio::test]
    async fn update_product_id_mismatch_is_integrity_error() {
        let service = service_answering(|_| true, respond(HTTP_OK, r#"{"id":8}"#));

        let result = service.update_product(update_command(7)).await;

        assert!(
            matches!(
                result,
                Err(CatalogError::IdMismatch { expected, actual })
                    if expected == ProductId::new(7) && actual == ProductId::new(8)
            ),
            "expected IdMismatch, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_product_null_is_not_found() {
        let service = service_answering(
            |request| {
                request.method == CatalogMethod::Delete
                    && request.path == "/products/1337"
                    && request.read_limit == DELETE_RESPONSE_MAX_SIZE
            },
            respond(HTTP_OK, "null"),
        );

        let result = service.delete_product(ProductId::new(1337)).await;

        assert!(
            matches!(result, Err(CatalogError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_product_with_resource_body_succeeds() -> TestResult {
        let service = service_answering(|_| true, respond(HTTP_OK, r#"{"id"#));

        service.delete_product(ProductId::new(16)).await?;

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_non_200_is_upstream_error() {
        let service = service_answering(|_| true, respond(404, ""));

        let result = service.delete_product(ProductId::new(16)).await;

        assert!(
            matches!(result, Err(CatalogError::UnexpectedStatus(404))),
            "expected UnexpectedStatus(404), got {result:?}"
        );
    }
}
