//! Update Product Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use storefront_app::domain::products::models::ProductId;

use crate::{
    extensions::*,
    products::{errors::into_status_error, requests::ProductRequest, responses::ProductResponse},
};

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let id = ProductId::new(id.into_inner());

    tracing::Span::current().record("product_id", tracing::field::display(id));

    let command = json.into_inner().into_update_command(id)?;

    let product = state
        .app
        .products
        .update_product(command)
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_id = %id, "updated product");

    Ok(Json(product.into()))
}
