//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::products::CatalogError;

pub(crate) fn into_status_error(error: CatalogError) -> StatusError {
    match error {
        CatalogError::NotFound => StatusError::not_found(),
        CatalogError::UnexpectedStatus(status) => {
            error!(status, "catalog responded with unexpected status");

            StatusError::internal_server_error()
        }
        CatalogError::IdMismatch { expected, actual } => {
            error!(%expected, %actual, "catalog returned a different product");

            StatusError::internal_server_error()
        }
        CatalogError::Transport(_) | CatalogError::Encode(_) | CatalogError::Decode(_) => {
            error!(error = ?error, "catalog request failed");

            StatusError::internal_server_error()
        }
    }
}
