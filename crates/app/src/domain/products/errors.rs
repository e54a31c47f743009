//! Catalog errors.

use thiserror::Error;

use crate::domain::products::models::ProductId;

/// Catalog client error variants.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no product with the requested id, however it chose to
    /// say so.
    #[error("product not found")]
    NotFound,

    /// Any status other than `200 OK`.
    #[error("catalog responded with status {0}")]
    UnexpectedStatus(u16),

    /// Connection, timeout or body read failure.
    #[error("catalog request failed")]
    Transport(#[source] reqwest::Error),

    /// The request payload could not be serialised.
    #[error("could not encode catalog request body")]
    Encode(#[source] serde_json::Error),

    /// The response body is not the expected JSON.
    #[error("could not decode catalog response body")]
    Decode(#[source] serde_json::Error),

    /// The catalog answered for a different product than requested.
    #[error("expected product id {expected}, got {actual}")]
    IdMismatch {
        /// Id the request was made for.
        expected: ProductId,

        /// Id the catalog returned.
        actual: ProductId,
    },
}

impl From<reqwest::Error> for CatalogError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error)
    }
}
