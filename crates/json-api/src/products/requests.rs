//! Product request bodies and their validation.

use salvo::{http::uri::Uri, oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_app::domain::products::{
    commands::{AddProductCommand, UpdateProductCommand},
    models::ProductId,
};

use crate::extensions::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum ProductRequestError {
    #[error("title is required")]
    MissingTitle,

    #[error("price must not be negative")]
    NegativePrice,

    #[error("image is required")]
    MissingImage,

    #[error("image must be an absolute URL")]
    InvalidImage,
}

/// Product Request
///
/// Body of both create and update. Missing fields default to empty values
/// and are then validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct ProductRequest {
    /// Product title; surrounding whitespace is ignored
    pub title: String,

    /// Unit price, zero or more
    pub price: f64,

    /// Free-form description
    pub description: String,

    /// Catalog category; surrounding whitespace is ignored
    pub category: String,

    /// Absolute image URL
    pub image: String,
}

impl ProductRequest {
    fn validated(self) -> Result<Self, ProductRequestError> {
        let title = self.title.trim();
        let category = self.category.trim();

        if title.is_empty() {
            return Err(ProductRequestError::MissingTitle);
        }

        if self.price < 0.0 {
            return Err(ProductRequestError::NegativePrice);
        }

        if self.image.is_empty() {
            return Err(ProductRequestError::MissingImage);
        }

        if !is_absolute_url(&self.image) {
            return Err(ProductRequestError::InvalidImage);
        }

        Ok(Self {
            title: title.to_string(),
            category: category.to_string(),
            ..self
        })
    }

    pub(crate) fn into_add_command(self) -> Result<AddProductCommand, StatusError> {
        let request = self.validated().or_400()?;

        AddProductCommand::new(
            &request.title,
            request.price,
            request.description,
            &request.category,
            request.image,
        )
        .or_400()
    }

    pub(crate) fn into_update_command(
        self,
        id: ProductId,
    ) -> Result<UpdateProductCommand, StatusError> {
        let request = self.validated().or_400()?;

        UpdateProductCommand::new(
            id,
            &request.title,
            request.price,
            request.description,
            &request.category,
            request.image,
        )
        .or_400()
    }
}

fn is_absolute_url(value: &str) -> bool {
    value
        .parse::<Uri>()
        .is_ok_and(|uri| uri.scheme().is_some() && uri.host().is_some_and(|host| !host.is_empty()))
}
