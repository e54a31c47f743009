//! Product Commands
//!
//! Write intents sent to the catalog. Both commands can only be built through
//! their validating constructors, and expose read-only accessors afterwards.

use thiserror::Error;

use crate::domain::products::models::{Product, ProductId, ProductRating};

/// Rules a product command failed, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProductCommandError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("price must not be negative")]
    NegativePrice,

    #[error("undefined category")]
    UndefinedCategory,
}

/// Add Product Command
#[derive(Debug, Clone, PartialEq)]
pub struct AddProductCommand {
    fields: ProductFields,
}

impl AddProductCommand {
    /// Validates and builds an add command.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: empty title, then negative price,
    /// then empty category.
    pub fn new(
        title: &str,
        price: f64,
        description: impl Into<String>,
        category: &str,
        image: impl Into<String>,
    ) -> Result<Self, ProductCommandError> {
        Ok(Self {
            fields: ProductFields::validate(title, price, description, category, image)?,
        })
    }

    /// The title.
    pub fn title(&self) -> &str {
        &self.fields.title
    }

    /// The price.
    pub fn price(&self) -> f64 {
        self.fields.price
    }

    /// The description.
    pub fn description(&self) -> &str {
        &self.fields.description
    }

    /// The category.
    pub fn category(&self) -> &str {
        &self.fields.category
    }

    /// The image.
    pub fn image(&self) -> &str {
        &self.fields.image
    }

    pub(crate) fn fields(&self) -> &ProductFields {
        &self.fields
    }
}

/// Update Product Command
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductCommand {
    id: ProductId,
    fields: ProductFields,
}

impl UpdateProductCommand {
    /// Validates and builds an update command for product `id`.
    ///
    /// # Errors
    ///
    /// Same rules and precedence as [`AddProductCommand::new`].
    pub fn new(
        id: ProductId,
        title: &str,
        price: f64,
        description: impl Into<String>,
        category: &str,
        image: impl Into<String>,
    ) -> Result<Self, ProductCommandError> {
        Ok(Self {
            id,
            fields: ProductFields::validate(title, price, description, category, image)?,
        })
    }

    /// The target id.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// The title.
    pub fn title(&self) -> &str {
        &self.fields.title
    }

    /// The price.
    pub fn price(&self) -> f64 {
        self.fields.price
    }

    /// The description.
    pub fn description(&self) -> &str {
        &self.fields.description
    }

    /// The category.
    pub fn category(&self) -> &str {
        &self.fields.category
    }

    /// The image.
    pub fn image(&self) -> &str {
        &self.fields.image
    }

    pub(crate) fn fields(&self) -> &ProductFields {
        &self.fields
    }
}

/// The five mutable product fields, already validated.
///
/// Serialises to the catalog's write payload.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub(crate) struct ProductFields {
    title: String,
    price: f64,
    description: String,
    category: String,
    image: String,
}

impl ProductFields {
    fn validate(
        title: &str,
        price: f64,
        description: impl Into<String>,
        category: &str,
        image: impl Into<String>,
    ) -> Result<Self, ProductCommandError> {
        let title = title.trim();

        if title.is_empty() {
            return Err(ProductCommandError::EmptyTitle);
        }

        if price < 0.0 || price.is_nan() {
            return Err(ProductCommandError::NegativePrice);
        }

        let category = category.trim();

        if category.is_empty() {
            return Err(ProductCommandError::UndefinedCategory);
        }

        Ok(Self {
            title: title.to_string(),
            price,
            description: description.into(),
            category: category.to_string(),
            image: image.into(),
        })
    }

    /// Builds the product these fields describe, before the catalog has said
    /// anything about it.
    pub(crate) fn to_product(&self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title.clone(),
            price: self.price,
            description: self.description.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
            rating: ProductRating::default(),
        }
    }
}
