//! Product response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::products::models::{Product, ProductRating};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Catalog-assigned product id
    pub id: u64,

    pub title: String,

    pub price: f64,

    pub description: String,

    pub category: String,

    /// Image URL
    pub image: String,

    /// Customer rating, zeroed until the catalog has one
    pub rating: RatingResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct RatingResponse {
    /// Average rating
    pub rate: f64,

    /// Number of ratings
    pub count: u64,
}

impl From<ProductRating> for RatingResponse {
    fn from(rating: ProductRating) -> Self {
        Self {
            rate: rating.rate,
            count: rating.count,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.get(),
            title: product.title,
            price: product.price,
            description: product.description,
            category: product.category,
            image: product.image,
            rating: product.rating.into(),
        }
    }
}
