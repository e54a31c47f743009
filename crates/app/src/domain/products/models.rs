//! Product Models

use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product Model
///
/// Products live in the upstream catalog only; this is the shape it returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-assigned id.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: f64,
    /// Free-form description.
    pub description: String,
    /// Catalog category.
    pub category: String,
    /// Absolute image URL.
    pub image: String,
    /// Zeroed when the catalog omits it.
    #[serde(default)]
    pub rating: ProductRating,
}

/// Product Rating, populated by the catalog only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRating {
    /// Average rating.
    pub rate: f64,
    /// Number of ratings.
    pub count: u64,
}

/// Fields the catalog echoed back after a write.
///
/// The catalog usually answers writes with `{"id": n}` only, so every field
/// is optional and [`ProductEcho::merge_into`] keeps whatever is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ProductEcho {
    #[serde(default)]
    id: Option<ProductId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    rating: Option<ProductRating>,
}

impl ProductEcho {
    pub(crate) fn merge_into(self, mut product: Product) -> Product {
        if let Some(id) = self.id {
            product.id = id;
        }

        if let Some(title) = self.title {
            product.title = title;
        }

        if let Some(price) = self.price {
            product.price = price;
        }

        if let Some(description) = self.description {
            product.description = description;
        }

        if let Some(category) = self.category {
            product.category = category;
        }

        if let Some(image) = self.image {
            product.image = image;
        }

        if let Some(rating) = self.rating {
            product.rating = rating;
        }

        product
    }
}
