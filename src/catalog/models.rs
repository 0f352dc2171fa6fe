use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A purchasable book in the catalog.
///
/// Instances are created at catalog load time and never mutated; the title is
/// the unique lookup key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    #[schema(example = "The Great Gatsby")]
    pub title: String,
    #[schema(example = "F. Scott Fitzgerald")]
    pub author: String,
    #[schema(example = "Fiction")]
    pub category: String,
    /// Unit price, fixed to two decimal places.
    #[schema(value_type = f64, example = 10.99)]
    pub price: Decimal,
    #[schema(example = "/images/books/the_great_gatsby.jpg")]
    pub image_url: String,
    #[schema(example = "A classic American novel about the Jazz Age.")]
    pub description: String,
}

impl Book {
    pub fn new(
        title: &str,
        author: &str,
        category: &str,
        price: Decimal,
        image_url: &str,
        description: &str,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            category: category.trim().to_string(),
            price,
            image_url: image_url.to_string(),
            description: description.to_string(),
        }
    }
}
