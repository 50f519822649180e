//! Product and category entities.

use serde::{Deserialize, Serialize};

use crate::types::id::{CategoryId, ProductId};
use crate::types::price::Price;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Plain text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current price.
    pub price: Price,
    /// Original price if the product is on sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Units left in stock, if tracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_count: Option<i64>,
    /// Main image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Additional image URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Whether the product can currently be bought.
    pub in_stock: bool,
    /// Whether the product is featured on the home page.
    pub featured: bool,
    /// Whether the product is a new arrival.
    ///
    /// The wire key is `new`: the backend's bean introspection strips the
    /// `is` prefix from this flag's accessor.
    #[serde(rename = "new")]
    pub is_new: bool,
    /// Free-form tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Category name, if assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Category ID, if assigned. Arrives as a JSON number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// Average review rating (1.0 to 5.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of reviews.
    pub reviews: i64,
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Description shown on the category page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Banner image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Number of products in the category.
    pub count: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_backend_payload() {
        let json = serde_json::json!({
            "id": "7",
            "name": "Neon Flamingo",
            "description": "A flamingo that glows.",
            "price": 49.99,
            "originalPrice": 59.99,
            "stockCount": 12,
            "image": "/uploads/products/flamingo.jpg",
            "images": ["/uploads/products/flamingo.jpg"],
            "inStock": true,
            "featured": true,
            "new": false,
            "tags": ["neon", "bird"],
            "category": "Signs",
            "categoryId": 3,
            "rating": 4.5,
            "reviews": 17
        });

        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.id, ProductId::new("7"));
        assert_eq!(product.price.display(), "$49.99");
        assert_eq!(product.category_id, Some(CategoryId::new("3")));
        assert!(!product.is_new);
        assert_eq!(product.reviews, 17);
    }

    #[test]
    fn test_product_tolerates_missing_optionals() {
        let json = serde_json::json!({
            "id": "8",
            "name": "Bare Bulb",
            "price": 5,
            "inStock": false,
            "featured": false,
            "new": true,
            "reviews": 0
        });

        let product: Product = serde_json::from_value(json).unwrap();
        assert!(product.description.is_none());
        assert!(product.category_id.is_none());
        assert!(product.is_new);
    }

    #[test]
    fn test_product_serializes_new_flag_key() {
        let product = Product {
            id: ProductId::new("1"),
            name: "Glow Arrow".to_string(),
            description: None,
            price: Price::new("10.00".parse().unwrap()),
            original_price: None,
            stock_count: None,
            image: None,
            images: None,
            in_stock: true,
            featured: false,
            is_new: true,
            tags: None,
            category: None,
            category_id: None,
            rating: None,
            reviews: 0,
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["new"], true);
        assert!(value.get("isNew").is_none());
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_category_deserializes_numeric_id() {
        let json = serde_json::json!({
            "id": "3",
            "name": "Signs",
            "count": 12
        });

        let category: Category = serde_json::from_value(json).unwrap();
        assert_eq!(category.id, CategoryId::new("3"));
        assert_eq!(category.count, 12);
    }
}
