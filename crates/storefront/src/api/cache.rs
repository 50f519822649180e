//! Cache types for catalog responses.

use delight_core::{Category, Page, Product};

/// Cached value types.
///
/// Only catalog reads land here; cart, wishlist, orders, reviews, and
/// user data are always fetched fresh.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Box<Product>),
    Products(Page<Product>),
    ProductList(Vec<Product>),
    Category(Box<Category>),
    Categories(Vec<Category>),
}
