//! Catalog browsing commands.
//!
//! These are read operations: failures are logged and rendered as empty
//! states rather than exiting non-zero.

use delight_core::{Price, Product, ProductId};
use delight_storefront::api::{ApiClient, ProductFilter};
use rust_decimal::Decimal;
use tracing::warn;

/// Assemble a [`ProductFilter`] from command-line flags.
#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
pub fn build_filter(
    name: Option<String>,
    category: Option<String>,
    min_price: Option<String>,
    max_price: Option<String>,
    in_stock: bool,
    featured: bool,
    new: bool,
    page: i64,
    size: i64,
) -> Result<ProductFilter, Box<dyn std::error::Error>> {
    Ok(ProductFilter {
        name,
        category,
        category_id: None,
        min_price: min_price.map(|p| parse_price(&p)).transpose()?,
        max_price: max_price.map(|p| parse_price(&p)).transpose()?,
        in_stock: in_stock.then_some(true),
        featured: featured.then_some(true),
        is_new: new.then_some(true),
        page: Some(page),
        size: Some(size),
    })
}

fn parse_price(s: &str) -> Result<Price, Box<dyn std::error::Error>> {
    let amount: Decimal = s.parse().map_err(|_| format!("invalid price: {s}"))?;
    Ok(Price::new(amount))
}

#[allow(clippy::print_stdout)]
fn print_product_line(product: &Product) {
    let mut flags = String::new();
    if product.featured {
        flags.push_str(" [featured]");
    }
    if product.is_new {
        flags.push_str(" [new]");
    }
    if !product.in_stock {
        flags.push_str(" [out of stock]");
    }
    println!(
        "{:>6}  {:<40} {:>10}{flags}",
        product.id,
        product.name,
        product.price.display()
    );
}

/// `shop products` - list products, optionally filtered.
#[allow(clippy::print_stdout)]
pub async fn products(api: &ApiClient, filter: &ProductFilter) {
    match api.get_products(filter).await {
        Ok(page) => {
            for product in &page.content {
                print_product_line(product);
            }
            println!(
                "page {}/{} ({} products total)",
                page.number + 1,
                page.total_pages.max(1),
                page.total_elements
            );
        }
        Err(e) => {
            warn!(error = %e, "Could not list products");
            println!("No products found.");
        }
    }
}

/// `shop product <id>` - show one product.
#[allow(clippy::print_stdout)]
pub async fn product(api: &ApiClient, id: &str) {
    let id = ProductId::new(id);
    match api.get_product(&id).await {
        Ok(product) => {
            println!("{} - {}", product.id, product.name);
            match &product.original_price {
                Some(original) => println!(
                    "price: {} (was {})",
                    product.price.display(),
                    original.display()
                ),
                None => println!("price: {}", product.price.display()),
            }
            if let Some(category) = &product.category {
                println!("category: {category}");
            }
            if let Some(rating) = product.rating {
                println!("rating: {rating:.1} ({} reviews)", product.reviews);
            }
            if let Some(description) = &product.description {
                println!("\n{description}");
            }
        }
        Err(e) => {
            warn!(error = %e, product_id = %id, "Could not fetch product");
            println!("Product not found.");
        }
    }
}

/// `shop featured` - list featured products.
#[allow(clippy::print_stdout)]
pub async fn featured(api: &ApiClient) {
    match api.get_featured_products().await {
        Ok(products) => products.iter().for_each(print_product_line),
        Err(e) => {
            warn!(error = %e, "Could not list featured products");
            println!("No featured products.");
        }
    }
}

/// `shop new` - list new arrivals.
#[allow(clippy::print_stdout)]
pub async fn new_arrivals(api: &ApiClient) {
    match api.get_new_products().await {
        Ok(products) => products.iter().for_each(print_product_line),
        Err(e) => {
            warn!(error = %e, "Could not list new arrivals");
            println!("No new arrivals.");
        }
    }
}

/// `shop categories` - list categories.
#[allow(clippy::print_stdout)]
pub async fn categories(api: &ApiClient) {
    match api.get_categories().await {
        Ok(categories) => {
            for category in categories {
                println!(
                    "{:>6}  {:<30} {} products",
                    category.id, category.name, category.count
                );
            }
        }
        Err(e) => {
            warn!(error = %e, "Could not list categories");
            println!("No categories.");
        }
    }
}
