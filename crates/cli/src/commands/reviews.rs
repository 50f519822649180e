//! Product review commands.

use delight_core::ProductId;
use delight_storefront::api::{ApiClient, CreateReviewRequest};
use tracing::warn;

/// `reviews list <product-id>` - page through a product's reviews.
#[allow(clippy::print_stdout)]
pub async fn list(api: &ApiClient, product_id: &str, page: i64, size: i64) {
    let product_id = ProductId::new(product_id);
    match api.get_product_reviews(&product_id, page, size).await {
        Ok(reviews) => {
            if reviews.content.is_empty() {
                println!("No reviews yet.");
                return;
            }
            for review in &reviews.content {
                let stars = "*".repeat(usize::try_from(review.rating.clamp(0, 5)).unwrap_or(0));
                println!(
                    "{:<5} {} ({})",
                    stars,
                    review.user_name,
                    review.created_at.format("%Y-%m-%d")
                );
                if let Some(comment) = &review.comment {
                    println!("      {comment}");
                }
            }
            println!(
                "page {}/{} ({} reviews total)",
                reviews.number + 1,
                reviews.total_pages.max(1),
                reviews.total_elements
            );
        }
        Err(e) => {
            warn!(error = %e, product_id = %product_id, "Could not list reviews");
            println!("No reviews found.");
        }
    }
}

/// `reviews add <product-id> --rating N` - post a review.
#[allow(clippy::print_stdout)]
pub async fn add(
    api: &ApiClient,
    product_id: &str,
    rating: i32,
    comment: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let review = api
        .create_review(&CreateReviewRequest {
            product_id: ProductId::new(product_id),
            rating,
            comment,
        })
        .await?;
    println!("Review {} posted ({} stars).", review.id, review.rating);
    Ok(())
}
