//! Wishlist commands, routed through the store's dual-mode dispatch.

use delight_core::ProductId;
use delight_storefront::store::{Store, WishlistAction};

/// `wishlist show` - print the saved products.
#[allow(clippy::print_stdout)]
pub fn show(store: &Store) {
    let wishlist = store.wishlist();
    if wishlist.is_empty() {
        println!("Wishlist is empty.");
        return;
    }
    for product in &wishlist {
        println!(
            "{:>6}  {:<40} {:>10}",
            product.id,
            product.name,
            product.price.display()
        );
    }
}

/// `wishlist add <id>` - save a product.
#[allow(clippy::print_stdout)]
pub async fn add(store: &Store, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let product = store.api().get_product(&ProductId::new(id)).await?;
    let name = product.name.clone();
    store
        .dispatch_wishlist(WishlistAction::Add {
            product: Box::new(product),
        })
        .await;
    println!("Saved {name}.");
    Ok(())
}

/// `wishlist remove <id>` - drop a saved product.
#[allow(clippy::print_stdout)]
pub async fn remove(store: &Store, id: &str) {
    store
        .dispatch_wishlist(WishlistAction::Remove {
            product_id: ProductId::new(id),
        })
        .await;
    show(store);
}
