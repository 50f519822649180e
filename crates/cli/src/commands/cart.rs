//! Cart commands, all routed through the store's dual-mode dispatch.
//!
//! As a guest these mutate local state only (and are forgotten when the
//! process exits); signed in they hit the server and adopt its view.

use delight_core::ProductId;
use delight_storefront::store::{CartAction, Store};

/// `cart show` - print the cart with derived totals.
#[allow(clippy::print_stdout)]
pub fn show(store: &Store) {
    let cart = store.cart();
    if cart.is_empty() {
        println!("Cart is empty.");
        return;
    }
    for item in &cart {
        println!(
            "{:>6}  {:<40} x{:<3} {:>10}",
            item.product.id,
            item.product.name,
            item.quantity,
            item.line_total().display()
        );
    }
    println!(
        "{} items, total {}",
        store.cart_count(),
        store.cart_total().display()
    );
}

/// `cart add <id>` - add a product by id.
///
/// The product is fetched first so a guest cart line carries real
/// catalog data; an unknown id is an error rather than a silent no-op.
#[allow(clippy::print_stdout)]
pub async fn add(store: &Store, id: &str, quantity: i64) -> Result<(), Box<dyn std::error::Error>> {
    let product = store.api().get_product(&ProductId::new(id)).await?;
    let name = product.name.clone();
    store
        .dispatch_cart(CartAction::Add {
            product: Box::new(product),
            quantity,
        })
        .await;
    println!("Added {name} x{quantity}.");
    show(store);
    Ok(())
}

/// `cart update <id> --quantity N` - set a line's quantity.
#[allow(clippy::print_stdout)]
pub async fn update(store: &Store, id: &str, quantity: i64) {
    store
        .dispatch_cart(CartAction::UpdateQuantity {
            product_id: ProductId::new(id),
            quantity,
        })
        .await;
    show(store);
}

/// `cart remove <id>` - drop a line.
#[allow(clippy::print_stdout)]
pub async fn remove(store: &Store, id: &str) {
    store
        .dispatch_cart(CartAction::Remove {
            product_id: ProductId::new(id),
        })
        .await;
    show(store);
}

/// `cart clear` - empty the cart.
#[allow(clippy::print_stdout)]
pub async fn clear(store: &Store) {
    store.dispatch_cart(CartAction::Clear).await;
    println!("Cart cleared.");
}
