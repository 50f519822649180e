//! Order history and checkout commands.
//!
//! Listing and showing orders render empty states on failure; placing
//! and cancelling propagate errors.

use delight_core::{Order, OrderId};
use delight_storefront::store::Store;
use tracing::warn;

#[allow(clippy::print_stdout)]
fn print_order_line(order: &Order) {
    println!(
        "{:>6}  {}  {:<10} {:>10}  {} items",
        order.id,
        order.created_at.format("%Y-%m-%d"),
        order.status.to_string(),
        order.total_amount.display(),
        order.items.len()
    );
}

/// `orders list` - page through your order history.
#[allow(clippy::print_stdout)]
pub async fn list(store: &Store, page: i64, size: i64) {
    match store.api().get_orders(page, size).await {
        Ok(orders) => {
            if orders.content.is_empty() {
                println!("No orders yet.");
                return;
            }
            for order in &orders.content {
                print_order_line(order);
            }
            println!(
                "page {}/{} ({} orders total)",
                orders.number + 1,
                orders.total_pages.max(1),
                orders.total_elements
            );
        }
        Err(e) => {
            warn!(error = %e, "Could not list orders");
            println!("No orders found.");
        }
    }
}

/// `orders show <id>` - print one order with its line items.
#[allow(clippy::print_stdout)]
pub async fn show(store: &Store, id: &str) {
    let id = OrderId::new(id);
    match store.api().get_order(&id).await {
        Ok(order) => {
            println!("Order {} ({})", order.id, order.status);
            println!("placed: {}", order.created_at.format("%Y-%m-%d %H:%M"));
            println!("ship to: {}", order.shipping_address);
            println!("payment: {}", order.payment_status);
            for item in &order.items {
                println!(
                    "{:>6}  {:<40} x{:<3} {:>10}",
                    item.product_id,
                    item.product_name,
                    item.quantity,
                    item.price.display()
                );
            }
            println!("total {}", order.total_amount.display());
        }
        Err(e) => {
            warn!(error = %e, order_id = %id, "Could not fetch order");
            println!("Order not found.");
        }
    }
}

/// `orders place` - check out the current cart.
#[allow(clippy::print_stdout)]
pub async fn place(
    store: &Store,
    shipping_address: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let order = store.place_order(shipping_address).await?;
    println!(
        "Order {} placed: {} for {} items, shipping to {}.",
        order.id,
        order.total_amount.display(),
        order.items.iter().map(|i| i.quantity).sum::<i64>(),
        order.shipping_address
    );
    Ok(())
}

/// `orders cancel <id>` - cancel a pending order.
///
/// Ineligible orders are refused before any cancel request is sent, the
/// same gate the backend enforces.
#[allow(clippy::print_stdout)]
pub async fn cancel(store: &Store, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let id = OrderId::new(id);
    let order = store.api().get_order(&id).await?;
    if !order.status.is_cancellable() {
        return Err(format!("order {id} is {} and can no longer be cancelled", order.status).into());
    }

    let order = store.api().cancel_order(&id).await?;
    println!("Order {} is now {}.", order.id, order.status);
    Ok(())
}
