//! Back-office commands.
//!
//! Admin operations are transactional; every failure propagates and
//! exits non-zero. Catalog mutations also drop the local catalog cache
//! so a follow-up `shop` command reads fresh data.

use delight_core::{
    CategoryId, OrderId, OrderStatus, Price, ProductId, Role, UploadKind, User, UserId,
};
use rust_decimal::Decimal;

use super::AdminContext;
use delight_admin::api::{CategoryInput, ProductInput};

/// `admin dashboard` - aggregate store statistics.
#[allow(clippy::print_stdout)]
pub async fn dashboard(ctx: &AdminContext) -> Result<(), Box<dyn std::error::Error>> {
    let stats = ctx.admin.dashboard().await?;
    println!(
        "users: {}  products: {}  orders: {}",
        stats.total_users, stats.total_products, stats.total_orders
    );
    println!("revenue all-time: {}", stats.total_revenue.display());
    println!(
        "orders today/week/month: {} / {} / {}",
        stats.orders_today, stats.orders_this_week, stats.orders_this_month
    );
    println!(
        "revenue today/week/month: {} / {} / {}",
        stats.revenue_today.display(),
        stats.revenue_this_week.display(),
        stats.revenue_this_month.display()
    );
    println!(
        "fulfilment: {} pending, {} shipped, {} delivered",
        stats.pending_orders, stats.shipped_orders, stats.delivered_orders
    );
    Ok(())
}

/// `admin analytics --days N` - chart data for the last N days.
#[allow(clippy::print_stdout)]
pub async fn analytics(ctx: &AdminContext, days: u32) -> Result<(), Box<dyn std::error::Error>> {
    let analytics = ctx.admin.analytics(days).await?;

    println!("Daily sales (last {days} days):");
    for day in &analytics.daily_stats {
        println!(
            "  {}  {:>4} orders  {:>10}",
            day.date,
            day.orders,
            day.revenue.display()
        );
    }

    println!("By category:");
    for sales in &analytics.category_sales {
        println!(
            "  {:<24} {:>4} orders  {:>10}",
            sales.category,
            sales.orders,
            sales.revenue.display()
        );
    }

    println!("Top products:");
    for product in &analytics.top_products {
        println!("  {:<40} {:>4} sold", product.name, product.sold);
    }

    let breakdown = &analytics.order_status_breakdown;
    println!(
        "Orders by status: {} pending, {} confirmed, {} shipped, {} delivered, {} cancelled",
        breakdown.pending,
        breakdown.confirmed,
        breakdown.shipped,
        breakdown.delivered,
        breakdown.cancelled
    );
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_user_line(user: &User) {
    let state = if user.enabled { "" } else { " [disabled]" };
    println!(
        "{:>6}  {:<30} {:<30} {}{state}",
        user.id, user.name, user.email, user.role
    );
}

/// `admin users` - page through user accounts.
#[allow(clippy::print_stdout)]
pub async fn users(
    ctx: &AdminContext,
    page: i64,
    size: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let users = ctx.admin.list_users(page, size).await?;
    for user in &users.content {
        print_user_line(user);
    }
    println!(
        "page {}/{} ({} users total)",
        users.number + 1,
        users.total_pages.max(1),
        users.total_elements
    );
    Ok(())
}

/// `admin user-role <id> <role>` - assign a role to a user.
#[allow(clippy::print_stdout)]
pub async fn user_role(
    ctx: &AdminContext,
    id: &str,
    role: Role,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = ctx.admin.set_user_role(&UserId::new(id), role).await?;
    println!("{} is now {}.", user.email, user.role);
    Ok(())
}

/// `admin user-toggle <id>` - flip a user's enabled flag.
#[allow(clippy::print_stdout)]
pub async fn user_toggle(ctx: &AdminContext, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let user = ctx.admin.toggle_user_enabled(&UserId::new(id)).await?;
    let state = if user.enabled { "enabled" } else { "disabled" };
    println!("{} is now {state}.", user.email);
    Ok(())
}

/// `admin user-delete <id>` - delete a user account.
#[allow(clippy::print_stdout)]
pub async fn user_delete(ctx: &AdminContext, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    ctx.admin.delete_user(&UserId::new(id)).await?;
    println!("User {id} deleted.");
    Ok(())
}

/// `admin orders` - page through every order in the store.
#[allow(clippy::print_stdout)]
pub async fn orders(
    ctx: &AdminContext,
    page: i64,
    size: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let orders = ctx.admin.list_orders(page, size).await?;
    for order in &orders.content {
        println!(
            "{:>6}  {}  {:<10} {:>10}  {}",
            order.id,
            order.created_at.format("%Y-%m-%d"),
            order.status.to_string(),
            order.total_amount.display(),
            order.user_email
        );
    }
    println!(
        "page {}/{} ({} orders total)",
        orders.number + 1,
        orders.total_pages.max(1),
        orders.total_elements
    );
    Ok(())
}

/// `admin order-status <id> <status>` - move an order to a new status.
#[allow(clippy::print_stdout)]
pub async fn order_status(
    ctx: &AdminContext,
    id: &str,
    status: OrderStatus,
) -> Result<(), Box<dyn std::error::Error>> {
    let order = ctx
        .admin
        .update_order_status(&OrderId::new(id), status)
        .await?;
    println!("Order {} is now {}.", order.id, order.status);
    Ok(())
}

/// Assemble a [`ProductInput`] from command-line flags.
#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
pub fn build_product_input(
    name: String,
    price: &str,
    description: Option<String>,
    image: Option<String>,
    stock: Option<i64>,
    category_id: Option<String>,
    featured: bool,
    new: bool,
) -> Result<ProductInput, Box<dyn std::error::Error>> {
    let amount: Decimal = price
        .parse()
        .map_err(|_| format!("invalid price: {price}"))?;
    Ok(ProductInput {
        name,
        description,
        price: Price::new(amount),
        original_price: None,
        stock_count: stock,
        image,
        images: None,
        in_stock: stock.is_none_or(|count| count > 0),
        featured,
        is_new: new,
        tags: None,
        category_id: category_id.map(CategoryId::new),
    })
}

/// `admin product-create` - add a product to the catalog.
#[allow(clippy::print_stdout)]
pub async fn product_create(
    ctx: &AdminContext,
    input: &ProductInput,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = ctx.admin.create_product(input).await?;
    ctx.storefront.invalidate_catalog().await;
    println!(
        "Product {} created: {} at {}.",
        product.id,
        product.name,
        product.price.display()
    );
    Ok(())
}

/// `admin product-delete <id>` - remove a product.
#[allow(clippy::print_stdout)]
pub async fn product_delete(ctx: &AdminContext, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::new(id);
    ctx.admin.delete_product(&id).await?;
    ctx.storefront.invalidate_product(&id).await;
    ctx.storefront.invalidate_catalog().await;
    println!("Product {id} deleted.");
    Ok(())
}

/// `admin category-create` - add a category.
#[allow(clippy::print_stdout)]
pub async fn category_create(
    ctx: &AdminContext,
    name: String,
    description: Option<String>,
    image: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let category = ctx
        .admin
        .create_category(&CategoryInput {
            name,
            description,
            image,
        })
        .await?;
    ctx.storefront.invalidate_catalog().await;
    println!("Category {} created: {}.", category.id, category.name);
    Ok(())
}

/// `admin category-delete <id>` - remove a category.
#[allow(clippy::print_stdout)]
pub async fn category_delete(
    ctx: &AdminContext,
    id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    ctx.admin.delete_category(&CategoryId::new(id)).await?;
    ctx.storefront.invalidate_catalog().await;
    println!("Category {id} deleted.");
    Ok(())
}

/// `admin upload <kind> <path>` - upload an image file.
#[allow(clippy::print_stdout)]
pub async fn upload(
    ctx: &AdminContext,
    kind: UploadKind,
    path: &std::path::Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("invalid file name: {}", path.display()))?;
    let response = ctx.admin.upload_file(kind, file_name, bytes).await?;
    println!("Uploaded to {}.", response.url);
    Ok(())
}
