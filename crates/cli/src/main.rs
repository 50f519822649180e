//! Delight Display CLI - storefront and admin console from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog (no account needed)
//! dd-cli shop products --category Signs
//! dd-cli shop product 7
//!
//! # Sign in, then manage the cart (guest carts live only within one
//! # process, so add items after logging in to keep them)
//! dd-cli auth login -e shopper@example.com -p 'hunter2!'
//! dd-cli cart add 7 --quantity 2
//! dd-cli cart show
//!
//! # Check out and track the order
//! dd-cli orders place --shipping-address "1 Glow Lane, Lumen City"
//! dd-cli orders list
//!
//! # Admin surface (requires an admin token or admin login)
//! dd-cli admin dashboard
//! dd-cli admin analytics --days 7
//! ```
//!
//! # Environment Variables
//!
//! - `DELIGHT_API_BASE_URL` - Backend base URL including the API prefix
//! - `DELIGHT_TOKEN_PATH` - Token file location (default `.delight/token.json`)
//! - `DELIGHT_ADMIN_TOKEN` - Admin bearer for non-interactive admin use

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use delight_core::{Email, OrderStatus, Role, UploadKind};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "dd-cli")]
#[command(author, version, about = "Delight Display storefront and admin CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Shop {
        #[command(subcommand)]
        action: ShopAction,
    },
    /// Inspect and mutate the cart
    Cart {
        #[command(subcommand)]
        action: CartCommand,
    },
    /// Inspect and mutate the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistCommand,
    },
    /// Sessions and account recovery
    Auth {
        #[command(subcommand)]
        action: AuthCommand,
    },
    /// Order history and checkout
    Orders {
        #[command(subcommand)]
        action: OrderCommand,
    },
    /// Product reviews
    Reviews {
        #[command(subcommand)]
        action: ReviewCommand,
    },
    /// Admin console (role-gated by the backend)
    Admin {
        #[command(subcommand)]
        action: AdminCommand,
    },
}

#[derive(Subcommand)]
enum ShopAction {
    /// List products, optionally filtered
    Products {
        /// Substring match on the product name
        #[arg(long)]
        name: Option<String>,
        /// Category display name
        #[arg(long)]
        category: Option<String>,
        /// Lowest acceptable price
        #[arg(long)]
        min_price: Option<String>,
        /// Highest acceptable price
        #[arg(long)]
        max_price: Option<String>,
        /// Only purchasable products
        #[arg(long)]
        in_stock: bool,
        /// Only featured products
        #[arg(long)]
        featured: bool,
        /// Only new arrivals
        #[arg(long)]
        new: bool,
        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: i64,
        /// Page size
        #[arg(long, default_value_t = 12)]
        size: i64,
    },
    /// Show one product with its reviews summary
    Product {
        /// Product id
        id: String,
    },
    /// List featured products
    Featured,
    /// List new arrivals
    New,
    /// List categories
    Categories,
}

#[derive(Subcommand)]
enum CartCommand {
    /// Show the cart with totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        id: String,
        /// Quantity to add
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..))]
        quantity: i64,
    },
    /// Set a cart line's quantity (0 removes it)
    Update {
        /// Product id
        id: String,
        /// New quantity
        #[arg(short, long)]
        quantity: i64,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistCommand {
    /// Show the wishlist
    Show,
    /// Save a product
    Add {
        /// Product id
        id: String,
    },
    /// Remove a saved product
    Remove {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum AuthCommand {
    /// Log in; any guest cart is synced to the account
    Login {
        /// Account email
        #[arg(short, long)]
        email: Email,
        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and sign it in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Account email
        #[arg(short, long)]
        email: Email,
        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Drop the stored session
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Request a password reset email
    ForgotPassword {
        /// Account email
        #[arg(short, long)]
        email: Email,
    },
    /// Complete a password reset with the emailed token
    ResetPassword {
        /// Reset token from the email
        #[arg(short, long)]
        token: String,
        /// New password
        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum OrderCommand {
    /// List your orders
    List {
        #[arg(long, default_value_t = 0)]
        page: i64,
        #[arg(long, default_value_t = 10)]
        size: i64,
    },
    /// Show one order
    Show {
        /// Order id
        id: String,
    },
    /// Place an order from the current cart
    Place {
        /// Shipping address for the order
        #[arg(short, long)]
        shipping_address: String,
    },
    /// Cancel a pending order
    Cancel {
        /// Order id
        id: String,
    },
}

#[derive(Subcommand)]
enum ReviewCommand {
    /// List reviews for a product
    List {
        /// Product id
        product_id: String,
        #[arg(long, default_value_t = 0)]
        page: i64,
        #[arg(long, default_value_t = 10)]
        size: i64,
    },
    /// Review a product
    Add {
        /// Product id
        product_id: String,
        /// Star rating, 1 to 5
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..=5))]
        rating: i32,
        /// Free-form comment
        #[arg(short, long)]
        comment: Option<String>,
    },
}

#[derive(Subcommand)]
enum AdminCommand {
    /// Aggregate store statistics
    Dashboard,
    /// Chart data for the last N days
    Analytics {
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
    /// List user accounts
    Users {
        #[arg(long, default_value_t = 0)]
        page: i64,
        #[arg(long, default_value_t = 20)]
        size: i64,
    },
    /// Assign a role (ADMIN or CUSTOMER) to a user
    UserRole {
        /// User id
        id: String,
        /// New role
        role: Role,
    },
    /// Enable or disable a user account
    UserToggle {
        /// User id
        id: String,
    },
    /// Delete a user account
    UserDelete {
        /// User id
        id: String,
    },
    /// List all orders in the store
    Orders {
        #[arg(long, default_value_t = 0)]
        page: i64,
        #[arg(long, default_value_t = 20)]
        size: i64,
    },
    /// Move an order to a new status
    OrderStatus {
        /// Order id
        id: String,
        /// Target status (PENDING, CONFIRMED, SHIPPED, DELIVERED, CANCELLED)
        status: OrderStatus,
    },
    /// Create a product
    ProductCreate {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        stock: Option<i64>,
        #[arg(long)]
        category_id: Option<String>,
        #[arg(long)]
        featured: bool,
        #[arg(long)]
        new: bool,
    },
    /// Delete a product
    ProductDelete {
        /// Product id
        id: String,
    },
    /// Create a category
    CategoryCreate {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Delete a category
    CategoryDelete {
        /// Category id
        id: String,
    },
    /// Upload an image (kind: product, category, or avatar)
    Upload {
        /// Destination bucket
        kind: String,
        /// Path of the file to upload
        path: std::path::PathBuf,
    },
}

fn parse_upload_kind(kind: &str) -> Result<UploadKind, String> {
    match kind {
        "product" => Ok(UploadKind::Product),
        "category" => Ok(UploadKind::Category),
        "avatar" => Ok(UploadKind::Avatar),
        other => Err(format!(
            "invalid upload kind: {other} (expected product, category, or avatar)"
        )),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Shop { action } => {
            let api = commands::storefront_client()?;
            match action {
                ShopAction::Products {
                    name,
                    category,
                    min_price,
                    max_price,
                    in_stock,
                    featured,
                    new,
                    page,
                    size,
                } => {
                    let filter = commands::shop::build_filter(
                        name, category, min_price, max_price, in_stock, featured, new, page, size,
                    )?;
                    commands::shop::products(&api, &filter).await;
                }
                ShopAction::Product { id } => commands::shop::product(&api, &id).await,
                ShopAction::Featured => commands::shop::featured(&api).await,
                ShopAction::New => commands::shop::new_arrivals(&api).await,
                ShopAction::Categories => commands::shop::categories(&api).await,
            }
        }
        Commands::Cart { action } => {
            let store = commands::store().await?;
            match action {
                CartCommand::Show => commands::cart::show(&store),
                CartCommand::Add { id, quantity } => {
                    commands::cart::add(&store, &id, quantity).await?;
                }
                CartCommand::Update { id, quantity } => {
                    commands::cart::update(&store, &id, quantity).await;
                }
                CartCommand::Remove { id } => commands::cart::remove(&store, &id).await,
                CartCommand::Clear => commands::cart::clear(&store).await,
            }
        }
        Commands::Wishlist { action } => {
            let store = commands::store().await?;
            match action {
                WishlistCommand::Show => commands::wishlist::show(&store),
                WishlistCommand::Add { id } => commands::wishlist::add(&store, &id).await?,
                WishlistCommand::Remove { id } => commands::wishlist::remove(&store, &id).await,
            }
        }
        Commands::Auth { action } => {
            let store = commands::store().await?;
            match action {
                AuthCommand::Login { email, password } => {
                    commands::auth::login(&store, &email, &password).await?;
                }
                AuthCommand::Register {
                    name,
                    email,
                    password,
                } => commands::auth::register(&store, &name, &email, &password).await?,
                AuthCommand::Logout => commands::auth::logout(&store)?,
                AuthCommand::Whoami => commands::auth::whoami(&store),
                AuthCommand::ForgotPassword { email } => {
                    commands::auth::forgot_password(&store, &email).await?;
                }
                AuthCommand::ResetPassword { token, password } => {
                    commands::auth::reset_password(&store, &token, &password).await?;
                }
            }
        }
        Commands::Orders { action } => {
            let store = commands::store().await?;
            match action {
                OrderCommand::List { page, size } => {
                    commands::orders::list(&store, page, size).await;
                }
                OrderCommand::Show { id } => commands::orders::show(&store, &id).await,
                OrderCommand::Place { shipping_address } => {
                    commands::orders::place(&store, &shipping_address).await?;
                }
                OrderCommand::Cancel { id } => commands::orders::cancel(&store, &id).await?,
            }
        }
        Commands::Reviews { action } => {
            let api = commands::storefront_client()?;
            match action {
                ReviewCommand::List {
                    product_id,
                    page,
                    size,
                } => commands::reviews::list(&api, &product_id, page, size).await,
                ReviewCommand::Add {
                    product_id,
                    rating,
                    comment,
                } => commands::reviews::add(&api, &product_id, rating, comment).await?,
            }
        }
        Commands::Admin { action } => {
            let ctx = commands::admin_context()?;
            match action {
                AdminCommand::Dashboard => commands::admin::dashboard(&ctx).await?,
                AdminCommand::Analytics { days } => commands::admin::analytics(&ctx, days).await?,
                AdminCommand::Users { page, size } => {
                    commands::admin::users(&ctx, page, size).await?;
                }
                AdminCommand::UserRole { id, role } => {
                    commands::admin::user_role(&ctx, &id, role).await?;
                }
                AdminCommand::UserToggle { id } => commands::admin::user_toggle(&ctx, &id).await?,
                AdminCommand::UserDelete { id } => commands::admin::user_delete(&ctx, &id).await?,
                AdminCommand::Orders { page, size } => {
                    commands::admin::orders(&ctx, page, size).await?;
                }
                AdminCommand::OrderStatus { id, status } => {
                    commands::admin::order_status(&ctx, &id, status).await?;
                }
                AdminCommand::ProductCreate {
                    name,
                    price,
                    description,
                    image,
                    stock,
                    category_id,
                    featured,
                    new,
                } => {
                    let input = commands::admin::build_product_input(
                        name,
                        &price,
                        description,
                        image,
                        stock,
                        category_id,
                        featured,
                        new,
                    )?;
                    commands::admin::product_create(&ctx, &input).await?;
                }
                AdminCommand::ProductDelete { id } => {
                    commands::admin::product_delete(&ctx, &id).await?;
                }
                AdminCommand::CategoryCreate {
                    name,
                    description,
                    image,
                } => commands::admin::category_create(&ctx, name, description, image).await?,
                AdminCommand::CategoryDelete { id } => {
                    commands::admin::category_delete(&ctx, &id).await?;
                }
                AdminCommand::Upload { kind, path } => {
                    let kind = parse_upload_kind(&kind)?;
                    commands::admin::upload(&ctx, kind, &path).await?;
                }
            }
        }
    }
    Ok(())
}
