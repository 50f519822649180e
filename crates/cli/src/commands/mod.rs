//! Command implementations, one module per subcommand group.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod orders;
pub mod reviews;
pub mod shop;
pub mod wishlist;

use delight_admin::api::AdminClient;
use delight_admin::config::AdminConfig;
use delight_storefront::api::{ApiClient, TokenStore};
use delight_storefront::config::StorefrontConfig;
use delight_storefront::store::Store;

/// Configured storefront client for read-only commands.
pub fn storefront_client() -> Result<ApiClient, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    Ok(ApiClient::new(&config))
}

/// Configured store with its startup sequence already run, for commands
/// that depend on the session (cart, wishlist, auth, orders).
pub async fn store() -> Result<Store, Box<dyn std::error::Error>> {
    let store = Store::new(storefront_client()?);
    store.init().await;
    Ok(store)
}

/// The clients admin commands need: the admin client itself, plus a
/// storefront client whose catalog cache gets invalidated after catalog
/// mutations.
pub struct AdminContext {
    pub admin: AdminClient,
    pub storefront: ApiClient,
}

/// Build the admin context. Without a `DELIGHT_ADMIN_TOKEN`, falls back
/// to the token persisted by `auth login` (which must belong to an
/// admin account for the backend to accept it).
pub fn admin_context() -> Result<AdminContext, Box<dyn std::error::Error>> {
    let storefront_config = StorefrontConfig::from_env()?;
    let admin_config = AdminConfig::from_env()?;

    let admin = AdminClient::new(&admin_config);
    if !admin.has_token()
        && let Some(token) = TokenStore::new(storefront_config.token_path.clone()).load()?
    {
        admin.set_token(token);
    }

    Ok(AdminContext {
        admin,
        storefront: ApiClient::new(&storefront_config),
    })
}
