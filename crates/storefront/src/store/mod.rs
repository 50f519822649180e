//! The store state container.
//!
//! Presents one cart/wishlist/auth view whether or not a user is signed
//! in. Guest mutations go straight to the local reducer; authenticated
//! mutations call the API and then replace local state with a fresh
//! server fetch, falling back to the local reducer when the call fails
//! (logged, never surfaced). Login replays the guest cart into the
//! server cart item by item before adopting the server's view.
//!
//! # Consistency
//!
//! Every fetch-then-replace is issued a sequence number from a
//! per-resource counter; a response is applied only if its number is
//! newer than the last applied one, so a slow fetch cannot overwrite a
//! later replacement. Session transitions advance the applied number,
//! discarding any fetch still in flight from before the transition. The
//! state lock is never held across an `.await`.

mod conversions;
mod state;

pub use state::{AuthenticatedSession, CartAction, CartItem, Session, StoreState, WishlistAction};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, instrument, warn};

use delight_core::{Email, Order, Price, Product, ProductId, User};

use crate::api::{ApiClient, ApiError};

use conversions::{cart_item_from_line, user_from_auth};
use state::{apply_cart_action, apply_wishlist_action};

// =============================================================================
// Store
// =============================================================================

/// Controller owning all cart/wishlist/session state for the process.
///
/// Cheap to clone; clones share the same state and API client.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    api: ApiClient,
    state: RwLock<StoreState>,
    /// Issue counters for fetch-then-replace sequencing.
    cart_seq: AtomicU64,
    wishlist_seq: AtomicU64,
}

impl Store {
    /// Create a store over an API client. The store starts as a loading
    /// guest session until [`Store::init`] has run.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                api,
                state: RwLock::new(StoreState::default()),
                cart_seq: AtomicU64::new(0),
                wishlist_seq: AtomicU64::new(0),
            }),
        }
    }

    /// The API client this store drives. Consumers use it directly for
    /// reads the store does not own (catalog, orders, reviews).
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    // A poisoned lock only means a panic mid-mutation elsewhere; the
    // state is still whole-value consistent, so recover the guard.
    fn state(&self) -> RwLockReadGuard<'_, StoreState> {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn next_cart_seq(&self) -> u64 {
        self.inner.cart_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn next_wishlist_seq(&self) -> u64 {
        self.inner.wishlist_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Advance the applied epochs past every fetch issued so far, so
    /// responses from before a session transition are discarded.
    fn bump_epochs(&self, state: &mut StoreState) {
        state.cart_epoch = self.next_cart_seq();
        state.wishlist_epoch = self.next_wishlist_seq();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Snapshot of the cart.
    #[must_use]
    pub fn cart(&self) -> Vec<CartItem> {
        self.state().cart.clone()
    }

    /// Snapshot of the wishlist.
    #[must_use]
    pub fn wishlist(&self) -> Vec<Product> {
        self.state().wishlist.clone()
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state().session.user().cloned()
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state().session.is_authenticated()
    }

    /// Whether the startup sequence has yet to finish.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// Sum of line totals over the cart, recomputed on every call.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.state().cart_total()
    }

    /// Sum of quantities over the cart, recomputed on every call.
    #[must_use]
    pub fn cart_count(&self) -> i64 {
        self.state().cart_count()
    }

    /// Whether a product is on the wishlist.
    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.state().is_in_wishlist(product_id)
    }

    // =========================================================================
    // Startup
    // =========================================================================

    /// Run the once-per-process startup sequence.
    ///
    /// With a persisted token, validates it by fetching the current user;
    /// success adopts the server cart and wishlist, failure clears the
    /// token and stays guest. Either way the loading flag ends false.
    #[instrument(skip(self))]
    pub async fn init(&self) {
        if self.inner.api.has_token() {
            match self.inner.api.current_user().await {
                Ok(user) => {
                    {
                        let mut state = self.state_mut();
                        state.session =
                            Session::Authenticated(AuthenticatedSession { user });
                        self.bump_epochs(&mut state);
                    }
                    tokio::join!(self.refresh_cart(), self.refresh_wishlist());
                }
                Err(e) => {
                    warn!(error = %e, "Persisted token rejected; clearing it");
                    if let Err(e) = self.inner.api.clear_token() {
                        warn!(error = %e, "Could not remove the stale token");
                    }
                }
            }
        }

        self.state_mut().loading = false;
    }

    // =========================================================================
    // Session Transitions
    // =========================================================================

    /// Log in, then reconcile the guest cart into the server cart.
    ///
    /// The guest cart is snapshotted first; after login succeeds each
    /// snapshot item is added to the server cart in turn, with failures
    /// logged and skipped, and finally the server cart and wishlist are
    /// fetched once each and adopted wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if the login itself fails; the guest cart is
    /// left untouched in that case.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &Email, password: &str) -> Result<User, ApiError> {
        let snapshot = self.cart();

        let auth = self.inner.api.login(email.as_str(), password).await?;
        let user = user_from_auth(&auth);

        {
            let mut state = self.state_mut();
            state.session = Session::Authenticated(AuthenticatedSession {
                user: user.clone(),
            });
            self.bump_epochs(&mut state);
        }

        // Sequential on purpose: the backend merges same-product adds,
        // and one failure must not abort the rest.
        for item in &snapshot {
            if let Err(e) = self
                .inner
                .api
                .add_to_cart(&item.product.id, item.quantity)
                .await
            {
                warn!(
                    error = %e,
                    product_id = %item.product.id,
                    "Guest cart item did not sync; skipping"
                );
            }
        }

        tokio::join!(self.refresh_cart(), self.refresh_wishlist());

        Ok(user)
    }

    /// Register a new account and sign it in. No guest-cart replay; a
    /// brand-new account has nothing on the server to reconcile with.
    ///
    /// # Errors
    ///
    /// Returns an error if registration fails.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn register(
        &self,
        name: &str,
        email: &Email,
        password: &str,
    ) -> Result<User, ApiError> {
        let auth = self
            .inner
            .api
            .register(name, email.as_str(), password)
            .await?;
        let user = user_from_auth(&auth);

        let mut state = self.state_mut();
        state.session = Session::Authenticated(AuthenticatedSession {
            user: user.clone(),
        });
        self.bump_epochs(&mut state);

        Ok(user)
    }

    /// Sign out: drop the token and reset cart, wishlist, and session.
    /// No server call is made.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted token cannot be removed; local
    /// state is reset regardless.
    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<(), ApiError> {
        {
            let mut state = self.state_mut();
            state.session = Session::Guest;
            state.cart.clear();
            state.wishlist.clear();
            self.bump_epochs(&mut state);
        }
        self.inner.api.logout()
    }

    // =========================================================================
    // Cart / Wishlist Dispatch
    // =========================================================================

    /// Apply a cart action.
    ///
    /// Guest: local reducer only. Authenticated: the matching API call,
    /// then a canonical re-fetch on success (except clear, whose
    /// canonical result is the empty cart); on failure the action is
    /// applied locally as a fallback and the error is only logged.
    #[instrument(skip(self, action), fields(action = action.label()))]
    pub async fn dispatch_cart(&self, action: CartAction) {
        if !self.is_authenticated() {
            apply_cart_action(&mut self.state_mut().cart, action);
            return;
        }

        let result = match &action {
            CartAction::Add { product, quantity } => self
                .inner
                .api
                .add_to_cart(&product.id, *quantity)
                .await
                .map(|_| ()),
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => {
                if *quantity <= 0 {
                    self.inner.api.remove_from_cart(product_id).await.map(|_| ())
                } else {
                    self.inner
                        .api
                        .update_cart_item(product_id, *quantity)
                        .await
                        .map(|_| ())
                }
            }
            CartAction::Remove { product_id } => {
                self.inner.api.remove_from_cart(product_id).await.map(|_| ())
            }
            CartAction::Clear => self.inner.api.clear_cart().await,
        };

        match result {
            Ok(()) if matches!(action, CartAction::Clear) => {
                apply_cart_action(&mut self.state_mut().cart, action);
            }
            Ok(()) => self.refresh_cart().await,
            Err(e) => {
                warn!(
                    error = %e,
                    operation = action.label(),
                    product_id = action.product_id().map(tracing::field::display),
                    "Cart update failed; applying local fallback"
                );
                apply_cart_action(&mut self.state_mut().cart, action);
            }
        }
    }

    /// Apply a wishlist action; same contract as [`Store::dispatch_cart`].
    #[instrument(skip(self, action), fields(action = action.label()))]
    pub async fn dispatch_wishlist(&self, action: WishlistAction) {
        if !self.is_authenticated() {
            apply_wishlist_action(&mut self.state_mut().wishlist, action);
            return;
        }

        let result = match &action {
            WishlistAction::Add { product } => {
                self.inner.api.add_to_wishlist(&product.id).await.map(|_| ())
            }
            WishlistAction::Remove { product_id } => self
                .inner
                .api
                .remove_from_wishlist(product_id)
                .await
                .map(|_| ()),
        };

        match result {
            Ok(()) => self.refresh_wishlist().await,
            Err(e) => {
                warn!(
                    error = %e,
                    operation = action.label(),
                    product_id = %action.product_id(),
                    "Wishlist update failed; applying local fallback"
                );
                apply_wishlist_action(&mut self.state_mut().wishlist, action);
            }
        }
    }

    // =========================================================================
    // Canonical Re-fetch
    // =========================================================================

    /// Fetch the server cart and adopt it wholesale, unless a newer
    /// replacement has already been applied. Failures are logged and
    /// leave local state untouched.
    pub async fn refresh_cart(&self) {
        let seq = self.next_cart_seq();
        match self.inner.api.get_cart().await {
            Ok(cart) => {
                let mut state = self.state_mut();
                if seq > state.cart_epoch {
                    state.cart = cart.items.into_iter().map(cart_item_from_line).collect();
                    state.cart_epoch = seq;
                } else {
                    debug!(seq, epoch = state.cart_epoch, "Discarding stale cart fetch");
                }
            }
            Err(e) => warn!(error = %e, "Cart re-fetch failed; keeping local cart"),
        }
    }

    /// Fetch the server wishlist and adopt it wholesale, with the same
    /// staleness guard as [`Store::refresh_cart`].
    pub async fn refresh_wishlist(&self) {
        let seq = self.next_wishlist_seq();
        match self.inner.api.get_wishlist().await {
            Ok(wishlist) => {
                let mut state = self.state_mut();
                if seq > state.wishlist_epoch {
                    state.wishlist = wishlist.items;
                    state.wishlist_epoch = seq;
                } else {
                    debug!(
                        seq,
                        epoch = state.wishlist_epoch,
                        "Discarding stale wishlist fetch"
                    );
                }
            }
            Err(e) => warn!(error = %e, "Wishlist re-fetch failed; keeping local wishlist"),
        }
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Place an order from the server cart, then adopt the (now empty)
    /// server cart.
    ///
    /// # Errors
    ///
    /// Returns an error if order creation fails; checkout is a
    /// transaction the caller must hear about.
    #[instrument(skip(self, shipping_address))]
    pub async fn place_order(&self, shipping_address: &str) -> Result<Order, ApiError> {
        let order = self.inner.api.create_order(shipping_address).await?;
        self.refresh_cart().await;
        Ok(order)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("Store")
            .field("authenticated", &state.session.is_authenticated())
            .field("cart_items", &state.cart.len())
            .field("wishlist_items", &state.wishlist.len())
            .field("loading", &state.loading)
            .finish_non_exhaustive()
    }
}
