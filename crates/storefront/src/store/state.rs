//! Store state: session, cart, wishlist, and the local reducer.
//!
//! The reducer functions here are pure; they are the single place cart
//! and wishlist invariants are enforced (one line per product, quantity
//! zero removes, wishlist set semantics). The guest path applies them
//! directly and the authenticated path falls back to them when a server
//! call fails.

use delight_core::{Price, Product, ProductId, User};

/// A product in the local cart with its quantity.
#[derive(Debug, Clone)]
pub struct CartItem {
    /// The product, as the catalog or the server cart described it.
    pub product: Product,
    /// Quantity in the cart, always >= 1.
    pub quantity: i64,
}

impl CartItem {
    /// Line total (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// The signed-in half of a [`Session`].
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    /// The signed-in user.
    pub user: User,
}

/// Who the store is acting for.
///
/// Every store operation matches this once: `Guest` mutates local state,
/// `Authenticated` talks to the server first.
#[derive(Debug, Clone, Default)]
pub enum Session {
    /// No token; cart and wishlist live only in this process.
    #[default]
    Guest,
    /// Token present and validated; the server owns cart and wishlist.
    Authenticated(AuthenticatedSession),
}

impl Session {
    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Guest => None,
            Self::Authenticated(session) => Some(&session.user),
        }
    }
}

/// A cart mutation.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add a product, merging into an existing line for the same product.
    Add {
        product: Box<Product>,
        quantity: i64,
    },
    /// Set a line's quantity; zero or below removes the line.
    UpdateQuantity {
        product_id: ProductId,
        quantity: i64,
    },
    /// Remove a line.
    Remove { product_id: ProductId },
    /// Empty the cart.
    Clear,
}

impl CartAction {
    pub(crate) const fn label(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::UpdateQuantity { .. } => "update-quantity",
            Self::Remove { .. } => "remove",
            Self::Clear => "clear",
        }
    }

    pub(crate) const fn product_id(&self) -> Option<&ProductId> {
        match self {
            Self::Add { product, .. } => Some(&product.id),
            Self::UpdateQuantity { product_id, .. } | Self::Remove { product_id } => {
                Some(product_id)
            }
            Self::Clear => None,
        }
    }
}

/// A wishlist mutation.
#[derive(Debug, Clone)]
pub enum WishlistAction {
    /// Save a product; a product already saved is left alone.
    Add { product: Box<Product> },
    /// Remove a product.
    Remove { product_id: ProductId },
}

impl WishlistAction {
    pub(crate) const fn label(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
        }
    }

    pub(crate) const fn product_id(&self) -> &ProductId {
        match self {
            Self::Add { product } => &product.id,
            Self::Remove { product_id } => product_id,
        }
    }
}

/// The whole of the store's mutable state.
///
/// Owned by the `Store` controller behind a lock; nothing else mutates
/// it. The epoch fields record the sequence number of the last applied
/// cart/wishlist replacement so stale fetch responses can be discarded.
#[derive(Debug, Clone)]
pub struct StoreState {
    pub session: Session,
    pub cart: Vec<CartItem>,
    pub wishlist: Vec<Product>,
    /// True until the startup sequence has run once.
    pub loading: bool,
    pub(crate) cart_epoch: u64,
    pub(crate) wishlist_epoch: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            session: Session::Guest,
            cart: Vec::new(),
            wishlist: Vec::new(),
            loading: true,
            cart_epoch: 0,
            wishlist_epoch: 0,
        }
    }
}

impl StoreState {
    /// Sum of line totals over the cart.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.cart.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over the cart.
    #[must_use]
    pub fn cart_count(&self) -> i64 {
        self.cart.iter().map(|item| item.quantity).sum()
    }

    /// Whether a product is on the wishlist.
    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.wishlist.iter().any(|p| &p.id == product_id)
    }
}

/// Apply a cart action to a local cart.
pub(crate) fn apply_cart_action(cart: &mut Vec<CartItem>, action: CartAction) {
    match action {
        CartAction::Add { product, quantity } => {
            // Line quantities stay >= 1; a merge that lands at or below
            // zero drops the line, and a non-positive add of a new
            // product is a no-op.
            if let Some(item) = cart.iter_mut().find(|item| item.product.id == product.id) {
                item.quantity += quantity;
                if item.quantity <= 0 {
                    cart.retain(|item| item.quantity > 0);
                }
            } else if quantity > 0 {
                cart.push(CartItem {
                    product: *product,
                    quantity,
                });
            }
        }
        CartAction::UpdateQuantity {
            product_id,
            quantity,
        } => {
            if quantity <= 0 {
                cart.retain(|item| item.product.id != product_id);
            } else if let Some(item) = cart.iter_mut().find(|item| item.product.id == product_id) {
                item.quantity = quantity;
            }
        }
        CartAction::Remove { product_id } => {
            cart.retain(|item| item.product.id != product_id);
        }
        CartAction::Clear => cart.clear(),
    }
}

/// Apply a wishlist action to a local wishlist.
pub(crate) fn apply_wishlist_action(wishlist: &mut Vec<Product>, action: WishlistAction) {
    match action {
        WishlistAction::Add { product } => {
            if !wishlist.iter().any(|p| p.id == product.id) {
                wishlist.push(*product);
            }
        }
        WishlistAction::Remove { product_id } => {
            wishlist.retain(|p| p.id != product_id);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: &str, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: None,
            price: Price::new(price.parse().unwrap()),
            original_price: None,
            stock_count: None,
            image: None,
            images: None,
            in_stock: true,
            featured: false,
            is_new: false,
            tags: None,
            category: None,
            category_id: None,
            rating: None,
            reviews: 0,
        }
    }

    fn add(cart: &mut Vec<CartItem>, p: Product, quantity: i64) {
        apply_cart_action(
            cart,
            CartAction::Add {
                product: Box::new(p),
                quantity,
            },
        );
    }

    #[test]
    fn test_add_two_products_totals() {
        let mut cart = Vec::new();
        add(&mut cart, product("A", "10.00"), 1);
        add(&mut cart, product("B", "7.50"), 2);

        let state = StoreState {
            cart,
            ..StoreState::default()
        };
        assert_eq!(state.cart_count(), 3);
        // price(A) + 2 x price(B)
        assert_eq!(state.cart_total().display(), "$25.00");
    }

    #[test]
    fn test_adding_existing_product_merges_lines() {
        let mut cart = Vec::new();
        add(&mut cart, product("A", "10.00"), 1);
        add(&mut cart, product("A", "10.00"), 1);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 2);
    }

    #[test]
    fn test_add_with_non_positive_quantity_is_a_no_op() {
        let mut cart = Vec::new();
        add(&mut cart, product("A", "10.00"), 0);
        add(&mut cart, product("B", "7.50"), -1);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_merge_landing_at_zero_removes_line() {
        let mut cart = Vec::new();
        add(&mut cart, product("A", "10.00"), 2);
        add(&mut cart, product("A", "10.00"), -2);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Vec::new();
        add(&mut cart, product("A", "10.00"), 1);
        apply_cart_action(
            &mut cart,
            CartAction::UpdateQuantity {
                product_id: ProductId::new("A"),
                quantity: 5,
            },
        );

        assert_eq!(cart[0].quantity, 5);
    }

    #[test]
    fn test_update_quantity_to_zero_removes_line() {
        let mut cart = Vec::new();
        add(&mut cart, product("A", "10.00"), 2);
        apply_cart_action(
            &mut cart,
            CartAction::UpdateQuantity {
                product_id: ProductId::new("A"),
                quantity: 0,
            },
        );

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_negative_removes_line() {
        let mut cart = Vec::new();
        add(&mut cart, product("A", "10.00"), 2);
        apply_cart_action(
            &mut cart,
            CartAction::UpdateQuantity {
                product_id: ProductId::new("A"),
                quantity: -3,
            },
        );

        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Vec::new();
        add(&mut cart, product("A", "10.00"), 1);
        add(&mut cart, product("B", "5.00"), 1);

        apply_cart_action(
            &mut cart,
            CartAction::Remove {
                product_id: ProductId::new("A"),
            },
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].product.id.as_str(), "B");

        apply_cart_action(&mut cart, CartAction::Clear);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_matches_sum_over_mixed_sequence() {
        let mut cart = Vec::new();
        add(&mut cart, product("A", "19.99"), 2);
        add(&mut cart, product("B", "4.25"), 3);
        apply_cart_action(
            &mut cart,
            CartAction::UpdateQuantity {
                product_id: ProductId::new("A"),
                quantity: 1,
            },
        );
        apply_cart_action(
            &mut cart,
            CartAction::Remove {
                product_id: ProductId::new("B"),
            },
        );
        add(&mut cart, product("C", "0.99"), 4);

        let expected: Price = cart.iter().map(CartItem::line_total).sum();
        let count: i64 = cart.iter().map(|item| item.quantity).sum();

        let state = StoreState {
            cart,
            ..StoreState::default()
        };
        assert_eq!(state.cart_total(), expected);
        assert_eq!(state.cart_count(), count);
        assert_eq!(state.cart_total().display(), "$23.95");
        assert_eq!(count, 5);
    }

    #[test]
    fn test_wishlist_set_semantics() {
        let mut wishlist = Vec::new();
        apply_wishlist_action(
            &mut wishlist,
            WishlistAction::Add {
                product: Box::new(product("A", "10.00")),
            },
        );
        apply_wishlist_action(
            &mut wishlist,
            WishlistAction::Add {
                product: Box::new(product("A", "10.00")),
            },
        );

        assert_eq!(wishlist.len(), 1);

        apply_wishlist_action(
            &mut wishlist,
            WishlistAction::Remove {
                product_id: ProductId::new("A"),
            },
        );
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_default_state_is_guest_and_loading() {
        let state = StoreState::default();
        assert!(!state.session.is_authenticated());
        assert!(state.session.user().is_none());
        assert!(state.loading);
        assert_eq!(state.cart_count(), 0);
        assert_eq!(state.cart_total(), Price::ZERO);
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(CartAction::Clear.label(), "clear");
        assert!(CartAction::Clear.product_id().is_none());
        let action = CartAction::Remove {
            product_id: ProductId::new("A"),
        };
        assert_eq!(action.label(), "remove");
        assert_eq!(action.product_id().unwrap().as_str(), "A");
    }
}
