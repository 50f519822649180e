//! Wire-to-domain mapping for the store.

use delight_core::{CartLine, Product, User};

use crate::api::types::AuthResponse;

use super::state::CartItem;

/// Build a local cart item from a server cart line.
///
/// Cart lines carry only the product snapshot the cart needs, so the
/// catalog-only fields are filled with placeholders: no description, no
/// rating, and `in_stock` true (the server would not keep an
/// unpurchasable line).
pub(crate) fn cart_item_from_line(line: CartLine) -> CartItem {
    CartItem {
        product: Product {
            id: line.product_id,
            name: line.name,
            description: None,
            price: line.price,
            original_price: None,
            stock_count: None,
            image: line.image,
            images: None,
            in_stock: true,
            featured: false,
            is_new: false,
            tags: None,
            category: line.category,
            category_id: None,
            rating: None,
            reviews: 0,
        },
        quantity: line.quantity,
    }
}

/// Build a user from the flattened login/registration response, so the
/// session can be seeded without a second round trip. Fields the auth
/// payload does not carry default to an enabled account with no contact
/// details.
pub(crate) fn user_from_auth(auth: &AuthResponse) -> User {
    User {
        id: auth.id.clone(),
        email: auth.email.clone(),
        name: auth.name.clone(),
        phone: None,
        address: None,
        avatar: auth.avatar.clone(),
        role: auth.role,
        enabled: true,
        created_at: None,
    }
}
