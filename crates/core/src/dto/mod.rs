//! Wire-format entities returned by the backend.
//!
//! Field names follow the backend's camelCase JSON via serde renames. These
//! types are shared between the storefront and admin clients; request bodies
//! specific to one surface live with that surface's client.

pub mod cart;
pub mod catalog;
pub mod common;
pub mod order;
pub mod page;
pub mod payment;
pub mod review;
pub mod user;
pub mod wishlist;

pub use cart::{Cart, CartLine};
pub use catalog::{Category, Product};
pub use common::{MessageResponse, UploadKind, UploadResponse};
pub use order::{Order, OrderItem};
pub use page::Page;
pub use payment::Payment;
pub use review::Review;
pub use user::User;
pub use wishlist::Wishlist;
