//! User account entities.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::id::UserId;
use crate::types::status::Role;

/// A user account as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Default shipping address.
    pub address: Option<String>,
    /// Avatar image URL.
    pub avatar: Option<String>,
    /// Account role.
    pub role: Role,
    /// Whether the account may log in.
    pub enabled: bool,
    /// When the account was created.
    pub created_at: Option<NaiveDateTime>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_backend_payload() {
        let json = serde_json::json!({
            "id": "9",
            "email": "shopper@example.com",
            "name": "Sam Shopper",
            "phone": null,
            "address": "1 Glow Lane, Lumen City",
            "avatar": "/uploads/avatar/9.jpg",
            "role": "CUSTOMER",
            "enabled": true,
            "createdAt": "2024-01-15T10:30:00"
        });

        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user.id, UserId::new("9"));
        assert_eq!(user.role, Role::Customer);
        assert!(user.enabled);
        assert!(user.phone.is_none());
    }

    #[test]
    fn test_admin_user_role() {
        let json = serde_json::json!({
            "id": "1",
            "email": "admin@example.com",
            "name": "Ada Admin",
            "role": "ADMIN",
            "enabled": true
        });

        let user: User = serde_json::from_value(json).unwrap();
        assert!(user.role.is_admin());
        assert!(user.created_at.is_none());
    }
}
