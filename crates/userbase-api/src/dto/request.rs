//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 100, message = "Username must be 3-100 characters"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Plaintext password (hashed before persistence, never stored).
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Admin update request: any subset of the mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New username.
    #[validate(length(min = 3, max = 100, message = "Username must be 3-100 characters"))]
    pub username: Option<String>,
    /// New email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: Option<String>,
    /// New plaintext password (re-hashed before persistence).
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_validation() {
        let ok = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..ok.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            password: "short".to_string(),
            ..ok
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_update_allows_empty_subset() {
        let empty = UpdateUserRequest {
            username: None,
            email: None,
            password: None,
        };
        assert!(empty.validate().is_ok());
    }
}
