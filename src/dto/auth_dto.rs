//! DTOs de autenticación

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::{Role, User};

/// Request de registro. El rol admin no se puede registrar por esta vía.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 30))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,

    #[validate(length(min = 2, max = 100))]
    pub full_name: String,

    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: Role,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Resumen del usuario devuelto junto al token
#[derive(Debug, Serialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<&User> for AuthUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: AuthUser,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_rejects_bad_email_and_short_password() {
        let request = RegisterRequest {
            username: "john_doe".to_string(),
            email: "not-an-email".to_string(),
            password: "123".to_string(),
            full_name: "John Doe".to_string(),
            phone: None,
            address: None,
            role: Role::Customer,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn register_request_accepts_valid_input() {
        let request = RegisterRequest {
            username: "carhost1".to_string(),
            email: "host1@example.com".to_string(),
            password: "123456".to_string(),
            full_name: "Alice Host".to_string(),
            phone: Some("8887776666".to_string()),
            address: Some("Los Angeles, CA".to_string()),
            role: Role::Host,
        };
        assert!(request.validate().is_ok());
    }
}
