//! Utilidades JWT
//!
//! Emisión y verificación de tokens. La verificación es stateless: no se
//! consulta la base de datos.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::Role;
use crate::utils::errors::AppError;

/// Claims del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub role: Role,
    pub exp: usize,
    pub iat: usize,
}

/// Generar un token firmado para una cuenta, con ventana de validez en días
pub fn generate_token(
    user_id: Uuid,
    role: Role,
    secret: &str,
    expiration_days: i64,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::days(expiration_days);

    let claims = Claims {
        sub: user_id.to_string(),
        role,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|err| AppError::Internal(format!("Error generating JWT: {}", err)))
}

/// Decodificar y validar un token. Devuelve Unauthorized para tokens
/// ausentes de firma válida o expirados.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("Invalid or expired token. Please log in again.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn token_roundtrip_preserves_identity_and_role() {
        let user_id = Uuid::new_v4();
        let token = generate_token(user_id, Role::Host, SECRET, 7).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, Role::Host);
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(decode_token("not-a-token", SECRET).is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_token(Uuid::new_v4(), Role::Customer, SECRET, 7).unwrap();
        assert!(decode_token(&token, "other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = generate_token(Uuid::new_v4(), Role::Customer, SECRET, -1).unwrap();
        assert!(decode_token(&token, SECRET).is_err());
    }
}
