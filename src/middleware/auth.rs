//! Middleware de autenticación JWT
//!
//! Este módulo maneja la extracción del token Bearer, su verificación
//! stateless y el control de acceso por rol.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
    Extension,
};
use uuid::Uuid;

use crate::{
    models::user::Role,
    state::AppState,
    utils::{errors::AppError, jwt::decode_token},
};

/// Identidad del llamante en una request protegida.
///
/// Sesión explícita: se crea en el gate y viaja con la request, nunca se lee
/// de estado ambiental.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Rechazar con Forbidden si el rol del llamante no está en la allow-list
    pub fn require_role(&self, allowed: &[Role]) -> Result<(), AppError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(AppError::Forbidden("Access denied".to_string()))
        }
    }
}

/// Resolver la identidad desde las cabeceras de la request.
///
/// Verificación stateless: token ausente o malformado -> 401, firma inválida
/// o expirada -> 401. El rol se comprueba después, por operación.
fn resolve_user(parts: &Parts, jwt_secret: &str) -> Result<AuthenticatedUser, AppError> {
    let token = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_header| auth_header.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("No token provided".to_string()))?;

    let claims = decode_token(token, jwt_secret)?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))?;

    Ok(AuthenticatedUser {
        id: user_id,
        role: claims.role,
    })
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Si un middleware ya resolvió la identidad, se reutiliza
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(user.clone());
        }

        resolve_user(parts, &state.config.jwt_secret)
    }
}

/// Middleware de autenticación JWT: inyecta la identidad como extension
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();
    let user = resolve_user(&parts, &state.config.jwt_secret)?;
    parts.extensions.insert(user);
    request = Request::from_parts(parts, body);

    Ok(next.run(request).await)
}

/// Middleware para rutas reservadas al rol admin
pub async fn admin_only_middleware(
    Extension(user): Extension<AuthenticatedUser>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    user.require_role(&[Role::Admin])?;
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_role_accepts_listed_roles() {
        let user = AuthenticatedUser {
            id: Uuid::new_v4(),
            role: Role::Host,
        };
        assert!(user.require_role(&[Role::Host]).is_ok());
        assert!(user.require_role(&[Role::Customer, Role::Host]).is_ok());
    }

    #[test]
    fn require_role_rejects_missing_roles() {
        let user = AuthenticatedUser {
            id: Uuid::new_v4(),
            role: Role::Customer,
        };
        assert!(user.require_role(&[Role::Host]).is_err());
        assert!(user.require_role(&[Role::Admin]).is_err());
    }

    #[test]
    fn admin_passes_every_admin_gate() {
        let admin = AuthenticatedUser {
            id: Uuid::new_v4(),
            role: Role::Admin,
        };
        assert!(admin.require_role(&[Role::Admin]).is_ok());
        assert!(admin.require_role(&[Role::Customer, Role::Admin]).is_ok());
    }
}
