//! Controlador de autenticación
//!
//! Registro y login: emite un JWT con identidad y rol, válido 7 días.

use validator::Validate;

use crate::dto::auth_dto::{AuthResponse, AuthUser, LoginRequest, RegisterRequest};
use crate::models::user::Role;
use crate::repositories::user_repository::UserRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::generate_token;

pub struct AuthController {
    users: UserRepository,
    jwt_secret: String,
    jwt_expiration_days: i64,
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            users: UserRepository::new(state.pool.clone()),
            jwt_secret: state.config.jwt_secret.clone(),
            jwt_expiration_days: state.config.jwt_expiration_days,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;

        // Las cuentas admin solo se crean con el binario de bootstrap
        if request.role == Role::Admin {
            return Err(AppError::BadRequest(
                "Admin accounts cannot be registered".to_string(),
            ));
        }

        if self.users.email_exists(&request.email).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|err| AppError::Internal(format!("Error hashing password: {}", err)))?;

        let user = self
            .users
            .create(
                request.username,
                request.email,
                password_hash,
                request.full_name,
                request.phone,
                request.address,
                request.role,
            )
            .await?;

        let token = generate_token(
            user.id,
            user.role,
            &self.jwt_secret,
            self.jwt_expiration_days,
        )?;

        Ok(AuthResponse {
            message: "User registered successfully".to_string(),
            user: AuthUser::from(&user),
            token,
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let password_matches = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|err| AppError::Internal(format!("Error verifying password: {}", err)))?;

        if !password_matches {
            return Err(AppError::BadRequest("Invalid credentials".to_string()));
        }

        let token = generate_token(
            user.id,
            user.role,
            &self.jwt_secret,
            self.jwt_expiration_days,
        )?;

        Ok(AuthResponse {
            message: "Login successful".to_string(),
            user: AuthUser::from(&user),
            token,
        })
    }
}
