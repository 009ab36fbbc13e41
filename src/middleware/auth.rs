use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use todoapp_auth::{Claims, UserRole, verify_token};
use todoapp_core::AppError;

use crate::state::AppState;

/// Extractor that validates the bearer token and provides the caller's claims.
///
/// This is the only way handlers obtain an identity; every protected
/// operation passes through it before any authorization is evaluated.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Get the caller's user ID as a UUID.
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid user ID in token")))
    }

    /// Get the caller's email.
    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// Get the caller's role claim.
    pub fn role(&self) -> UserRole {
        self.0.role
    }

    /// Check whether the caller carries the ADMIN role.
    pub fn is_admin(&self) -> bool {
        self.0.role.is_admin()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::unauthorized(anyhow::anyhow!("Missing authorization header"))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized(anyhow::anyhow!("Invalid authorization header format"))
        })?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
