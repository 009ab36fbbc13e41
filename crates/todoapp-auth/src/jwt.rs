//! JWT creation and verification.
//!
//! Both token types are HS256-signed with the server secret from
//! [`JwtConfig`]. Creation is pure (no store access); verification checks
//! signature and expiry and nothing else.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use todoapp_config::JwtConfig;
use todoapp_core::AppError;

use crate::claims::{Claims, RefreshTokenClaims};
use crate::role::UserRole;

/// Creates a short-lived access token carrying subject id, email, and role.
///
/// # Errors
///
/// Returns an error if token encoding fails (e.g. an unusable secret key).
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    role: UserRole,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role,
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create access token: {}", e)))
}

/// Creates a long-lived refresh token carrying only the subject id.
///
/// The `jti` claim makes every issued refresh token unique even when two are
/// minted within the same second.
pub fn create_refresh_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.refresh_token_expiry as usize;

    let claims = RefreshTokenClaims {
        sub: user_id.to_string(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create refresh token: {}", e)))
}

/// Verifies an access token's signature and expiry and returns its claims.
///
/// Malformed tokens, bad signatures, and expired tokens all collapse into
/// one unauthorized error; callers never learn which check failed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid or expired token")))
}

/// Verifies a refresh token's signature and expiry and returns its claims.
///
/// An access token presented here fails: it has no `jti` claim.
pub fn verify_refresh_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<RefreshTokenClaims, AppError> {
    decode::<RefreshTokenClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid or expired refresh token")))
}
