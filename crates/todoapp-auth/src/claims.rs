//! JWT claim structures for authentication tokens.
//!
//! - [`Claims`]: access token claims, enough to authorize any request
//!   without a database lookup
//! - [`RefreshTokenClaims`]: refresh token claims, subject id only — the
//!   user row is re-read on refresh so role and email changes are picked up

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::role::UserRole;

/// JWT claims for access tokens.
///
/// # Fields
///
/// - `sub`: User ID (subject)
/// - `email`: User's email address
/// - `role`: User's role at issuance time
/// - `exp`: Token expiration timestamp (Unix timestamp)
/// - `iat`: Token issued-at timestamp (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// User's email address
    pub email: String,
    /// User's role at issuance time
    pub role: UserRole,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

/// JWT claims for refresh tokens.
///
/// Refresh tokens are long-lived and used solely to obtain new access
/// tokens. They are never stored server-side and are not rotated: the same
/// refresh token stays valid until its own expiry however often it is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    /// User ID (subject claim)
    pub sub: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
    /// Unique token identifier (JWT ID) to ensure token uniqueness
    pub jti: String,
}
