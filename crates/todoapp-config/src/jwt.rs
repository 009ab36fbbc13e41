use std::env;

/// JWT signing configuration.
///
/// The secret signs both access and refresh tokens; compromise of it
/// invalidates the whole trust model, so it must come from the environment
/// in any real deployment.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds (minutes-scale).
    pub access_token_expiry: i64,
    /// Refresh token lifetime in seconds (days-scale).
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(900), // 15 minutes
            refresh_token_expiry: env::var("JWT_REFRESH_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800), // 7 days
        }
    }
}
