//! # Todoapp Auth
//!
//! Roles, JWT claim structures, and token utilities for the Todoapp services.
//!
//! This crate provides:
//!
//! - [`role`]: The closed [`UserRole`] enumeration (`USER` | `ADMIN`)
//! - [`claims`]: JWT claim structures for access and refresh tokens
//! - [`jwt`]: Token creation and verification utilities
//!
//! # Token Types
//!
//! The authentication system uses two types of JWT tokens:
//!
//! - **Access Token** ([`Claims`]): short-lived, carries subject id, email,
//!   and role; attached as a bearer token to every protected request
//! - **Refresh Token** ([`RefreshTokenClaims`]): long-lived, carries only the
//!   subject id; used solely to mint a new access token
//!
//! # Example
//!
//! ```ignore
//! use todoapp_auth::{UserRole, create_access_token, verify_token};
//! use todoapp_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//!
//! // Create an access token
//! let token = create_access_token(user_id, "user@example.com", UserRole::User, &config)?;
//!
//! // Verify the token
//! let claims = verify_token(&token, &config)?;
//! println!("User ID: {}", claims.sub);
//! ```

pub mod claims;
pub mod jwt;
pub mod role;

// Re-export commonly used types at crate root
pub use claims::{Claims, RefreshTokenClaims};
pub use jwt::{create_access_token, create_refresh_token, verify_refresh_token, verify_token};
pub use role::UserRole;
