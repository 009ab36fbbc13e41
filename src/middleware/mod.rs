//! Middleware for request processing.
//!
//! # Modules
//!
//! - [`auth`]: the `AuthUser` extractor — the single token-verification gate
//! - [`role`]: role-checking middleware for admin-only routes
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. [`auth::AuthUser`] validates the JWT and extracts claims
//! 3. For admin routes, [`role::require_admin`] checks the role claim
//! 4. Handler executes if all checks pass

pub mod auth;
pub mod role;
