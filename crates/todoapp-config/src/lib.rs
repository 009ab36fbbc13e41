//! # Todoapp Config
//!
//! Configuration types for the Todoapp services.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: JWT authentication configuration (secret, token lifetimes)
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen addresses for the two services
//! - [`rate_limit`]: API rate limiting configuration
//!
//! # Example
//!
//! ```ignore
//! use todoapp_config::{JwtConfig, CorsConfig, RateLimitConfig, ServerConfig};
//!
//! // Load all configs from environment
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let rate_limit_config = RateLimitConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod rate_limit;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;
