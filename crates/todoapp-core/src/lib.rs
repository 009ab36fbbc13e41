//! # Todoapp Core
//!
//! Core types, errors, and utilities shared by the Todoapp services.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error types with HTTP response conversion
//! - [`password`]: Secure password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use todoapp_core::errors::AppError;
//! use todoapp_core::password::{hash_password, verify_password};
//!
//! // Create an error
//! let error = AppError::not_found(anyhow::anyhow!("Todo not found"));
//!
//! // Hash a password
//! let hash = hash_password("secure_password")?;
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
