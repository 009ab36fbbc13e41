//! # Todoapp Client
//!
//! Typed HTTP client for the Todoapp auth and todo services.
//!
//! This crate is the Rust rendition of the browser session layer: it holds
//! the two tokens in an explicit [`TokenStore`] (no globals) and wraps every
//! protected call in a refresh-retry decorator — on a 401 it posts the
//! stored refresh token to the auth service, stores the new access token,
//! and replays the original request exactly once. If the refresh itself
//! fails, the store is cleared and the 401 surfaces to the caller.
//!
//! Token-acquisition calls (`register`, `login`, `refresh`) are sent
//! undecorated; a 401 there means bad credentials, not an expired session.
//!
//! # Example
//!
//! ```ignore
//! use todoapp_client::{ApiClient, CreateTodo};
//!
//! let client = ApiClient::new("http://localhost:4000", "http://localhost:4001");
//!
//! client.login("alice@x.com", "password123").await?;
//! let todo = client
//!     .create_todo(CreateTodo {
//!         title: "Buy milk".to_string(),
//!         description: None,
//!     })
//!     .await?;
//! let todos = client.list_todos(None).await?;
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod tokens;

// Re-export commonly used types at crate root
pub use client::ApiClient;
pub use error::ClientError;
pub use models::{CreateTodo, RegisterUser, Todo, TokenPair, UpdateTodo, UserProfile};
pub use tokens::{MemoryTokenStore, TokenStore};
