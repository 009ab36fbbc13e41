//! # Todoapp DB
//!
//! Database pool initialization for the Todoapp services.
//!
//! Both services share one PostgreSQL database; each process initializes its
//! own connection pool from the `DATABASE_URL` environment variable.
//!
//! # Example
//!
//! ```ignore
//! use todoapp_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pool = init_db_pool().await;
//!     // Use pool for database operations
//! }
//! ```

use std::env;

pub use sqlx::PgPool;

/// Initializes a PostgreSQL connection pool.
///
/// Reads the database URL from the `DATABASE_URL` environment variable and
/// creates a connection pool. The returned pool is cheaply cloneable and is
/// stored in the application state for use in request handlers.
///
/// # Panics
///
/// Panics if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
