//! User data models.
//!
//! The user entity is owned by the auth service; the todo service only ever
//! sees user ids through token claims. Role is part of the row and immutable
//! through the HTTP interface (the CLI is the only path to `ADMIN`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use todoapp_auth::UserRole;

/// A user in the system.
///
/// The password hash never leaves the database through this struct; queries
/// that need it bind a purpose-built row type instead.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
