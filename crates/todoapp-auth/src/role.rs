use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The closed set of user roles.
///
/// Stored as the `user_role` Postgres enum and carried verbatim in JWT
/// claims. Unknown strings are rejected at both boundaries (serde and sqlx),
/// so no free-form role value can enter the system.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
