use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A task owned by exactly one user.
///
/// `user_id` is set at creation from the caller's token and can never be
/// changed through the API.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoDto {
    /// Trimmed before storage; must be non-empty afterwards.
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
}

/// Partial update. Absent fields are left untouched; `userId` is not part
/// of the patch surface at all.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoDto {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Deserializes `?completed=` query values, treating an empty value as
/// absent rather than as a type error.
fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref() {
        None | Some("") => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid boolean value: {}",
            other
        ))),
    }
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct TodoFilterParams {
    /// Filter by completion state; ignored for ADMIN callers.
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub completed: Option<bool>,
}
