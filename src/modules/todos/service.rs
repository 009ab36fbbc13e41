use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use todoapp_auth::UserRole;
use todoapp_core::AppError;

use super::model::{CreateTodoDto, Todo, UpdateTodoDto};

/// The single ownership predicate behind every per-todo operation.
///
/// Total and infallible; callers translate `false` into a 403 themselves.
pub fn can_access(todo_owner_id: Uuid, caller_id: Uuid, caller_role: UserRole) -> bool {
    caller_role == UserRole::Admin || todo_owner_id == caller_id
}

pub struct TodoService;

impl TodoService {
    /// Creates a todo owned by the caller.
    ///
    /// The title is trimmed first; a title that is empty after trimming is a
    /// validation error even though it passed the DTO length check.
    #[instrument(skip(db, dto))]
    pub async fn create_todo(
        db: &PgPool,
        dto: CreateTodoDto,
        caller_id: Uuid,
    ) -> Result<Todo, AppError> {
        let title = dto.title.trim();
        if title.is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "title must not be empty"
            )));
        }

        let todo = sqlx::query_as::<_, Todo>(
            r#"INSERT INTO todos (user_id, title, description)
               VALUES ($1, $2, $3)
               RETURNING id, user_id, title, description, completed, created_at, updated_at"#,
        )
        .bind(caller_id)
        .bind(title)
        .bind(&dto.description)
        .fetch_one(db)
        .await?;

        tracing::info!(todo_id = %todo.id, user_id = %caller_id, "Todo created");

        Ok(todo)
    }

    /// Lists todos visible to the caller, newest first.
    ///
    /// ADMIN callers see every todo and the completion filter is ignored on
    /// that branch (the admin path short-circuits before the filter is
    /// applied). Everyone else sees only their own rows, optionally filtered.
    #[instrument(skip(db))]
    pub async fn list_todos(
        db: &PgPool,
        caller_id: Uuid,
        caller_role: UserRole,
        completed: Option<bool>,
    ) -> Result<Vec<Todo>, AppError> {
        if caller_role == UserRole::Admin {
            return Self::list_all_todos(db).await;
        }

        let todos = match completed {
            Some(completed) => {
                sqlx::query_as::<_, Todo>(
                    r#"SELECT id, user_id, title, description, completed, created_at, updated_at
                       FROM todos
                       WHERE user_id = $1 AND completed = $2
                       ORDER BY created_at DESC"#,
                )
                .bind(caller_id)
                .bind(completed)
                .fetch_all(db)
                .await?
            }
            None => {
                sqlx::query_as::<_, Todo>(
                    r#"SELECT id, user_id, title, description, completed, created_at, updated_at
                       FROM todos
                       WHERE user_id = $1
                       ORDER BY created_at DESC"#,
                )
                .bind(caller_id)
                .fetch_all(db)
                .await?
            }
        };

        Ok(todos)
    }

    /// Lists every todo in the system, newest first. Route guards keep this
    /// admin-only; the service itself does not re-check.
    #[instrument(skip(db))]
    pub async fn list_all_todos(db: &PgPool) -> Result<Vec<Todo>, AppError> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"SELECT id, user_id, title, description, completed, created_at, updated_at
               FROM todos
               ORDER BY created_at DESC"#,
        )
        .fetch_all(db)
        .await?;

        Ok(todos)
    }

    /// Fetches a todo by id, enforcing the ownership rule.
    #[instrument(skip(db))]
    pub async fn get_todo_by_id(
        db: &PgPool,
        id: Uuid,
        caller_id: Uuid,
        caller_role: UserRole,
    ) -> Result<Todo, AppError> {
        let todo = Self::fetch_todo(db, id).await?;

        if !can_access(todo.user_id, caller_id, caller_role) {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "You can only view your own todos"
            )));
        }

        Ok(todo)
    }

    /// Applies a partial update after the ownership check.
    ///
    /// Absent patch fields keep their stored values; the owner column is not
    /// part of the update statement at all. No transaction spans the
    /// authorization read and the write: a concurrent delete downgrades the
    /// outcome to 404, nothing worse.
    #[instrument(skip(db, dto))]
    pub async fn update_todo(
        db: &PgPool,
        id: Uuid,
        dto: UpdateTodoDto,
        caller_id: Uuid,
        caller_role: UserRole,
    ) -> Result<Todo, AppError> {
        let existing = Self::fetch_todo(db, id).await?;

        if !can_access(existing.user_id, caller_id, caller_role) {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "You can only update your own todos"
            )));
        }

        let title = match dto.title {
            Some(title) => {
                let title = title.trim().to_string();
                if title.is_empty() {
                    return Err(AppError::bad_request(anyhow::anyhow!(
                        "title must not be empty"
                    )));
                }
                title
            }
            None => existing.title,
        };
        let description = if dto.description.is_some() {
            dto.description
        } else {
            existing.description
        };
        let completed = dto.completed.unwrap_or(existing.completed);

        let todo = sqlx::query_as::<_, Todo>(
            r#"UPDATE todos
               SET title = $1, description = $2, completed = $3, updated_at = NOW()
               WHERE id = $4
               RETURNING id, user_id, title, description, completed, created_at, updated_at"#,
        )
        .bind(&title)
        .bind(&description)
        .bind(completed)
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Todo with id {} not found", id)))?;

        tracing::info!(todo_id = %id, "Todo updated");

        Ok(todo)
    }

    /// Deletes a todo after the ownership check.
    ///
    /// Deleting an id that is already gone reports 404, never success.
    #[instrument(skip(db))]
    pub async fn delete_todo(
        db: &PgPool,
        id: Uuid,
        caller_id: Uuid,
        caller_role: UserRole,
    ) -> Result<(), AppError> {
        let todo = Self::fetch_todo(db, id).await?;

        if !can_access(todo.user_id, caller_id, caller_role) {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "You can only delete your own todos"
            )));
        }

        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Todo with id {} not found",
                id
            )));
        }

        tracing::info!(todo_id = %id, "Todo deleted");

        Ok(())
    }

    /// Privileged delete. The ADMIN check happens in the route guard, not
    /// here.
    #[instrument(skip(db))]
    pub async fn admin_delete_todo(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Todo with id {} not found",
                id
            )));
        }

        tracing::info!(todo_id = %id, "Admin deleted todo");

        Ok(())
    }

    async fn fetch_todo(db: &PgPool, id: Uuid) -> Result<Todo, AppError> {
        sqlx::query_as::<_, Todo>(
            r#"SELECT id, user_id, title, description, completed, created_at, updated_at
               FROM todos WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Todo with id {} not found", id)))
    }
}
