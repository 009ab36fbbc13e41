use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use todoapp_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{CreateTodoDto, Todo, TodoFilterParams, UpdateTodoDto};
use super::service::TodoService;

/// Create a todo owned by the caller
#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTodoDto,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Todos"
)]
#[instrument(skip(state, dto))]
pub async fn create_todo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateTodoDto>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = TodoService::create_todo(&state.db, dto, auth_user.user_id()?).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// List todos visible to the caller
#[utoipa::path(
    get,
    path = "/todos",
    params(TodoFilterParams),
    responses(
        (status = 200, description = "Todos, newest first", body = Vec<Todo>),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Todos"
)]
#[instrument(skip(state))]
pub async fn get_todos(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(filters): Query<TodoFilterParams>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = TodoService::list_todos(
        &state.db,
        auth_user.user_id()?,
        auth_user.role(),
        filters.completed,
    )
    .await?;
    Ok(Json(todos))
}

/// Get a todo by id
#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(("id" = Uuid, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Todo details", body = Todo),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Todos"
)]
#[instrument(skip(state))]
pub async fn get_todo_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Todo>, AppError> {
    let todo =
        TodoService::get_todo_by_id(&state.db, id, auth_user.user_id()?, auth_user.role()).await?;
    Ok(Json(todo))
}

/// Partially update a todo
#[utoipa::path(
    patch,
    path = "/todos/{id}",
    params(("id" = Uuid, Path, description = "Todo ID")),
    request_body = UpdateTodoDto,
    responses(
        (status = 200, description = "Todo updated", body = Todo),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Todos"
)]
#[instrument(skip(state, dto))]
pub async fn update_todo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateTodoDto>,
) -> Result<Json<Todo>, AppError> {
    let todo = TodoService::update_todo(
        &state.db,
        id,
        dto,
        auth_user.user_id()?,
        auth_user.role(),
    )
    .await?;
    Ok(Json(todo))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(("id" = Uuid, Path, description = "Todo ID")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Todos"
)]
#[instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    TodoService::delete_todo(&state.db, id, auth_user.user_id()?, auth_user.role()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List every todo in the system (admin only)
#[utoipa::path(
    get,
    path = "/todos/admin/all",
    responses(
        (status = 200, description = "All todos, newest first", body = Vec<Todo>),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Requires ADMIN role", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Todos"
)]
#[instrument(skip(state))]
pub async fn get_all_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = TodoService::list_all_todos(&state.db).await?;
    Ok(Json(todos))
}

/// Delete any todo (admin only)
#[utoipa::path(
    delete,
    path = "/todos/admin/{id}",
    params(("id" = Uuid, Path, description = "Todo ID")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Requires ADMIN role", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Todos"
)]
#[instrument(skip(state))]
pub async fn admin_delete_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    TodoService::admin_delete_todo(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
