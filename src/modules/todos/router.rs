use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{
    admin_delete_todo, create_todo, delete_todo, get_all_todos, get_todo_by_id, get_todos,
    update_todo,
};

pub fn init_todos_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_todo).get(get_todos))
        .route(
            "/{id}",
            get(get_todo_by_id).patch(update_todo).delete(delete_todo),
        )
}

/// Admin routes; the caller wraps this in the `require_admin` guard so the
/// role check runs before any handler.
pub fn init_todos_admin_router() -> Router<AppState> {
    Router::new()
        .route("/all", get(get_all_todos))
        .route("/{id}", delete(admin_delete_todo))
}
