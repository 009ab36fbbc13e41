use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::{AuthApiDoc, TodoApiDoc};
use crate::logging::logging_middleware;
use crate::middleware::role::require_admin;
use crate::modules::auth::router::init_auth_router;
use crate::modules::todos::router::{init_todos_admin_router, init_todos_router};
use crate::state::AppState;

/// Router for the auth service (`/auth/*`).
pub fn init_auth_service_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", AuthApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", AuthApiDoc::openapi()))
        .nest("/auth", init_auth_router())
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(logging_middleware))
}

/// Router for the todo service (`/todos/*`).
///
/// The admin subtree is wrapped in the `require_admin` guard so the role
/// check runs after token verification and before any handler.
pub fn init_todo_service_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", TodoApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", TodoApiDoc::openapi()))
        .nest(
            "/todos",
            init_todos_router().nest(
                "/admin",
                init_todos_admin_router()
                    .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
            ),
        )
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
}
