use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    AccessTokenResponse, AuthTokensResponse, LoginRequest, MessageResponse, RefreshRequest,
    RegisterRequest,
};
use crate::modules::todos::model::{CreateTodoDto, Todo, TodoFilterParams, UpdateTodoDto};
use crate::modules::users::model::User;
use todoapp_auth::UserRole;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::refresh,
        crate::modules::auth::controller::profile,
        crate::modules::auth::controller::logout,
    ),
    components(
        schemas(
            User,
            UserRole,
            RegisterRequest,
            LoginRequest,
            RefreshRequest,
            AuthTokensResponse,
            AccessTokenResponse,
            MessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User authentication endpoints")
    ),
    info(
        title = "Todoapp Auth Service",
        version = "0.1.0",
        description = "Issues and refreshes JWT token pairs and serves user profiles.",
        license(
            name = "MIT"
        )
    )
)]
pub struct AuthApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::todos::controller::create_todo,
        crate::modules::todos::controller::get_todos,
        crate::modules::todos::controller::get_todo_by_id,
        crate::modules::todos::controller::update_todo,
        crate::modules::todos::controller::delete_todo,
        crate::modules::todos::controller::get_all_todos,
        crate::modules::todos::controller::admin_delete_todo,
    ),
    components(
        schemas(
            Todo,
            CreateTodoDto,
            UpdateTodoDto,
            TodoFilterParams,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Todos", description = "Todo CRUD endpoints, owner- or admin-scoped")
    ),
    info(
        title = "Todoapp Todo Service",
        version = "0.1.0",
        description = "Todo CRUD gated by bearer-token identity and the ownership rule.",
        license(
            name = "MIT"
        )
    )
)]
pub struct TodoApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
