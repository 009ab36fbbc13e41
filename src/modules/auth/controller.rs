use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use todoapp_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::User;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    AccessTokenResponse, AuthTokensResponse, LoginRequest, MessageResponse, RefreshRequest,
    RegisterRequest,
};
use super::service::AuthService;

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered, token pair issued", body = AuthTokensResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthTokensResponse>), AppError> {
    let tokens = AuthService::register(&state.db, dto, &state.jwt_config).await?;
    Ok((StatusCode::CREATED, Json(tokens)))
}

/// Login and receive a token pair
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthTokensResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthTokensResponse>, AppError> {
    let tokens = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(tokens))
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/auth/refresh",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "New access token issued", body = AccessTokenResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Invalid or expired refresh token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RefreshRequest>,
) -> Result<Json<AccessTokenResponse>, AppError> {
    let response = AuthService::refresh(&state.db, &dto.refresh_token, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/auth/profile",
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<User>, AppError> {
    let user = AuthService::get_profile(&state.db, auth_user.user_id()?).await?;
    Ok(Json(user))
}

/// Logout
///
/// Tokens are not tracked server-side; logout only acknowledges so the
/// client can drop its stored pair.
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn logout(_auth_user: AuthUser) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    }))
}
