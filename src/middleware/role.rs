//! Role-based authorization middleware.
//!
//! Admin-only routes compose a fixed pipeline: verify-token (the `AuthUser`
//! extractor), then check-role (this middleware), then the handler. Handlers
//! behind [`require_admin`] never see a non-admin caller.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use todoapp_auth::UserRole;
use todoapp_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Middleware function that checks the authenticated caller's role claim
/// against an allow-list.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/all", get(admin_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    if !allowed_roles.contains(&auth_user.role()) {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required roles: {:?}, but user has role: {}",
            allowed_roles,
            auth_user.role()
        )));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Guard for admin-only routes.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Helper for checking a role inside handler logic.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if !allowed_roles.contains(&auth_user.role()) {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required roles: {:?}, but user has role: {}",
            allowed_roles,
            auth_user.role()
        )));
    }

    Ok(())
}
