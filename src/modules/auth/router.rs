use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{login, logout, profile, refresh, register};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/profile", get(profile))
        .route("/logout", post(logout))
}
