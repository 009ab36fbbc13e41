use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application error carrying the HTTP status it maps to.
///
/// Services build these with the named constructors; handlers bubble them up
/// with `?` and axum renders them as `{"error": "..."}` JSON.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::FORBIDDEN, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::CONFLICT, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.error, "request failed");
        }

        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
