// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Response-ready error carrying the `{error, message}` JSON body the API
/// returns on every non-2xx outcome.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let (status, message) = match err {
            ApplicationError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApplicationError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApplicationError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApplicationError::Infrastructure(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            // The reason phrase ("Bad Request", "Conflict", ...) doubles as
            // the machine-readable error label.
            error: self.status.canonical_reason().unwrap_or("Error"),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
