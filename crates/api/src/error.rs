use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fyyur_core::error::CoreError;
use serde::Serialize;

use crate::flash::{clear_cookie, Flash, PendingFlash};

/// Errors a page handler can end with.
///
/// Domain failures arrive as [`CoreError`]; reads that fail outside the
/// write boundary arrive as raw [`sqlx::Error`]. Either way the client sees
/// an `{ "error", "code" }` document and never the underlying cause.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A read query failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Serialized form of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
    /// A parked flash delivered along with the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<Flash>,
}

impl ErrorBody {
    pub fn new(code: &'static str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code,
            flash: None,
        }
    }

    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", "An internal error occurred")
    }
}

impl AppError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                ErrorBody::new("NOT_FOUND", format!("{entity} with id {id} not found")),
            ),
            AppError::Core(CoreError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("VALIDATION_ERROR", msg.as_str()),
            ),
            // The write boundary has already logged the cause.
            AppError::Core(CoreError::Persistence(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("PERSISTENCE_FAILURE", "The change could not be saved"),
            ),
            AppError::Database(sqlx::Error::RowNotFound) => (
                StatusCode::NOT_FOUND,
                ErrorBody::new("NOT_FOUND", "Resource not found"),
            ),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Read query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal())
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("BAD_REQUEST", msg.as_str()),
            ),
        }
    }

    /// Render the error together with the flash parked by the previous
    /// request, clearing its cookie.
    pub fn with_pending(self, PendingFlash(pending): PendingFlash) -> Response {
        let (status, mut body) = self.status_and_body();
        let clears = pending.is_some();
        body.flash = pending;

        let mut response = (status, Json(body)).into_response();
        if clears {
            response.headers_mut().append(SET_COOKIE, clear_cookie());
        }
        response
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}
