//! Landing page and the fallback pages.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::ErrorBody;
use crate::flash::PendingFlash;
use crate::response::Page;
use crate::views::Home;

/// GET /
pub async fn index(pending: PendingFlash) -> Page<Home> {
    Page::new("home", Home::default()).with_pending(pending)
}

/// Any route that matches nothing.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new("NOT_FOUND", "Page not found")),
    )
        .into_response()
}

/// Turn a handler panic into the generic server error page.
pub fn server_error(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = %detail, "Handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::internal())).into_response()
}
