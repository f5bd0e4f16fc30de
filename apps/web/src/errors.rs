use std::any::Any;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so JSON handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Template(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs server-side faults. Client errors are not logged.
    fn log(&self) {
        match self {
            AppError::Template(e) => tracing::error!("Template error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            AppError::NotFound(_) => {}
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let (code, message) = match &self {
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
            AppError::Template(_) => (
                "TEMPLATE_ERROR",
                "The page could not be rendered".to_string(),
            ),
            AppError::Internal(_) => (
                "INTERNAL_ERROR",
                "An internal server error occurred".to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (self.status(), body).into_response()
    }
}

/// Error type for HTML routes. Same logging as `AppError`, but the body is a bare
/// HTML page that never carries error details.
///
/// Handlers render the branded 404 template themselves; the `NotFound` arm here only
/// keeps the status for errors converted from elsewhere.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl<E> From<E> for PageError
where
    E: Into<AppError>,
{
    fn from(err: E) -> Self {
        PageError(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        self.0.log();
        match self.0.status() {
            StatusCode::NOT_FOUND => {
                (StatusCode::NOT_FOUND, Html("<h1>Page Not Found</h1>")).into_response()
            }
            _ => internal_error_page(),
        }
    }
}

pub fn internal_error_page() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html("<h1>Something went wrong!</h1>"),
    )
        .into_response()
}

/// Panic handler for `CatchPanicLayer`: logs the payload and serves the generic 500 page.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!("Request handler panicked: {detail}");
    internal_error_page()
}
