//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

/// Body of every JSON error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Errors

pub struct ApiError {
    status: StatusCode,
    error: anyhow::Error,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<anyhow::Error>) -> Self {
        Self {
            status,
            error: error.into(),
        }
    }

    pub fn not_found(what: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, anyhow::anyhow!("{} not found", what))
    }

    pub fn bad_request(error: impl Into<anyhow::Error>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("{}", self.error);
            return (
                self.status,
                format!("Something went wrong: {}", self.error),
            )
                .into_response();
        }

        tracing::debug!("Rejected request: {}", self.error);
        (
            self.status,
            Json(ErrorResponse {
                error: self.error.to_string(),
            }),
        )
            .into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }
}

// Re-export public types from each route

pub mod babies {
    pub use crate::api::routes::babies::public::*;
}

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}

pub mod reference {
    pub use crate::api::routes::reference::public::*;
}

pub mod session {
    pub use crate::api::routes::session::public::*;
}

pub mod wellness {
    pub use crate::api::routes::wellness::public::*;
}
