//! HTTP error mapping
//!
//! Every failure leaves the server as a JSON object with a `message` field.

use air_core::Error;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A failed request, ready to be rendered
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    detail: Option<String>,
}

impl ApiError {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "Task not found".to_string(),
            detail: None,
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid task data".to_string(),
            detail: Some(detail.into()),
        }
    }

    /// Map a core error; `context` names the operation for server errors
    pub fn from_core(context: &str, err: Error) -> Self {
        match err {
            Error::TaskNotFound(_) => Self::not_found(),
            Error::Validation(e) => Self::bad_request(e.to_string()),
            e @ (Error::Storage(_)
            | Error::Io(_)
            | Error::Serialization(_)
            | Error::Config(_)
            | Error::SeedRefused(_)) => {
                error!("{}: {}", context, e);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: context.to_string(),
                    detail: Some(e.to_string()),
                }
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                message: self.message,
                error: self.detail,
            }),
        )
            .into_response()
    }
}
