use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::services::completion::CompletionError;
use crate::services::recovery::RecoveryError;

/// Failures of `POST /api/search`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request body: {}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error("Missing required fields: {}", .0.to_string().trim_end())]
    Validation(#[from] garde::Report),

    #[error("Completion API key is not configured")]
    MissingCompletionKey,

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Recovery(#[from] RecoveryError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Body(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Label for the failure counter.
    pub fn reason(&self) -> &'static str {
        match self {
            ApiError::Body(_) => "body",
            ApiError::Validation(_) => "validation",
            ApiError::MissingCompletionKey => "configuration",
            ApiError::Completion(_) => "completion",
            ApiError::Recovery(_) => "recovery",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let raw = match &self {
            ApiError::Recovery(RecoveryError::NoJsonArray { raw }) => Some(raw.clone()),
            _ => None,
        };
        let body = ErrorBody {
            error: self.to_string(),
            raw,
        };
        (status, Json(body)).into_response()
    }
}

/// Turns a handler panic into the regular 500 JSON body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %message, "Handler panicked");
    metrics::counter!("hotel_search_failures_total", "reason" => "internal").increment(1);
    ApiError::Internal(message).into_response()
}
