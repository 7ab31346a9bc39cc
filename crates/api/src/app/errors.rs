use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use userbase_core::DomainError;

use crate::app::envelope;

/// Closed set of API error kinds, each with a distinct HTTP status and a
/// machine-readable code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// URI or body binding failed schema constraints.
    #[error("{message}")]
    BadRequest { message: String, code: &'static str },

    /// The addressed record (or route) does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request conflicts with existing state.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected failure inside the pipeline.
    #[error("internal error")]
    Internal,
}

impl ApiError {
    /// Binding/validation failure, reported with the `INVALID_BODY` code.
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            code: "INVALID_BODY",
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest { code, .. } => code,
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal => "INTERNAL",
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::invalid_body(msg),
            DomainError::InvalidId(_) => {
                Self::invalid_body("Param must be of type integer, required")
            }
            DomainError::NotFound => Self::not_found("User not found"),
            DomainError::Conflict(msg) => Self::Conflict(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        envelope::render(self.status(), &self.to_string(), json!({ "code": self.code() }))
    }
}
