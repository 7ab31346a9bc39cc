//! The uniform `{status, message, result}` response envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

/// Render a response in the service-wide envelope.
///
/// The `status` field of the body always mirrors the HTTP status line.
pub fn render(status: StatusCode, message: &str, result: impl Serialize) -> Response {
    (
        status,
        Json(json!({
            "status": status.as_u16(),
            "message": message,
            "result": result,
        })),
    )
        .into_response()
}
