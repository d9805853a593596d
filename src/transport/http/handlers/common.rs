use crate::domain::item::ItemError;
use crate::transport::http::types::ErrorResponse;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value as JsonValue;

pub type ErrorReply = (StatusCode, Json<ErrorResponse>);

pub fn reject(status: StatusCode, message: impl Into<String>, error: Option<String>) -> ErrorReply {
    (
        status,
        Json(ErrorResponse {
            message: message.into(),
            error,
        }),
    )
}

/// Maps an `ItemError` by its own code (400 / 404 / 500).
pub fn item_error_reply(e: &ItemError, message: &str) -> ErrorReply {
    let status =
        StatusCode::from_u16(e.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    reject(status, message, Some(e.to_string()))
}

/// Renders a raw identifier for messages (`5`, not `"5"`).
pub fn id_label(id: &JsonValue) -> String {
    match id {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
