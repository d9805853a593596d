use crate::app::item_service::ItemService;
use crate::domain::item::{Item, ItemFields};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemService>,
}

/// Body of `PUT /items`: the target id plus any subset of item fields.
#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateItemRequest {
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub item_id: Option<JsonValue>,
    #[serde(flatten)]
    pub fields: ItemFields,
}

/// Body of `DELETE /items`.
#[derive(Deserialize, Debug, ToSchema)]
pub struct ItemIdRequest {
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub item_id: Option<JsonValue>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ItemResponse {
    pub item: Item,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    /// Underlying error text (validation messages are newline separated).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            message: format!("Invalid JSON body (expected: {})", expected),
            error: Some(err.to_string()),
        }),
    )
}
