//! Handlers for the `/items` resource.
//!
//! Status codes follow the public contract of the service: client-side
//! failures on the write endpoints are reported as 403, and a failed listing
//! is reported as 404.

use crate::domain::item::{supplied, ItemError, ItemFields};
use crate::transport::http::handlers::common::{id_label, item_error_reply, reject};
use crate::transport::http::types::{
    json_422, AppState, ExistsResponse, ItemIdRequest, ItemResponse, ItemsResponse,
    UpdateItemRequest,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All items with their category", body = ItemsResponse),
        (status = 404, description = "Items could not be retrieved", body = ErrorResponse)
    )
)]
pub async fn list_items_handler(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!("Getting all the items");

    match state.items.list_items().await {
        Ok(items) => (StatusCode::OK, Json(ItemsResponse { items })).into_response(),
        Err(e) => reject(
            StatusCode::NOT_FOUND,
            "could not retrieve items",
            Some(e.to_string()),
        )
        .into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/items/{item_id}",
    params(
        ("item_id" = String, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "The item", body = ItemResponse),
        (status = 403, description = "Malformed item id", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> impl IntoResponse {
    tracing::info!(item_id = %item_id, "Getting item");
    let raw_id = JsonValue::String(item_id);

    match state.items.get_item(&raw_id).await {
        Ok(item) => (StatusCode::OK, Json(ItemResponse { item })).into_response(),
        Err(ItemError::NotFound(_)) => reject(
            StatusCode::NOT_FOUND,
            format!("Item {} not found", id_label(&raw_id)),
            None,
        )
        .into_response(),
        Err(e @ ItemError::InvalidId) => {
            reject(StatusCode::FORBIDDEN, e.to_string(), None).into_response()
        }
        Err(e) => item_error_reply(&e, "could not retrieve item").into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/items",
    request_body = ItemFields,
    responses(
        (status = 200, description = "Item created", body = ItemResponse),
        (status = 403, description = "Validation or store failure", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorResponse)
    )
)]
pub async fn create_item_handler(
    State(state): State<AppState>,
    request: Result<Json<ItemFields>, JsonRejection>,
) -> impl IntoResponse {
    let Json(fields) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "an object of item fields").into_response(),
    };

    match state.items.create_item(&fields).await {
        Ok(item) => (StatusCode::OK, Json(ItemResponse { item })).into_response(),
        Err(e) => reject(
            StatusCode::FORBIDDEN,
            "Could not create item",
            Some(e.to_string()),
        )
        .into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/items",
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 403, description = "Missing id, validation or store failure", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorResponse)
    )
)]
pub async fn update_item_handler(
    State(state): State<AppState>,
    request: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, "{\"item_id\": ..., <fields to change>}").into_response()
        }
    };

    let Some(raw_id) = supplied(&request.item_id) else {
        return reject(StatusCode::FORBIDDEN, "Item ID not specified", None).into_response();
    };

    match state.items.update_item(raw_id, &request.fields).await {
        Ok(item) => (StatusCode::OK, Json(ItemResponse { item })).into_response(),
        Err(e @ ItemError::NotFound(_)) => reject(
            StatusCode::NOT_FOUND,
            format!("Item {} not found", id_label(raw_id)),
            Some(e.to_string()),
        )
        .into_response(),
        Err(e) => reject(
            StatusCode::FORBIDDEN,
            "Could not update item",
            Some(e.to_string()),
        )
        .into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/items",
    request_body = ItemIdRequest,
    responses(
        (status = 200, description = "Item deleted, the removed row is returned", body = ItemResponse),
        (status = 403, description = "Missing or malformed item id", body = ErrorResponse),
        (status = 404, description = "Item not found or store failure", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorResponse)
    )
)]
pub async fn delete_item_handler(
    State(state): State<AppState>,
    request: Result<Json<ItemIdRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"item_id\": ...}").into_response(),
    };

    let Some(raw_id) = supplied(&request.item_id) else {
        return reject(StatusCode::FORBIDDEN, "Item ID not specified", None).into_response();
    };

    match state.items.delete_item(raw_id).await {
        Ok(item) => (StatusCode::OK, Json(ItemResponse { item })).into_response(),
        Err(e @ ItemError::InvalidId) => {
            reject(StatusCode::FORBIDDEN, e.to_string(), None).into_response()
        }
        Err(e) => reject(
            StatusCode::NOT_FOUND,
            format!("Item {} not found", id_label(raw_id)),
            Some(e.to_string()),
        )
        .into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/items/{item_id}/exists",
    params(
        ("item_id" = String, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Whether the item exists", body = ExistsResponse),
        (status = 400, description = "Malformed item id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn item_exists_handler(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> impl IntoResponse {
    match state.items.item_exists(&JsonValue::String(item_id)).await {
        Ok(exists) => (StatusCode::OK, Json(ExistsResponse { exists })).into_response(),
        Err(e) => item_error_reply(&e, "could not check item").into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/restaurants/{rest_id}/items",
    params(
        ("rest_id" = String, Path, description = "Restaurant reference")
    ),
    responses(
        (status = 200, description = "Items of the restaurant", body = ItemsResponse),
        (status = 400, description = "Invalid restaurant reference", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn restaurant_items_handler(
    State(state): State<AppState>,
    Path(rest_id): Path<String>,
) -> impl IntoResponse {
    tracing::info!(rest_id = %rest_id, "Getting restaurant items");

    match state.items.list_restaurant_items(&rest_id).await {
        Ok(items) => (StatusCode::OK, Json(ItemsResponse { items })).into_response(),
        Err(e) => item_error_reply(&e, "could not retrieve restaurant items").into_response(),
    }
}
