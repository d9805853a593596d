use crate::domain::item::{Item, ItemFields};
use crate::transport::http::handlers::{health, items};
use crate::transport::http::types::{
    AppState, ErrorResponse, ExistsResponse, HealthResponse, ItemIdRequest, ItemResponse,
    ItemsResponse, UpdateItemRequest,
};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        items::list_items_handler,
        items::get_item_handler,
        items::create_item_handler,
        items::update_item_handler,
        items::delete_item_handler,
        items::item_exists_handler,
        items::restaurant_items_handler
    ),
    components(schemas(
        Item,
        ItemFields,
        UpdateItemRequest,
        ItemIdRequest,
        ItemResponse,
        ItemsResponse,
        ExistsResponse,
        ErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/items",
            get(items::list_items_handler)
                .post(items::create_item_handler)
                .put(items::update_item_handler)
                .delete(items::delete_item_handler),
        )
        .route("/items/:item_id", get(items::get_item_handler))
        .route("/items/:item_id/exists", get(items::item_exists_handler))
        .route(
            "/restaurants/:rest_id/items",
            get(items::restaurant_items_handler),
        )
        .with_state(app_state)
}
