//! The Items service.
//!
//! Sits between the HTTP layer and the store. It is responsible for:
//! 1.  Validating identifiers and item payloads before any store access.
//! 2.  Driving the `ItemRepository` (reads, insert, partial update, delete).
//! 3.  Turning absent rows into `ItemError::NotFound` so callers never see a
//!     silent success.

use crate::domain::item::{
    parse_item_id, Item, ItemError, ItemFields, ItemResult, ItemValidator, ValidationErrors,
};
use crate::storage::ItemRepository;
use serde_json::Value as JsonValue;
use std::sync::Arc;

pub struct ItemService {
    repo: Arc<dyn ItemRepository>,
    validator: ItemValidator,
}

impl ItemService {
    pub fn new(repo: Arc<dyn ItemRepository>, validator: ItemValidator) -> Self {
        Self { repo, validator }
    }

    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repo.list().await.map_err(log_store_error)
    }

    /// Items of one restaurant; the reference must pass the configured restaurant rule.
    pub async fn list_restaurant_items(&self, rest_id: &str) -> ItemResult<Vec<Item>> {
        if !self.validator.is_valid_restaurant(rest_id) {
            let mut errors = ValidationErrors::new();
            errors.push("Restaurant is not valid");
            return Err(errors.into());
        }
        self.repo
            .list_by_restaurant(rest_id)
            .await
            .map_err(log_store_error)
    }

    pub async fn get_item(&self, raw_id: &JsonValue) -> ItemResult<Item> {
        let item_id = parse_item_id(raw_id)?;
        self.repo
            .get(item_id)
            .await
            .map_err(log_store_error)?
            .ok_or(ItemError::NotFound(item_id))
    }

    pub async fn create_item(&self, fields: &ItemFields) -> ItemResult<Item> {
        let new_item = self.validator.check_creation(fields).map_err(|e| {
            tracing::debug!("Rejected item creation: {}", e.messages().join("; "));
            ItemError::from(e)
        })?;

        let item = self.repo.insert(&new_item).await.map_err(log_store_error)?;
        tracing::info!(item_id = item.item_id, rest_id = %item.rest_id, "Created item");
        Ok(item)
    }

    /// Applies only the supplied fields; everything else keeps its stored value.
    pub async fn update_item(&self, raw_id: &JsonValue, fields: &ItemFields) -> ItemResult<Item> {
        let item_id = parse_item_id(raw_id)?;
        let changes = self.validator.check_update(fields).map_err(|e| {
            tracing::debug!(item_id, "Rejected item update: {}", e.messages().join("; "));
            ItemError::from(e)
        })?;

        let item = self
            .repo
            .update(item_id, &changes)
            .await
            .map_err(log_store_error)?
            .ok_or(ItemError::NotFound(item_id))?;
        tracing::info!(item_id, "Updated item");
        Ok(item)
    }

    pub async fn delete_item(&self, raw_id: &JsonValue) -> ItemResult<Item> {
        let item_id = parse_item_id(raw_id)?;
        let item = self
            .repo
            .delete(item_id)
            .await
            .map_err(log_store_error)?
            .ok_or(ItemError::NotFound(item_id))?;
        tracing::info!(item_id, "Deleted item");
        Ok(item)
    }

    pub async fn item_exists(&self, raw_id: &JsonValue) -> ItemResult<bool> {
        let item_id = parse_item_id(raw_id)?;
        let count = self.repo.count(item_id).await.map_err(log_store_error)?;
        Ok(count > 0)
    }

    pub async fn ping(&self) -> ItemResult<()> {
        self.repo.ping().await
    }
}

fn log_store_error(e: ItemError) -> ItemError {
    if let ItemError::Store(inner) = &e {
        tracing::error!("Store failure: {}", inner);
    }
    e
}
