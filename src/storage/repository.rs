//! Storage abstraction for items.
//!
//! The service only talks to this trait, so tests can swap the PostgreSQL
//! implementation for an in-memory one.

use crate::domain::item::{Item, ItemChanges, ItemResult, NewItem};
use async_trait::async_trait;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items joined with their category, ordered by id.
    async fn list(&self) -> ItemResult<Vec<Item>>;

    async fn list_by_restaurant(&self, rest_id: &str) -> ItemResult<Vec<Item>>;

    async fn get(&self, item_id: i32) -> ItemResult<Option<Item>>;

    /// Inserts a row; the store assigns `item_id`.
    async fn insert(&self, item: &NewItem) -> ItemResult<Item>;

    /// Returns `None` when no row has this id.
    async fn update(&self, item_id: i32, changes: &ItemChanges) -> ItemResult<Option<Item>>;

    /// Returns the removed row, or `None` when no row has this id.
    async fn delete(&self, item_id: i32) -> ItemResult<Option<Item>>;

    async fn count(&self, item_id: i32) -> ItemResult<i64>;

    /// Cheap connectivity probe for health checks.
    async fn ping(&self) -> ItemResult<()>;
}
