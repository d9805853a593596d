//! PostgreSQL implementation of `ItemRepository`.

use crate::domain::item::{Item, ItemChanges, ItemResult, NewItem};
use crate::storage::query;
use crate::storage::repository::ItemRepository;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(query::SELECT_ALL_ITEMS)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn list_by_restaurant(&self, rest_id: &str) -> ItemResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(query::SELECT_ITEMS_BY_RESTAURANT)
            .bind(rest_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn get(&self, item_id: i32) -> ItemResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(query::SELECT_ITEM_BY_ID)
            .bind(item_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    async fn insert(&self, item: &NewItem) -> ItemResult<Item> {
        let inserted = sqlx::query_as::<_, Item>(query::INSERT_ITEM)
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.price)
            .bind(item.visible)
            .bind(&item.rest_id)
            .bind(&item.url)
            .bind(item.cat_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(inserted)
    }

    async fn update(&self, item_id: i32, changes: &ItemChanges) -> ItemResult<Option<Item>> {
        let mut qb = query::update_item(item_id, changes)?;
        let updated = qb
            .build_query_as::<Item>()
            .fetch_optional(&self.pool)
            .await?;
        Ok(updated)
    }

    async fn delete(&self, item_id: i32) -> ItemResult<Option<Item>> {
        let deleted = sqlx::query_as::<_, Item>(query::DELETE_ITEM)
            .bind(item_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(deleted)
    }

    async fn count(&self, item_id: i32) -> ItemResult<i64> {
        let count: i64 = sqlx::query_scalar(query::COUNT_ITEM)
            .bind(item_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn ping(&self) -> ItemResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
