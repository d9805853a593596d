//! Shared test fixtures: an in-memory `ItemRepository` and an in-process server.

#![allow(dead_code)]

use async_trait::async_trait;
use food_marketplace::{
    transport, Item, ItemChanges, ItemError, ItemRepository, ItemResult, ItemService,
    ItemValidator, NewItem, RestaurantIdRule,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Behaves like the PostgreSQL repository: serial ids, inner join on reads,
/// foreign-key failure for unknown categories.
pub struct MemoryItemRepository {
    items: Mutex<Vec<Item>>,
    categories: HashMap<i32, String>,
    next_id: Mutex<i32>,
    offline: AtomicBool,
}

impl MemoryItemRepository {
    pub fn new() -> Self {
        let categories = HashMap::from([(1, "Burgers".to_string()), (2, "Drinks".to_string())]);
        Self {
            items: Mutex::new(Vec::new()),
            categories,
            next_id: Mutex::new(1),
            offline: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent call fail like a lost database connection.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> ItemResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ItemError::Store(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn check_category(&self, cat_id: i32) -> ItemResult<()> {
        if !self.categories.contains_key(&cat_id) {
            return Err(ItemError::Store(sqlx::Error::Protocol(format!(
                "insert or update on table \"items\" violates foreign key constraint (cat_id={})",
                cat_id
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        self.check_online()?;
        Ok(self.items.lock().unwrap().clone())
    }

    async fn list_by_restaurant(&self, rest_id: &str) -> ItemResult<Vec<Item>> {
        self.check_online()?;
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.rest_id == rest_id)
            .cloned()
            .collect())
    }

    async fn get(&self, item_id: i32) -> ItemResult<Option<Item>> {
        self.check_online()?;
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.item_id == item_id)
            .cloned())
    }

    async fn insert(&self, item: &NewItem) -> ItemResult<Item> {
        self.check_online()?;
        self.check_category(item.cat_id)?;

        let mut next_id = self.next_id.lock().unwrap();
        let row = Item {
            item_id: *next_id,
            title: item.title.clone(),
            description: item.description.clone(),
            price: item.price,
            visible: item.visible,
            rest_id: item.rest_id.clone(),
            url: item.url.clone(),
            cat_id: item.cat_id,
            cat_name: self.categories.get(&item.cat_id).cloned(),
        };
        *next_id += 1;
        self.items.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, item_id: i32, changes: &ItemChanges) -> ItemResult<Option<Item>> {
        self.check_online()?;
        if changes.is_empty() {
            return Err(ItemError::EmptyUpdate);
        }
        if let Some(cat_id) = changes.cat_id {
            self.check_category(cat_id)?;
        }

        let mut items = self.items.lock().unwrap();
        let Some(row) = items.iter_mut().find(|i| i.item_id == item_id) else {
            return Ok(None);
        };
        if let Some(v) = &changes.title {
            row.title = v.clone();
        }
        if let Some(v) = &changes.description {
            row.description = v.clone();
        }
        if let Some(v) = changes.price {
            row.price = v;
        }
        if let Some(v) = changes.visible {
            row.visible = v;
        }
        if let Some(v) = &changes.rest_id {
            row.rest_id = v.clone();
        }
        if let Some(v) = &changes.url {
            row.url = v.clone();
        }
        if let Some(v) = changes.cat_id {
            row.cat_id = v;
            row.cat_name = self.categories.get(&v).cloned();
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, item_id: i32) -> ItemResult<Option<Item>> {
        self.check_online()?;
        let mut items = self.items.lock().unwrap();
        let pos = items.iter().position(|i| i.item_id == item_id);
        Ok(pos.map(|p| items.remove(p)))
    }

    async fn count(&self, item_id: i32) -> ItemResult<i64> {
        self.check_online()?;
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.item_id == item_id)
            .count() as i64)
    }

    async fn ping(&self) -> ItemResult<()> {
        self.check_online()
    }
}

pub fn memory_service(repo: Arc<MemoryItemRepository>, rule: RestaurantIdRule) -> ItemService {
    ItemService::new(repo, ItemValidator::new(rule))
}

/// Serves the router on an ephemeral port and returns its base URL.
pub async fn spawn_app(
    repo: Arc<MemoryItemRepository>,
) -> Result<String, Box<dyn std::error::Error>> {
    let app_state = transport::http::AppState {
        items: Arc::new(memory_service(repo, RestaurantIdRule::Identifier)),
    };
    let router = transport::http::create_router(app_state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Ok(format!("http://127.0.0.1:{}", port))
}
