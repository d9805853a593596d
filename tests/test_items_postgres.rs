//! Round trip against a real PostgreSQL database.
//!
//! Runs only when `DATABASE_URL` is set (e.g. via `.env`); otherwise it is skipped.

use food_marketplace::storage::postgres;
use food_marketplace::{
    Config, ItemError, ItemFields, ItemService, ItemValidator, PgItemRepository,
    RestaurantIdRule,
};
use serde_json::json;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_items_postgres_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        println!("DATABASE_URL not set, skipping PostgreSQL round trip");
        return Ok(());
    }

    let config = Config::from_env()?;
    let pool = postgres::connect(&config).await?;
    postgres::ensure_schema(&pool).await?;
    assert!(postgres::missing_tables(&pool).await?.is_empty());

    let cat_id: i32 =
        sqlx::query_scalar("INSERT INTO categories (name) VALUES ($1) RETURNING cat_id")
            .bind("Test burgers")
            .fetch_one(&pool)
            .await?;

    let service = ItemService::new(
        Arc::new(PgItemRepository::new(pool.clone())),
        ItemValidator::new(RestaurantIdRule::Identifier),
    );

    let rest_id = "itest_restaurant";
    let fields: ItemFields = serde_json::from_value(json!({
        "title": "Burger",
        "desc": "Tasty",
        "price": 5.5,
        "url": "http://x/y.png",
        "rest_id": rest_id,
        "cat_id": cat_id
    }))?;

    // --- create + read ---
    let created = service.create_item(&fields).await?;
    println!("created: {:?}", created);
    assert!(created.item_id > 0);
    assert!(!created.visible);
    assert_eq!(created.cat_name.as_deref(), Some("Test burgers"));

    let read = service.get_item(&json!(created.item_id)).await?;
    assert_eq!(read, created);
    assert!(service.item_exists(&json!(created.item_id)).await?);

    let listed = service.list_restaurant_items(rest_id).await?;
    assert!(listed.iter().any(|i| i.item_id == created.item_id));

    // --- partial update ---
    let changes: ItemFields = serde_json::from_value(json!({ "title": "Cheeseburger" }))?;
    let updated = service
        .update_item(&json!(created.item_id), &changes)
        .await?;
    assert_eq!(updated.title, "Cheeseburger");
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.price, created.price);
    assert_eq!(updated.url, created.url);
    assert_eq!(updated.cat_id, created.cat_id);

    // --- unknown category surfaces as a store error ---
    let mut bad_fields = fields.clone();
    bad_fields.cat_id = Some(json!(i32::MAX));
    let err = service.create_item(&bad_fields).await.unwrap_err();
    assert_eq!(err.code(), 500);

    // --- delete ---
    let deleted = service.delete_item(&json!(created.item_id)).await?;
    assert_eq!(deleted.item_id, created.item_id);
    assert!(!service.item_exists(&json!(created.item_id)).await?);

    let err = service.delete_item(&json!(created.item_id)).await.unwrap_err();
    assert!(matches!(err, ItemError::NotFound(id) if id == created.item_id));

    sqlx::query("DELETE FROM items WHERE rest_id = $1")
        .bind(rest_id)
        .execute(&pool)
        .await?;
    sqlx::query("DELETE FROM categories WHERE cat_id = $1")
        .bind(cat_id)
        .execute(&pool)
        .await?;

    Ok(())
}
