//! Connection pool setup and idempotent schema creation.

use crate::infra::Config;
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Application tables, in creation order (`items` references `categories`).
pub const APP_TABLES: &[&str] = &["categories", "items"];

const CREATE_CATEGORIES: &str = "CREATE TABLE IF NOT EXISTS categories (
    cat_id SERIAL PRIMARY KEY,
    name VARCHAR(50) NOT NULL
)";

const CREATE_ITEMS: &str = "CREATE TABLE IF NOT EXISTS items (
    item_id SERIAL PRIMARY KEY,
    title VARCHAR(30) NOT NULL,
    description VARCHAR(200) NOT NULL,
    price DOUBLE PRECISION NOT NULL CHECK (price >= 0),
    visible BOOLEAN NOT NULL DEFAULT FALSE,
    rest_id VARCHAR(50) NOT NULL,
    url VARCHAR(200) NOT NULL,
    cat_id INTEGER NOT NULL REFERENCES categories (cat_id)
)";

const CREATE_ITEMS_REST_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS items_rest_id_idx ON items (rest_id)";

pub async fn connect(config: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to DATABASE_URL")?;
    Ok(pool)
}

/// Creates the `categories` and `items` tables when missing.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    for sql in [CREATE_CATEGORIES, CREATE_ITEMS, CREATE_ITEMS_REST_INDEX] {
        sqlx::query(sql)
            .execute(pool)
            .await
            .context("failed to create application schema")?;
    }
    Ok(())
}

/// Returns the application tables that do not exist in the `public` schema.
pub async fn missing_tables(pool: &PgPool) -> anyhow::Result<Vec<String>> {
    let present: Vec<String> = sqlx::query_scalar(
        "SELECT table_name::text
         FROM information_schema.tables
         WHERE table_schema = 'public' AND table_type = 'BASE TABLE'",
    )
    .fetch_all(pool)
    .await?;

    Ok(APP_TABLES
        .iter()
        .filter(|t| !present.iter().any(|p| p == *t))
        .map(|t| t.to_string())
        .collect())
}
