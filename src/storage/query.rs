//! SQL for the `items` table.
//!
//! Every statement binds values as parameters. Write statements go through a
//! CTE so the returned row carries `cat_name` like the reads do.

use crate::domain::item::{ItemChanges, ItemError, ItemResult};
use sqlx::{Postgres, QueryBuilder};

pub const SELECT_ALL_ITEMS: &str = "SELECT items.*, categories.name AS cat_name \
     FROM items JOIN categories ON categories.cat_id = items.cat_id \
     ORDER BY items.item_id";

pub const SELECT_ITEM_BY_ID: &str = "SELECT items.*, categories.name AS cat_name \
     FROM items JOIN categories ON categories.cat_id = items.cat_id \
     WHERE items.item_id = $1";

pub const SELECT_ITEMS_BY_RESTAURANT: &str = "SELECT items.*, categories.name AS cat_name \
     FROM items JOIN categories ON categories.cat_id = items.cat_id \
     WHERE items.rest_id = $1 \
     ORDER BY items.item_id";

/// `item_id` is left to the `SERIAL` default.
pub const INSERT_ITEM: &str = "WITH item AS ( \
     INSERT INTO items (title, description, price, visible, rest_id, url, cat_id) \
     VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING * \
     ) \
     SELECT item.*, categories.name AS cat_name \
     FROM item LEFT JOIN categories ON categories.cat_id = item.cat_id";

pub const DELETE_ITEM: &str = "WITH item AS ( \
     DELETE FROM items WHERE item_id = $1 RETURNING * \
     ) \
     SELECT item.*, categories.name AS cat_name \
     FROM item LEFT JOIN categories ON categories.cat_id = item.cat_id";

pub const COUNT_ITEM: &str = "SELECT COUNT(*) FROM items WHERE item_id = $1";

const SELECT_RETURNED_ITEM: &str = " SELECT item.*, categories.name AS cat_name \
     FROM item LEFT JOIN categories ON categories.cat_id = item.cat_id";

/// Builds an UPDATE that sets exactly the columns present in `changes`.
///
/// Column names come from the closed `ItemChanges` set, never from client keys.
pub fn update_item(item_id: i32, changes: &ItemChanges) -> ItemResult<QueryBuilder<'static, Postgres>> {
    if changes.is_empty() {
        return Err(ItemError::EmptyUpdate);
    }

    let mut qb: QueryBuilder<'static, Postgres> =
        QueryBuilder::new("WITH item AS ( UPDATE items SET ");
    {
        let mut set = qb.separated(", ");
        if let Some(title) = &changes.title {
            set.push("title = ").push_bind_unseparated(title.clone());
        }
        if let Some(description) = &changes.description {
            set.push("description = ")
                .push_bind_unseparated(description.clone());
        }
        if let Some(price) = changes.price {
            set.push("price = ").push_bind_unseparated(price);
        }
        if let Some(visible) = changes.visible {
            set.push("visible = ").push_bind_unseparated(visible);
        }
        if let Some(rest_id) = &changes.rest_id {
            set.push("rest_id = ").push_bind_unseparated(rest_id.clone());
        }
        if let Some(url) = &changes.url {
            set.push("url = ").push_bind_unseparated(url.clone());
        }
        if let Some(cat_id) = changes.cat_id {
            set.push("cat_id = ").push_bind_unseparated(cat_id);
        }
    }
    qb.push(" WHERE item_id = ")
        .push_bind(item_id)
        .push(" RETURNING * )")
        .push(SELECT_RETURNED_ITEM);

    Ok(qb)
}
