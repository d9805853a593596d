use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// A persisted menu item, as returned by every read and write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Item {
    pub item_id: i32,
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub price: f64,
    pub visible: bool,
    /// Owning restaurant reference.
    pub rest_id: String,
    /// Image URL.
    pub url: String,
    pub cat_id: i32,
    /// Joined from `categories.name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cat_name: Option<String>,
}

/// Raw candidate field values as received from a client.
///
/// Every field is kept as untyped JSON so validation can report malformed
/// values (`"price": "abc"`) instead of failing deserialization outright.
/// `null` deserializes to `None` and counts as "not supplied".
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ItemFields {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub desc: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub price: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub visible: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub rest_id: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub url: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub cat_id: Option<JsonValue>,
}

/// A fully validated item ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub visible: bool,
    pub rest_id: String,
    pub url: String,
    pub cat_id: i32,
}

/// Validated partial update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub visible: Option<bool>,
    pub rest_id: Option<String>,
    pub url: Option<String>,
    pub cat_id: Option<i32>,
}

impl ItemChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.visible.is_none()
            && self.rest_id.is_none()
            && self.url.is_none()
            && self.cat_id.is_none()
    }
}
