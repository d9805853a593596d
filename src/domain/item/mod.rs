//! The Items resource: menu entries belonging to a restaurant and a category.

pub mod error;
pub mod model;
pub mod validate;

pub use error::{ItemError, ItemResult, ValidationErrors};
pub use model::{Item, ItemChanges, ItemFields, NewItem};
pub use validate::{parse_item_id, supplied, ItemValidator, RestaurantIdRule};
