pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::item_service::ItemService;
pub use domain::item::{
    Item, ItemChanges, ItemError, ItemFields, ItemResult, ItemValidator, NewItem,
    RestaurantIdRule, ValidationErrors,
};
pub use infra::Config;
pub use storage::{ItemRepository, PgItemRepository};
