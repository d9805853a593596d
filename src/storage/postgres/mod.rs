pub mod items;
pub mod schema;

pub use items::PgItemRepository;
pub use schema::{connect, ensure_schema, missing_tables};
