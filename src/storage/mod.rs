pub mod postgres;
pub mod query;
pub mod repository;

pub use postgres::PgItemRepository;
pub use repository::ItemRepository;
