pub mod connection;
pub mod error;
pub mod repositories;
pub mod store;

pub use connection::pool::{connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::department_repository::DepartmentRepository;
pub use repositories::user_repository::UserRepository;
pub use store::catalog_repository::CatalogRepository;
pub use store::document::Document;
pub use store::document_store::DocumentStore;
pub use store::filter::Filter;
