//! FurniLayout showcase backend: CMS content, house-type catalog, FAQs,
//! contact inbox, and social media links over PostgreSQL.

pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use routes::{api_routes, create_app};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
