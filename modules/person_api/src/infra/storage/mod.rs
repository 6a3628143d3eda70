//! SQLite-backed storage for the person module.

pub mod connect;
pub mod executor;
pub mod rows;
pub mod schema;
pub mod seed;
pub mod sql_repo;

pub use connect::{connect, StoreOptions};
pub use executor::{RunOutcome, SqlExecutor};
pub use sql_repo::{SqlPersonsRepository, SqlRequestLogRepository};
