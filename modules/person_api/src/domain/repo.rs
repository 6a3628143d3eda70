use crate::contract::model::{NewPerson, NewRequestLog, Person, RequestLogEntry};
use crate::domain::pagination::Pagination;
use async_trait::async_trait;

/// Port for the domain layer: person persistence.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait PersonsRepository: Send + Sync {
    /// Load a person by id.
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Person>>;
    /// All persons in store order, optionally windowed.
    async fn list(&self, page: Option<Pagination>) -> anyhow::Result<Vec<Person>>;
    /// Insert a new person. Returns the store-assigned id.
    async fn insert(&self, p: NewPerson) -> anyhow::Result<i64>;
    /// Overwrite every field of an existing person. Returns the number of rows touched.
    async fn update(&self, id: i64, p: NewPerson) -> anyhow::Result<u64>;
    /// Delete by id. Returns the number of rows removed.
    async fn delete(&self, id: i64) -> anyhow::Result<u64>;
}

/// Port for the append-only request log.
#[async_trait]
pub trait RequestLogRepository: Send + Sync {
    async fn insert(&self, entry: NewRequestLog) -> anyhow::Result<i64>;
    /// Every entry, newest first.
    async fn list_newest_first(&self) -> anyhow::Result<Vec<RequestLogEntry>>;
}
