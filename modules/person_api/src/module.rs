use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::api::rest::routes;
use crate::domain::repo::PersonsRepository;
use crate::domain::service::Service;
use crate::infra::storage::{
    schema, seed, SqlExecutor, SqlPersonsRepository, SqlRequestLogRepository,
};

/// Wires the SQL repositories to the domain service and exposes its routes.
#[derive(Clone)]
pub struct PersonModule {
    persons: Arc<dyn PersonsRepository>,
    service: Arc<Service>,
}

impl PersonModule {
    /// Create the tables if needed and build the service over `db`.
    pub async fn init(db: DatabaseConnection) -> anyhow::Result<Self> {
        info!("Initializing person module");
        let exec = SqlExecutor::new(db);
        schema::ensure_schema(&exec).await?;

        let persons: Arc<dyn PersonsRepository> =
            Arc::new(SqlPersonsRepository::new(exec.clone()));
        let logs = Arc::new(SqlRequestLogRepository::new(exec));
        let service = Arc::new(Service::new(persons.clone(), logs));

        Ok(Self { persons, service })
    }

    /// Insert `count` randomly generated persons.
    pub async fn seed(&self, count: u32) -> anyhow::Result<()> {
        if count == 0 {
            return Ok(());
        }
        seed::seed_persons(self.persons.as_ref(), count).await
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Add the REST routes to `router`.
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering person REST routes");
        routes::register_routes(router, self.service.clone())
    }
}
