use std::sync::Arc;

use crate::contract::model::{NewPerson, NewRequestLog, Person, RequestLogEntry};
use crate::domain::error::DomainError;
use crate::domain::pagination::Pagination;
use crate::domain::repo::{PersonsRepository, RequestLogRepository};
use tracing::{debug, info, instrument};

pub const REQUIRED_FIELDS_MESSAGE: &str = "first_name, last_name, and email are required";

/// Domain service for persons and the request log.
/// Depends only on the repository ports, not on infra types.
#[derive(Clone)]
pub struct Service {
    persons: Arc<dyn PersonsRepository>,
    logs: Arc<dyn RequestLogRepository>,
}

impl Service {
    pub fn new(persons: Arc<dyn PersonsRepository>, logs: Arc<dyn RequestLogRepository>) -> Self {
        Self { persons, logs }
    }

    #[instrument(name = "person_api.service.list_persons", skip(self))]
    pub async fn list_persons(&self, page: Option<Pagination>) -> Result<Vec<Person>, DomainError> {
        debug!("Listing persons");
        let persons = self
            .persons
            .list(page)
            .await
            .map_err(|e| DomainError::database(&e))?;
        debug!("Listed {} persons", persons.len());
        Ok(persons)
    }

    #[instrument(name = "person_api.service.get_person", skip(self), fields(person_id = id))]
    pub async fn get_person(&self, id: i64) -> Result<Person, DomainError> {
        debug!("Getting person by id");
        self.persons
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(&e))?
            .ok_or_else(|| DomainError::person_not_found(id))
    }

    #[instrument(
        name = "person_api.service.create_person",
        skip(self, new_person),
        fields(email = %new_person.email)
    )]
    pub async fn create_person(&self, new_person: NewPerson) -> Result<i64, DomainError> {
        info!("Creating new person");
        validate_new_person(&new_person)?;

        let id = self
            .persons
            .insert(new_person)
            .await
            .map_err(|e| DomainError::database(&e))?;

        info!("Successfully created person with id={id}");
        Ok(id)
    }

    #[instrument(
        name = "person_api.service.update_person",
        skip(self, person),
        fields(person_id = id)
    )]
    pub async fn update_person(&self, id: i64, person: NewPerson) -> Result<(), DomainError> {
        info!("Updating person");
        validate_new_person(&person)?;

        let touched = self
            .persons
            .update(id, person)
            .await
            .map_err(|e| DomainError::database(&e))?;
        if touched == 0 {
            return Err(DomainError::person_not_found(id));
        }

        info!("Successfully updated person");
        Ok(())
    }

    #[instrument(name = "person_api.service.delete_person", skip(self), fields(person_id = id))]
    pub async fn delete_person(&self, id: i64) -> Result<(), DomainError> {
        info!("Deleting person");

        let removed = self
            .persons
            .delete(id)
            .await
            .map_err(|e| DomainError::database(&e))?;
        if removed == 0 {
            return Err(DomainError::person_not_found(id));
        }

        info!("Successfully deleted person");
        Ok(())
    }

    /// Store one request log entry. Callers run this off the response path.
    #[instrument(
        name = "person_api.service.record_request",
        skip(self, entry),
        fields(method = %entry.method, url = %entry.url)
    )]
    pub async fn record_request(&self, entry: NewRequestLog) -> Result<i64, DomainError> {
        self.logs
            .insert(entry)
            .await
            .map_err(|e| DomainError::database(&e))
    }

    #[instrument(name = "person_api.service.list_request_logs", skip(self))]
    pub async fn list_request_logs(&self) -> Result<Vec<RequestLogEntry>, DomainError> {
        let entries = self
            .logs
            .list_newest_first()
            .await
            .map_err(|e| DomainError::database(&e))?;
        debug!("Listed {} request log entries", entries.len());
        Ok(entries)
    }
}

/// Required fields must be present and non-empty. Optional fields are not checked.
pub fn validate_new_person(p: &NewPerson) -> Result<(), DomainError> {
    if p.first_name.is_empty() || p.last_name.is_empty() || p.email.is_empty() {
        return Err(DomainError::validation(REQUIRED_FIELDS_MESSAGE));
    }
    Ok(())
}
