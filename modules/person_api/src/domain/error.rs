use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Person not found: {id}")]
    PersonNotFound { id: i64 },

    #[error("{message}")]
    Validation { message: String },

    /// Carries the store's own message; it is reported to clients verbatim.
    #[error("{message}")]
    Database { message: String },
}

impl DomainError {
    pub fn person_not_found(id: i64) -> Self {
        Self::PersonNotFound { id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Keep only the root cause: the context layers added by repositories are
    /// for logs, the client gets what the store said.
    pub fn database(err: &anyhow::Error) -> Self {
        tracing::error!(error = %format!("{err:#}"), "Store operation failed");
        Self::Database {
            message: err.root_cause().to_string(),
        }
    }
}
