use sea_orm::FromQueryResult;

use crate::contract::model::{Person, RequestLogEntry};

/// Row shape of the `Person` table.
#[derive(Debug, Clone, FromQueryResult)]
pub struct PersonRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthdate: Option<String>,
    pub bio: Option<String>,
    pub lucky_number: Option<i64>,
}

impl From<PersonRow> for Person {
    fn from(r: PersonRow) -> Self {
        Person {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            birthdate: r.birthdate,
            bio: r.bio,
            lucky_number: r.lucky_number,
        }
    }
}

/// Row shape of the `RequestLog` table.
#[derive(Debug, Clone, FromQueryResult)]
pub struct RequestLogRow {
    pub id: i64,
    pub method: String,
    pub url: String,
    pub timestamp: String,
}

impl From<RequestLogRow> for RequestLogEntry {
    fn from(r: RequestLogRow) -> Self {
        RequestLogEntry {
            id: r.id,
            method: r.method,
            url: r.url,
            timestamp: r.timestamp,
        }
    }
}
