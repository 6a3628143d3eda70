use serde::{Deserialize, Serialize};

use crate::contract::model::{NewPerson, Person, RequestLogEntry};
use crate::domain::fields::FieldName;

/// REST representation of a person. Absent optionals serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthdate: Option<String>,
    pub bio: Option<String>,
    pub lucky_number: Option<i64>,
}

/// Body of create and update requests. Required fields are optional here so
/// that their absence is reported by validation rather than by the JSON decoder.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PersonPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub birthdate: Option<String>,
    pub bio: Option<String>,
    pub lucky_number: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestLogDto {
    pub id: i64,
    pub method: String,
    pub url: String,
    pub timestamp: String,
}

/// `{"message": ...}` body used by writes and by every error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Query parameters are kept raw; their lenient interpretation lives in the domain.
/// Built from the raw key/value pairs so repeated keys never fail a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPersonsQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub fields: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPersonQuery {
    pub fields: Option<String>,
}

impl ListPersonsQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: first_value(pairs, "page"),
            page_size: first_value(pairs, "pageSize"),
            fields: single_value(pairs, "fields"),
        }
    }
}

impl GetPersonQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            fields: single_value(pairs, "fields"),
        }
    }
}

/// First occurrence wins for numeric parameters.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

/// A repeated `fields` list is not a list of names; it means no projection.
fn single_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    let mut values = pairs.iter().filter(|(k, _)| k == key).map(|(_, v)| v);
    match (values.next(), values.next()) {
        (Some(v), None) => Some(v.clone()),
        _ => None,
    }
}

/// Projectable fields of [`PersonDto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonField {
    Id,
    FirstName,
    LastName,
    Email,
    Birthdate,
    Bio,
    LuckyNumber,
}

impl FieldName for PersonField {
    const ALL: &'static [Self] = &[
        PersonField::Id,
        PersonField::FirstName,
        PersonField::LastName,
        PersonField::Email,
        PersonField::Birthdate,
        PersonField::Bio,
        PersonField::LuckyNumber,
    ];

    fn name(self) -> &'static str {
        match self {
            PersonField::Id => "id",
            PersonField::FirstName => "first_name",
            PersonField::LastName => "last_name",
            PersonField::Email => "email",
            PersonField::Birthdate => "birthdate",
            PersonField::Bio => "bio",
            PersonField::LuckyNumber => "lucky_number",
        }
    }
}

// Conversion implementations between REST DTOs and contract models

impl From<Person> for PersonDto {
    fn from(p: Person) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name,
            last_name: p.last_name,
            email: p.email,
            birthdate: p.birthdate,
            bio: p.bio,
            lucky_number: p.lucky_number,
        }
    }
}

impl From<PersonPayload> for NewPerson {
    fn from(req: PersonPayload) -> Self {
        Self {
            first_name: req.first_name.unwrap_or_default(),
            last_name: req.last_name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            birthdate: req.birthdate,
            bio: req.bio,
            lucky_number: req.lucky_number,
        }
    }
}

impl From<RequestLogEntry> for RequestLogDto {
    fn from(e: RequestLogEntry) -> Self {
        Self {
            id: e.id,
            method: e.method,
            url: e.url,
            timestamp: e.timestamp,
        }
    }
}
