//! Request guards that run before a handler body.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};

use crate::api::rest::dto::PersonPayload;
use crate::api::rest::error::ApiError;
use crate::contract::model::NewPerson;
use crate::domain::service::validate_new_person;

pub const ID_NOT_A_NUMBER: &str = "id must be a number";

/// `{id}` path segment parsed as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonId(pub i64);

impl<S> FromRequestParts<S> for PersonId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bad_request(ID_NOT_A_NUMBER))?;
        raw.parse::<i64>()
            .map(PersonId)
            .map_err(|_| ApiError::bad_request(ID_NOT_A_NUMBER))
    }
}

/// JSON body carrying every required person field.
#[derive(Debug, Clone)]
pub struct ValidPerson(pub NewPerson);

impl<S> FromRequest<S> for ValidPerson
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<PersonPayload>::from_request(req, state)
            .await
            .map_err(|rej| ApiError::bad_request(rej.body_text()))?;
        let person = NewPerson::from(payload);
        validate_new_person(&person)?;
        Ok(ValidPerson(person))
    }
}
