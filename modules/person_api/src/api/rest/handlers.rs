use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde_json::Value;
use tracing::info;

use crate::api::rest::dto::{
    GetPersonQuery, ListPersonsQuery, MessageDto, PersonDto, PersonField, RequestLogDto,
};
use crate::api::rest::error::ApiError;
use crate::api::rest::extract::{PersonId, ValidPerson};
use crate::domain::fields::FieldSelection;
use crate::domain::pagination::Pagination;
use crate::domain::service::Service;

type PersonSelection = FieldSelection<PersonField>;

/// List persons with optional pagination and field projection
pub async fn list_persons(
    Extension(svc): Extension<Arc<Service>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(pairs) = query?;
    let query = ListPersonsQuery::from_pairs(&pairs);
    let page = Pagination::from_query(query.page.as_deref(), query.page_size.as_deref());
    let selection = PersonSelection::parse(query.fields.as_deref());

    let persons: Vec<PersonDto> = svc
        .list_persons(page)
        .await?
        .into_iter()
        .map(PersonDto::from)
        .collect();
    Ok(Json(selection.apply(serde_json::to_value(persons)?)))
}

/// Get a specific person by id
pub async fn get_person(
    Extension(svc): Extension<Arc<Service>>,
    PersonId(id): PersonId,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(pairs) = query?;
    let query = GetPersonQuery::from_pairs(&pairs);
    let selection = PersonSelection::parse(query.fields.as_deref());

    let person = PersonDto::from(svc.get_person(id).await?);
    Ok(Json(selection.apply(serde_json::to_value(person)?)))
}

/// Create a new person
pub async fn create_person(
    Extension(svc): Extension<Arc<Service>>,
    ValidPerson(person): ValidPerson,
) -> Result<(StatusCode, Json<MessageDto>), ApiError> {
    let id = svc.create_person(person).await?;
    info!(person_id = id, "Person created");
    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Successfully created person")),
    ))
}

/// Replace every field of an existing person
pub async fn update_person(
    Extension(svc): Extension<Arc<Service>>,
    PersonId(id): PersonId,
    ValidPerson(person): ValidPerson,
) -> Result<Json<MessageDto>, ApiError> {
    svc.update_person(id, person).await?;
    Ok(Json(MessageDto::new("Successfully updated person")))
}

/// Delete a person by id
pub async fn delete_person(
    Extension(svc): Extension<Arc<Service>>,
    PersonId(id): PersonId,
) -> Result<Json<MessageDto>, ApiError> {
    svc.delete_person(id).await?;
    Ok(Json(MessageDto::new("Successfully deleted")))
}

/// Every stored request log entry, newest first
pub async fn list_request_logs(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<Vec<RequestLogDto>>, ApiError> {
    let logs = svc
        .list_request_logs()
        .await?
        .into_iter()
        .map(RequestLogDto::from)
        .collect();
    Ok(Json(logs))
}
