use std::sync::Arc;

use axum::{middleware, routing::get, Extension, Router};

use crate::api::rest::handlers;
use crate::api::rest::request_log::{log_request, LOGS_PATH};
use crate::domain::service::Service;

pub const PERSONS_PATH: &str = "/api/person";
pub const PERSON_PATH: &str = "/api/person/{id}";

/// Mount the person and request-log routes on `router`.
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let api = Router::new()
        .route(
            PERSONS_PATH,
            get(handlers::list_persons).post(handlers::create_person),
        )
        .route(
            PERSON_PATH,
            get(handlers::get_person)
                .put(handlers::update_person)
                .delete(handlers::delete_person),
        )
        .route(LOGS_PATH, get(handlers::list_request_logs))
        .layer(middleware::from_fn_with_state(service.clone(), log_request))
        .layer(Extension(service));

    tracing::debug!("Person routes registered");
    router.merge(api)
}
