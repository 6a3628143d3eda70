//! Records every inbound request in the request log table.
//!
//! The insert runs on a detached task; the response never waits for it and
//! never sees its outcome.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chrono::{SecondsFormat, Utc};
use tracing::{info, warn, Instrument};

use crate::contract::model::NewRequestLog;
use crate::domain::service::Service;

/// Reading the log must not grow it.
pub const LOGS_PATH: &str = "/api/logs";

pub async fn log_request(State(svc): State<Arc<Service>>, req: Request, next: Next) -> Response {
    if req.uri().path() != LOGS_PATH {
        let entry = NewRequestLog {
            method: req.method().to_string(),
            url: req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str().to_owned())
                .unwrap_or_else(|| req.uri().path().to_owned()),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        let received = format!(
            "Received a {} request for {} at {}",
            entry.method, entry.url, entry.timestamp
        );

        tokio::spawn(
            async move {
                match svc.record_request(entry).await {
                    Ok(_) => info!("{received}"),
                    Err(e) => warn!(error = %e, "Failed to store request log"),
                }
            }
            .instrument(tracing::Span::current()),
        );
    }

    next.run(req).await
}
