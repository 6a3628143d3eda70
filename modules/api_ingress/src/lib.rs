//! HTTP ingress: owns the listener and the cross-cutting layers every
//! request passes through before reaching a module's routes.

use anyhow::{Context, Result};
use axum::{middleware::from_fn, routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

mod config;
pub mod request_id;
mod shutdown;
mod web;

pub use config::ApiIngressConfig;
pub use shutdown::wait_for_shutdown;

/// Hosts module routers behind a common middleware stack.
#[derive(Debug, Clone, Default)]
pub struct ApiIngress {
    config: ApiIngressConfig,
}

impl ApiIngress {
    pub fn new(config: ApiIngressConfig) -> Self {
        Self { config }
    }

    /// Wrap module routes with `/health` and the ingress layers.
    pub fn build_router(&self, routes: Router) -> Router {
        tracing::debug!("Building ingress router");
        let mut router = routes.route("/health", get(web::health_check));

        // Layers are added innermost first. A request passes them as:
        // SetRequestId -> PropagateRequestId -> Trace -> push_req_id_to_extensions
        //   -> Timeout -> CORS -> BodyLimit -> routes
        router = router.layer(RequestBodyLimitLayer::new(self.config.body_limit_bytes));

        if self.config.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }

        if let Some(timeout) = self.config.request_timeout() {
            router = router.layer(TimeoutLayer::new(timeout));
        }

        let x_request_id = request_id::header();
        router = router.layer(from_fn(request_id::push_req_id_to_extensions));
        router = router.layer(request_id::create_trace_layer());
        router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
        router = router.layer(SetRequestIdLayer::new(x_request_id, request_id::MakeReqId));

        router
    }

    /// Bind the configured address.
    pub async fn bind(&self) -> Result<TcpListener> {
        let addr: SocketAddr = self
            .config
            .bind_addr
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.config.bind_addr))?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        tracing::info!("HTTP server bound on {}", listener.local_addr()?);
        Ok(listener)
    }

    /// Serve `router` on `listener` until `cancel` fires, then drain gracefully.
    pub async fn serve(
        listener: TcpListener,
        router: Router,
        cancel: CancellationToken,
    ) -> Result<()> {
        let shutdown = async move {
            cancel.cancelled().await;
            tracing::info!("HTTP server shutting down gracefully (cancellation)");
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn timeout_is_off_unless_configured() {
        let cfg = ApiIngressConfig::default();
        assert_eq!(cfg.request_timeout(), None);
        assert_eq!(cfg.body_limit_bytes, 16 * 1024 * 1024);

        let cfg = ApiIngressConfig {
            timeout_sec: 30,
            ..Default::default()
        };
        assert_eq!(cfg.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn bind_rejects_garbage_address() {
        let ingress = ApiIngress::new(ApiIngressConfig {
            bind_addr: "not-an-address".into(),
            ..Default::default()
        });
        assert!(ingress.bind().await.is_err());
    }
}
