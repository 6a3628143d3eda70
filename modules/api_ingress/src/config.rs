use std::time::Duration;

/// HTTP ingress configuration: where to listen and which cross-cutting layers to apply.
#[derive(Debug, Clone)]
pub struct ApiIngressConfig {
    pub bind_addr: String,
    /// Per-request timeout in seconds; 0 disables it.
    pub timeout_sec: u64,
    pub cors_enabled: bool,
    pub body_limit_bytes: usize,
}

const DEFAULT_BODY_LIMIT: usize = 16 * 1024 * 1024;

impl Default for ApiIngressConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            timeout_sec: 0,
            cors_enabled: false,
            body_limit_bytes: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ApiIngressConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout_sec > 0).then(|| Duration::from_secs(self.timeout_sec))
    }
}
