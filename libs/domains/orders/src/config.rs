use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or, env_required};
use std::fmt;
use std::time::Duration;

/// Path of the order-management API below its host.
pub const SERVICE_PATH: &str = "/maestro/v1";
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the upstream order-management API.
///
/// Read once at startup and handed to [`crate::client::HttpOrderClient::new`].
#[derive(Clone)]
pub struct UpstreamConfig {
    /// Base URL every request path is appended to, e.g. `http://host/maestro/v1`
    pub base_url: String,
    /// Sent as `X-Api-Key`
    pub api_key: String,
    /// Sent as `X-Tenant-Id`
    pub tenant_id: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl UpstreamConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            tenant_id: tenant_id.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `{api_url}/maestro/v1`, tolerating a trailing slash on `api_url`.
    pub fn service_url(api_url: &str) -> String {
        format!("{}{}", api_url.trim_end_matches('/'), SERVICE_PATH)
    }
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("tenant_id", &self.tenant_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl FromEnv for UpstreamConfig {
    /// - API_URL: upstream host, defaults to http://localhost:8080
    /// - APIKEY: required
    /// - TENANT_ID: required
    /// - UPSTREAM_TIMEOUT_SECS: defaults to 30
    fn from_env() -> Result<Self, ConfigError> {
        let api_url = env_or_default("API_URL", DEFAULT_API_URL);
        let api_key = env_required("APIKEY")?;
        let tenant_id = env_required("TENANT_ID")?;
        let timeout_secs = env_parse_or("UPSTREAM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        Ok(Self::new(Self::service_url(&api_url), api_key, tenant_id)
            .with_timeout(Duration::from_secs(timeout_secs)))
    }
}
