//! Client configuration

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for connecting to the upstream event API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://events.example.com/api/public")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an upstream client from this configuration
    pub fn build_client(&self) -> crate::ClientResult<crate::UpstreamClient> {
        crate::UpstreamClient::new(self)
    }
}
