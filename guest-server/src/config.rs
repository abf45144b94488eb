//! Guest server configuration

use std::str::FromStr;
use std::time::Duration;

/// Guest server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream event API base URL; `None` is a configuration error reported per request
    pub upstream_api_base: Option<String>,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Upstream request timeout in seconds
    pub upstream_timeout_secs: u64,
    /// Event cache TTL in seconds (0 disables the cache)
    pub event_cache_ttl_secs: u64,
    /// Maximum number of cached events
    pub event_cache_capacity: usize,
    /// Log level (trace | debug | info | warn | error)
    pub log_level: String,
    /// Daily rolling log directory; stdout when unset
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Self {
        fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
            value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
        }

        let non_empty = |name: &str| get(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            upstream_api_base: non_empty("UPSTREAM_API_BASE"),
            http_port: parse_or(get("HTTP_PORT"), 8080),
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            upstream_timeout_secs: parse_or(get("UPSTREAM_TIMEOUT_SECS"), 15),
            event_cache_ttl_secs: parse_or(get("EVENT_CACHE_TTL_SECS"), 30),
            event_cache_capacity: parse_or(get("EVENT_CACHE_CAPACITY"), 256),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty("LOG_DIR"),
        }
    }

    /// Defaults pointed at `base`
    pub fn with_upstream(base: impl Into<String>) -> Self {
        Self {
            upstream_api_base: Some(base.into()),
            ..Self::from_source(|_| None)
        }
    }

    pub fn event_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.event_cache_ttl_secs)
    }
}
