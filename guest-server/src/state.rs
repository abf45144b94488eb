//! Application state for guest-server

use guest_client::{ClientConfig, UpstreamClient};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Event;
use std::sync::Arc;

use crate::cache::EventCache;
use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// `None` when the upstream base URL is missing or unusable
    upstream: Option<UpstreamClient>,
    pub event_cache: EventCache,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let upstream = match config.upstream_api_base.as_deref() {
            None => {
                tracing::warn!("UPSTREAM_API_BASE is not set; event routes will answer with a configuration error");
                None
            }
            Some(base) => match ClientConfig::new(base)
                .with_timeout(config.upstream_timeout_secs)
                .build_client()
            {
                Ok(client) => Some(client),
                Err(e) => {
                    tracing::error!(error = %e, "Invalid UPSTREAM_API_BASE");
                    None
                }
            },
        };

        let event_cache = EventCache::new(config.event_cache_ttl(), config.event_cache_capacity);

        Self {
            upstream,
            event_cache,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.upstream.is_some()
    }

    /// Upstream client, or a configuration error
    pub fn upstream(&self) -> AppResult<&UpstreamClient> {
        self.upstream.as_ref().ok_or_else(|| {
            tracing::error!("Upstream request attempted without UPSTREAM_API_BASE");
            AppError::new(ErrorCode::ConfigError)
        })
    }

    /// Event by id, served from the cache when fresh
    pub async fn load_event(&self, event_id: &str) -> AppResult<Arc<Event>> {
        if let Some(event) = self.event_cache.get(event_id).await {
            tracing::debug!(event_id, "Event cache hit");
            return Ok(event);
        }

        let event = self.upstream()?.get_event(event_id).await.map_err(|e| {
            if e.is_not_found() {
                AppError::event_not_found(event_id)
            } else {
                AppError::from(e)
            }
        })?;

        let event = Arc::new(event);
        self.event_cache
            .insert(event_id.to_string(), event.clone())
            .await;
        Ok(event)
    }
}
