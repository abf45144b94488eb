//! Process-scoped event cache
//!
//! Entries expire after a fixed TTL. The cache is bounded: inserting into a
//! full cache first drops expired entries, then the oldest one.

use shared::models::Event;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Purge interval of the background cleanup task
pub const PURGE_INTERVAL: Duration = Duration::from_secs(60);

struct CacheEntry {
    event: Arc<Event>,
    inserted_at: Instant,
    expires_at: Instant,
}

/// Event cache shared across requests
#[derive(Clone)]
pub struct EventCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
    capacity: usize,
}

impl EventCache {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            capacity,
        }
    }

    /// A zero TTL or capacity turns the cache off
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero() && self.capacity > 0
    }

    pub async fn get(&self, event_id: &str) -> Option<Arc<Event>> {
        let entries = self.entries.read().await;
        entries
            .get(event_id)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.event.clone())
    }

    pub async fn insert(&self, event_id: String, event: Arc<Event>) {
        if !self.is_enabled() {
            return;
        }

        let now = Instant::now();
        let mut entries = self.entries.write().await;

        if entries.len() >= self.capacity && !entries.contains_key(&event_id) {
            entries.retain(|_, entry| entry.expires_at > now);
            if entries.len() >= self.capacity
                && let Some(oldest) = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.inserted_at)
                    .map(|(key, _)| key.clone())
            {
                entries.remove(&oldest);
            }
        }

        entries.insert(
            event_id,
            CacheEntry {
                event,
                inserted_at: now,
                expires_at: now + self.ttl,
            },
        );
    }

    /// Drop expired entries, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
