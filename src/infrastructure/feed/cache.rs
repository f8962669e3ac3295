//! # Feed Cache
//!
//! Short-lived cache of successful feed bodies, keyed by URL.
//! A zero TTL disables it entirely.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

struct CachedFeed {
    body: String,
    stored_at: Instant,
}

pub struct FeedCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CachedFeed>>,
}

impl FeedCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Returns the cached body for `url` if it is younger than the TTL.
    pub async fn get(&self, url: &str) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }

        let mut entries = self.entries.lock().await;
        match entries.get(url) {
            Some(cached) if cached.stored_at.elapsed() < self.ttl => Some(cached.body.clone()),
            Some(_) => {
                entries.remove(url);
                None
            }
            None => None,
        }
    }

    pub async fn put(&self, url: &str, body: &str) {
        if !self.is_enabled() {
            return;
        }

        self.entries.lock().await.insert(
            url.to_string(),
            CachedFeed {
                body: body.to_string(),
                stored_at: Instant::now(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_cache_stores_nothing() {
        let cache = FeedCache::new(Duration::ZERO);
        cache.put("https://example.test/day", "<rss/>").await;
        assert!(cache.get("https://example.test/day").await.is_none());
    }

    #[tokio::test]
    async fn test_hit_is_keyed_by_url() {
        let cache = FeedCache::new(Duration::from_secs(60));
        cache.put("https://example.test/day", "day").await;
        cache.put("https://example.test/week", "week").await;

        assert_eq!(cache.get("https://example.test/day").await.as_deref(), Some("day"));
        assert_eq!(cache.get("https://example.test/week").await.as_deref(), Some("week"));
        assert!(cache.get("https://example.test/other").await.is_none());
    }

    #[tokio::test]
    async fn test_entries_expire() {
        let cache = FeedCache::new(Duration::from_millis(20));
        cache.put("https://example.test/day", "day").await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(cache.get("https://example.test/day").await.is_none());
    }
}
