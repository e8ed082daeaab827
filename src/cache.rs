//! In-memory TTL cache for response bodies, backed by `DashMap`.

use dashmap::DashMap;
use std::time::{Duration, Instant};

/// A cached response body with its expiration time.
struct Entry {
    body: String,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// Thread-safe response cache keyed by request URL.
///
/// Bodies are stored as the raw text the server returned. Expired entries
/// are lazily evicted on the next `get` for that URL.
pub struct ResponseCache {
    store: DashMap<String, Entry>,
    ttl: Duration,
}

impl ResponseCache {
    /// Creates a cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: DashMap::new(),
            ttl,
        }
    }

    /// Returns the body cached for `url`, or `None` if missing or expired.
    pub fn get(&self, url: &str) -> Option<String> {
        let entry = self.store.get(url)?;
        if entry.is_expired() {
            drop(entry);
            self.store.remove(url);
            return None;
        }
        Some(entry.body.clone())
    }

    /// Number of unexpired entries. Expired entries awaiting lazy
    /// eviction are not counted.
    pub fn len(&self) -> usize {
        self.store.iter().filter(|e| !e.is_expired()).count()
    }

    /// Returns `true` when no unexpired entry is held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts or overwrites the body cached for `url`. The entry expires
    /// after the configured TTL.
    pub fn set(&self, url: String, body: String) {
        self.store.insert(
            url,
            Entry {
                body,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Removes all entries from the cache.
    pub fn clear(&self) {
        self.store.clear();
    }
}
