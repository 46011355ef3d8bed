//! Tag-based response cache.
//!
//! Each cached body carries the cache tags of the collections it was
//! built from; the webhook invalidation planner names tags to drop when
//! content changes. Entries also expire on a TTL so a missed webhook
//! cannot leave a page stale forever.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

struct Entry {
    body: String,
    tags: Vec<String>,
    stored_at: DateTime<Utc>,
}

/// An in-process cache of response bodies keyed by request path.
pub struct TagCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, Entry>>,
}

impl TagCache {
    /// Create a cache with the given time-to-live.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Create a cache with a TTL in whole days. One day is the site's
    /// default content lifetime.
    pub fn days(days: i64) -> Self {
        Self::new(Duration::days(days))
    }

    /// Fetch a fresh body. Stale entries are evicted on access.
    pub fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(key) {
            Some(entry) if Utc::now() - entry.stored_at < self.ttl => Some(entry.body.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a body under the given tags.
    pub fn put(&self, key: &str, tags: &[&str], body: String) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            key.to_string(),
            Entry {
                body,
                tags: tags.iter().map(|t| t.to_string()).collect(),
                stored_at: Utc::now(),
            },
        );
    }

    /// Drop every entry carrying the tag. Returns how many were removed.
    pub fn invalidate_tag(&self, tag: &str) -> usize {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let before = entries.len();
        entries.retain(|_, entry| !entry.tags.iter().any(|t| t == tag));
        before - entries.len()
    }

    /// Drop everything.
    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }

    /// Number of live entries (stale ones included until touched).
    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TagCache {
    fn default() -> Self {
        Self::days(1)
    }
}
