//! Query Cache
//!
//! Keyed cache for collections fetched over the bridge, shared across view
//! instances. Invalidation is explicit and by key: a stale entry keeps its
//! value but forces the next read-through to refetch.

use std::future::Future;
use std::sync::RwLock;

use ahash::AHashMap;
use serde_json::Value;

use crate::error::Result;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    stale: bool,
    /// Bumped on every `put`; lets tests observe refetches
    epoch: u64,
}

/// Keyed, invalidatable collection cache
#[derive(Default)]
pub struct QueryCache {
    entries: RwLock<AHashMap<String, CacheEntry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh value for a key, if any
    pub fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read().expect("query cache lock poisoned");
        entries
            .get(key)
            .filter(|e| !e.stale)
            .map(|e| e.value.clone())
    }

    /// Store a fresh value
    pub fn put(&self, key: &str, value: Value) {
        let mut entries = self.entries.write().expect("query cache lock poisoned");
        let epoch = entries.get(key).map_or(0, |e| e.epoch) + 1;
        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                stale: false,
                epoch,
            },
        );
    }

    /// Mark a key stale; the next read-through refetches
    pub fn invalidate(&self, key: &str) {
        let mut entries = self.entries.write().expect("query cache lock poisoned");
        if let Some(entry) = entries.get_mut(key) {
            entry.stale = true;
        }
    }

    /// Missing keys count as stale
    pub fn is_stale(&self, key: &str) -> bool {
        let entries = self.entries.read().expect("query cache lock poisoned");
        entries.get(key).is_none_or(|e| e.stale)
    }

    /// Number of times a key has been (re)stored
    pub fn epoch(&self, key: &str) -> u64 {
        let entries = self.entries.read().expect("query cache lock poisoned");
        entries.get(key).map_or(0, |e| e.epoch)
    }

    /// Read-through: return the fresh value, or run `fetch` and store its
    /// result when the key is missing or stale. The fetch is only started
    /// on a miss.
    pub async fn read_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Result<Value>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value>>,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }
        let value = fetch().await?;
        self.put(key, value.clone());
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_missing_key_is_stale() {
        let cache = QueryCache::new();
        assert!(cache.is_stale("announcements"));
        assert_eq!(cache.get("announcements"), None);
        assert_eq!(cache.epoch("announcements"), 0);
    }

    #[test]
    fn test_put_then_invalidate() {
        let cache = QueryCache::new();
        cache.put("announcements", json!([1, 2]));
        assert!(!cache.is_stale("announcements"));
        assert_eq!(cache.get("announcements"), Some(json!([1, 2])));

        cache.invalidate("announcements");
        assert!(cache.is_stale("announcements"));
        // Stale entries are not served
        assert_eq!(cache.get("announcements"), None);
    }

    #[tokio::test]
    async fn test_read_through_fetches_once_while_fresh() {
        let cache = QueryCache::new();
        let fetches = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .read_or_fetch("announcements", || async {
                    fetches.fetch_add(1, Ordering::SeqCst);
                    Ok(json!(["a"]))
                })
                .await
                .expect("read_or_fetch failed");
            assert_eq!(value, json!(["a"]));
        }

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert_eq!(cache.epoch("announcements"), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let cache = QueryCache::new();
        cache.put("announcements", json!(["old"]));
        cache.invalidate("announcements");

        let value = cache
            .read_or_fetch("announcements", || async { Ok(json!(["new"])) })
            .await
            .expect("read_or_fetch failed");

        assert_eq!(value, json!(["new"]));
        assert_eq!(cache.epoch("announcements"), 2);
        assert!(!cache.is_stale("announcements"));
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_entry_stale() {
        let cache = QueryCache::new();
        let result = cache
            .read_or_fetch("announcements", || async {
                Err(crate::error::Error::Bridge {
                    message: "host offline".into(),
                })
            })
            .await;

        assert!(result.is_err());
        assert!(cache.is_stale("announcements"));
        assert_eq!(cache.epoch("announcements"), 0);
    }
}
