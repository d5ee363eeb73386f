//! Catalog cache interface and the bundled in-memory store.

use std::num::NonZeroUsize;

use futures::future::BoxFuture;
use lru::LruCache;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::CatalogError;

/// Default number of source URLs the bundled store retains.
const DEFAULT_CAPACITY: usize = 32;

/// One cached catalog payload, keyed by its source URL.
#[derive(Clone, Debug)]
pub struct CachedCatalog {
    /// The decoded JSON document exactly as fetched.
    pub json: Value,
    /// `ETag` response header observed when the payload was fetched.
    pub etag: Option<String>,
    /// When the payload was written to the store.
    pub fetched_at: chrono::DateTime<chrono::Utc>,
}

/// Keyed store mapping source URLs to fetched catalog payloads.
///
/// The loader reads through this before every fetch and writes back after
/// every successful one. No expiry policy is required of the store;
/// staleness handling (use cached, then refresh) is the loader's concern.
/// Concurrent writers may race on a key; last write wins is sufficient.
pub trait CacheStore: Send + Sync {
    /// What: Look up the cached payload for `url`.
    ///
    /// Output:
    /// - `Ok(None)` on a miss. An `Err` is treated by the loader as a miss
    ///   with a logged diagnostic, never as a fatal condition.
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<Option<CachedCatalog>, CatalogError>>;

    /// What: Store `json` (and the response `etag`, when one was present)
    /// for `url`, stamping the write time.
    fn set<'a>(
        &'a self,
        url: &'a str,
        json: Value,
        etag: Option<String>,
    ) -> BoxFuture<'a, Result<(), CatalogError>>;
}

/// Bounded in-memory [`CacheStore`] backed by an LRU map.
///
/// Suitable for hosts without a persistence layer and for tests. Entries
/// survive for the life of the store only.
pub struct MemoryCacheStore {
    /// LRU entries behind an async lock; reads promote, writes evict.
    entries: Mutex<LruCache<String, CachedCatalog>>,
}

impl MemoryCacheStore {
    /// Create a store retaining at most `capacity` source URLs.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_CAPACITY).expect("default capacity is nonzero"))
    }
}

impl CacheStore for MemoryCacheStore {
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<Option<CachedCatalog>, CatalogError>> {
        Box::pin(async move {
            let mut entries = self.entries.lock().await;
            Ok(entries.get(url).cloned())
        })
    }

    fn set<'a>(
        &'a self,
        url: &'a str,
        json: Value,
        etag: Option<String>,
    ) -> BoxFuture<'a, Result<(), CatalogError>> {
        Box::pin(async move {
            let mut entries = self.entries.lock().await;
            entries.put(
                url.to_string(),
                CachedCatalog {
                    json,
                    etag,
                    fetched_at: chrono::Utc::now(),
                },
            );
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    /// What: Set-then-get roundtrip with last-write-wins overwrites
    ///
    /// - Input: Two writes to the same URL with different payloads
    /// - Output: The second payload and etag are returned
    async fn memory_store_last_write_wins() {
        let store = MemoryCacheStore::default();
        store
            .set("https://a/owo.json", json!({"v": 1}), None)
            .await
            .expect("set");
        store
            .set("https://a/owo.json", json!({"v": 2}), Some("\"tag\"".into()))
            .await
            .expect("set");

        let entry = store
            .get("https://a/owo.json")
            .await
            .expect("get")
            .expect("hit");
        assert_eq!(entry.json, json!({"v": 2}));
        assert_eq!(entry.etag.as_deref(), Some("\"tag\""));
    }

    #[tokio::test]
    /// What: Capacity bound evicts the least recently used entry
    ///
    /// - Input: Capacity-1 store receiving two URLs
    /// - Output: The first URL misses, the second hits
    async fn memory_store_evicts_lru() {
        let store = MemoryCacheStore::new(NonZeroUsize::new(1).expect("nonzero"));
        store
            .set("https://a/owo.json", json!({}), None)
            .await
            .expect("set");
        store
            .set("https://b/owo.json", json!({}), None)
            .await
            .expect("set");

        assert!(store.get("https://a/owo.json").await.expect("get").is_none());
        assert!(store.get("https://b/owo.json").await.expect("get").is_some());
    }
}
