//! LRU cache for HTTP response bodies, keyed by URL.
//!
//! Each page of the site used to re-fetch on every visit, even for identical
//! URLs. Caching the raw body here means repeated navigations are served
//! from memory until the TTL lapses.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::LazyLock;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::types::CachedHttpResponse;
use crate::constants::HTTP_CACHE_CAPACITY;

static HTTP_RESPONSE_CACHE: LazyLock<RwLock<LruCache<String, CachedHttpResponse>>> =
    LazyLock::new(|| {
        RwLock::new(LruCache::new(
            NonZeroUsize::new(HTTP_CACHE_CAPACITY).unwrap(),
        ))
    });

/// Caches an HTTP response body with TTL
pub async fn cache_http_response(url: String, data: String, ttl_seconds: u64) {
    debug!(
        "Caching HTTP response: url={}, data_size={}, ttl={}s",
        url,
        data.len(),
        ttl_seconds
    );

    let cached_data = CachedHttpResponse::new(data, ttl_seconds);
    let mut cache = HTTP_RESPONSE_CACHE.write().await;
    cache.put(url, cached_data);
}

/// Retrieves a cached HTTP response body if it has not expired
pub async fn get_cached_http_response(url: &str) -> Option<String> {
    let mut cache = HTTP_RESPONSE_CACHE.write().await;

    if let Some(cached_entry) = cache.get(url) {
        if !cached_entry.is_expired() {
            debug!(
                "Cache hit for HTTP response: url={}, age={:?}",
                url,
                cached_entry.cached_at.elapsed()
            );
            return Some(cached_entry.data.clone());
        }

        warn!(
            "Removing expired HTTP response cache entry: url={}, age={:?}, ttl={:?}",
            url,
            cached_entry.cached_at.elapsed(),
            Duration::from_secs(cached_entry.ttl_seconds)
        );
        cache.pop(url);
    } else {
        debug!("Cache miss for HTTP response: url={}", url);
    }

    None
}

/// Gets the current HTTP response cache size for monitoring purposes
pub async fn get_http_response_cache_size() -> usize {
    HTTP_RESPONSE_CACHE.read().await.len()
}

/// Clears all HTTP response cache entries
pub async fn clear_http_response_cache() {
    HTTP_RESPONSE_CACHE.write().await.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_cache_round_trip() {
        clear_http_response_cache().await;

        let url = "https://api.nardi.ge/api/partners?populate=*&sort[0]=order:asc";
        cache_http_response(url.to_string(), r#"{"data":[]}"#.to_string(), 60).await;

        assert_eq!(
            get_cached_http_response(url).await.as_deref(),
            Some(r#"{"data":[]}"#)
        );
        assert_eq!(get_http_response_cache_size().await, 1);

        clear_http_response_cache().await;
        assert!(get_cached_http_response(url).await.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_expired_entry_evicted() {
        clear_http_response_cache().await;

        let url = "https://api.nardi.ge/api/heroes?populate=*";
        cache_http_response(url.to_string(), "{}".to_string(), 0).await;
        tokio::time::sleep(Duration::from_millis(5)).await;

        assert!(get_cached_http_response(url).await.is_none());
        assert_eq!(get_http_response_cache_size().await, 0);
    }
}
