use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ValueCacheError {
    #[error("Cache error: {0}")]
    CacheError(String),
}

/// TTL'd string cache. Values are JSON-encoded by the caller; the cache
/// itself never fails a read path - callers treat errors as a miss.
#[async_trait]
pub trait ValueCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, ValueCacheError>;

    async fn set(&self, key: &str, value: String, ttl_seconds: u64)
        -> Result<(), ValueCacheError>;

    async fn remove(&self, key: &str) -> Result<(), ValueCacheError>;
}
