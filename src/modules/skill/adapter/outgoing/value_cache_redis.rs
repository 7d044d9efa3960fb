use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::modules::skill::application::ports::outgoing::value_cache::{
    ValueCache, ValueCacheError,
};

/// Redis-backed implementation of `ValueCache`.
///
/// Redis TTL is the single source of cleanup; there is no sweeper and no
/// eviction pressure beyond expiry. Values are opaque JSON strings.
#[derive(Clone)]
pub struct ValueCacheRedis {
    pool: Arc<Pool>,
}

impl ValueCacheRedis {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, ValueCacheError> {
        self.pool
            .get()
            .await
            .map_err(|e| ValueCacheError::CacheError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl ValueCache for ValueCacheRedis {
    async fn get(&self, key: &str) -> Result<Option<String>, ValueCacheError> {
        let mut conn = self.get_conn().await?;

        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| ValueCacheError::CacheError(e.to_string()))
    }

    async fn set(
        &self,
        key: &str,
        value: String,
        ttl_seconds: u64,
    ) -> Result<(), ValueCacheError> {
        let mut conn = self.get_conn().await?;

        conn.set_ex::<_, _, ()>(key, value, ttl_seconds)
            .await
            .map_err(|e| ValueCacheError::CacheError(e.to_string()))
    }

    async fn remove(&self, key: &str) -> Result<(), ValueCacheError> {
        let mut conn = self.get_conn().await?;

        conn.del::<_, ()>(key)
            .await
            .map_err(|e| ValueCacheError::CacheError(e.to_string()))
    }
}
