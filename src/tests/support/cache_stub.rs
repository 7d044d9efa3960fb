use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::modules::skill::application::ports::outgoing::value_cache::{
    ValueCache, ValueCacheError,
};

/// In-memory `ValueCache` for tests. TTLs are accepted and ignored.
#[derive(Default)]
pub struct InMemoryValueCache {
    entries: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl ValueCache for InMemoryValueCache {
    async fn get(&self, key: &str) -> Result<Option<String>, ValueCacheError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(
        &self,
        key: &str,
        value: String,
        _ttl_seconds: u64,
    ) -> Result<(), ValueCacheError> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), ValueCacheError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
