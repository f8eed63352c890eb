use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};
use tracing::debug;

use crate::errors::HotListError;

#[derive(Clone)]
pub struct CacheEntry {
    pub data: Value,
    pub timestamp: SystemTime,
}

/// Shared key-value cache the route handlers read through.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, HotListError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), HotListError>;

    async fn del(&self, key: &str) -> Result<(), HotListError>;

    /// Replace whatever is stored under `key`.
    ///
    /// The default deletes then sets, so a reader in between sees a miss.
    /// Stores that can swap a value in one step should override this.
    async fn replace(&self, key: &str, value: Value) -> Result<(), HotListError> {
        self.del(key).await?;
        self.set(key, value).await
    }
}

/// In-process cache with a single TTL for every key.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, CacheEntry>>, HotListError> {
        self.entries
            .lock()
            .map_err(|_| HotListError::Cache("cache lock poisoned".to_string()))
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Value>, HotListError> {
        let mut entries = self.lock()?;
        match entries.get(key) {
            Some(entry) if entry.timestamp.elapsed().map_or(false, |e| e < self.ttl) => {
                debug!("Cache hit for {}", key);
                return Ok(Some(entry.data.clone()));
            }
            Some(_) => {}
            None => {
                debug!("Cache miss for {}", key);
                return Ok(None);
            }
        }

        debug!("Cache entry for {} expired", key);
        entries.remove(key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), HotListError> {
        self.lock()?.insert(
            key.to_string(),
            CacheEntry {
                data: value,
                timestamp: SystemTime::now(),
            },
        );
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), HotListError> {
        self.lock()?.remove(key);
        Ok(())
    }

    async fn replace(&self, key: &str, value: Value) -> Result<(), HotListError> {
        self.set(key, value).await
    }
}
