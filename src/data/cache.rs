use std::{
    num::NonZeroUsize,
    sync::Mutex,
    time::{Duration, Instant},
};

use lru::LruCache;
use serde_json::Value;

use super::client::DataType;

#[derive(Debug)]
struct CachedPayload {
    stored_at: Instant,
    payload: Value,
}

/// Raw endpoint payloads kept for a fixed time-to-live.
#[derive(Debug)]
pub struct PayloadCache {
    ttl: Duration,
    entries: Mutex<LruCache<DataType, CachedPayload>>,
}

impl PayloadCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(DataType::ALL.len()).unwrap_or(NonZeroUsize::MIN);
        Self {
            ttl,
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, key: DataType) -> Option<Value> {
        self.get_at(key, Instant::now())
    }

    pub fn put(&self, key: DataType, payload: Value) {
        self.put_at(key, payload, Instant::now());
    }

    fn get_at(&self, key: DataType, now: Instant) -> Option<Value> {
        let mut entries = self.entries.lock().ok()?;
        let fresh = entries
            .peek(&key)
            .map(|entry| now.saturating_duration_since(entry.stored_at) < self.ttl)?;
        if fresh {
            entries.get(&key).map(|entry| entry.payload.clone())
        } else {
            entries.pop(&key);
            None
        }
    }

    fn put_at(&self, key: DataType, payload: Value, now: Instant) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.put(
                key,
                CachedPayload {
                    stored_at: now,
                    payload,
                },
            );
        }
    }
}
