//! In-memory TTL store for cached responses.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use serde_json::Value;

use super::key::CacheKey;

struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(value: Value, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Process-lifetime store mapping request fingerprints to responses.
///
/// All operations are total, synchronous, and in-memory. Interior
/// mutability lets the coordinator write through `&self`; concurrent
/// writers on the same key resolve as last-write-wins.
pub struct CacheStore {
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the stored value only if present and unexpired. An expired
    /// entry behaves as absent and is dropped on detection.
    pub fn get(&self, key: &CacheKey) -> Option<Value> {
        let mut entries = self.entries.write().unwrap();
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Stores `value` until `ttl` from now, unconditionally overwriting any
    /// prior entry for the key.
    pub fn put(&self, key: CacheKey, value: Value, ttl: Duration) {
        self.entries
            .write()
            .unwrap()
            .insert(key, CacheEntry::new(value, ttl));
    }

    /// Removes every entry regardless of expiry state. Idempotent.
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap()
            .values()
            .filter(|e| !e.is_expired())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread::sleep;

    fn key(endpoint: &str) -> CacheKey {
        CacheKey::for_request("GET", endpoint)
    }

    #[test]
    fn get_returns_fresh_entries() {
        let store = CacheStore::new();
        store.put(key("/a"), json!({"id": 1}), Duration::from_secs(60));
        assert_eq!(store.get(&key("/a")), Some(json!({"id": 1})));
    }

    #[test]
    fn expired_entries_behave_as_absent() {
        let store = CacheStore::new();
        store.put(key("/a"), json!(1), Duration::from_millis(10));
        sleep(Duration::from_millis(30));
        assert_eq!(store.get(&key("/a")), None);
        // The miss also evicted the dead entry.
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn put_overwrites_unconditionally() {
        let store = CacheStore::new();
        store.put(key("/a"), json!("old"), Duration::from_secs(60));
        store.put(key("/a"), json!("new"), Duration::from_secs(60));
        assert_eq!(store.get(&key("/a")), Some(json!("new")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_removes_everything_regardless_of_expiry() {
        let store = CacheStore::new();
        store.put(key("/live"), json!(1), Duration::from_secs(60));
        store.put(key("/dead"), json!(2), Duration::from_millis(1));
        sleep(Duration::from_millis(10));
        store.clear();
        assert_eq!(store.get(&key("/live")), None);
        assert_eq!(store.get(&key("/dead")), None);
        assert!(store.is_empty());
    }

    #[test]
    fn len_counts_only_live_entries() {
        let store = CacheStore::new();
        store.put(key("/live"), json!(1), Duration::from_secs(60));
        store.put(key("/dead"), json!(2), Duration::from_millis(1));
        sleep(Duration::from_millis(10));
        assert_eq!(store.len(), 1);
    }
}
