// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Key under which the bearer token is persisted.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Small string key/value store for client-side credentials.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store, mainly for tests and short-lived tools.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Token store backed by a JSON map on disk. Reads happen once at open;
/// writes are best-effort and only logged on failure, so a read-only disk
/// degrades to in-memory behavior instead of failing requests.
pub struct FileTokenStore {
    path: PathBuf,
    inner: Mutex<HashMap<String, String>>,
}

impl FileTokenStore {
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self {
            path,
            inner: Mutex::new(map),
        }
    }

    fn persist(&self, map: &HashMap<String, String>) {
        let serialized = match serde_json::to_string_pretty(map) {
            Ok(s) => s,
            Err(e) => {
                warn!(path = %self.path.display(), "failed to serialize token store: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, serialized) {
            warn!(path = %self.path.display(), "failed to persist token store: {e}");
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        map.insert(key.to_string(), value.to_string());
        self.persist(&map);
    }

    fn remove(&self, key: &str) {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        map.remove(key);
        self.persist(&map);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_round_trips_and_removes() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);
        store.set(AUTH_TOKEN_KEY, "abc123");
        assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("abc123"));
        store.remove(AUTH_TOKEN_KEY);
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("tokens.json");

        let store = FileTokenStore::open(&path);
        store.set(AUTH_TOKEN_KEY, "persisted");
        drop(store);

        let reopened = FileTokenStore::open(&path);
        assert_eq!(reopened.get(AUTH_TOKEN_KEY).as_deref(), Some("persisted"));
    }

    #[test]
    fn file_store_tolerates_corrupt_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("tokens.json");
        std::fs::write(&path, "{not json").expect("write");

        let store = FileTokenStore::open(&path);
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);
        store.set(AUTH_TOKEN_KEY, "fresh");
        assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("fresh"));
    }
}
